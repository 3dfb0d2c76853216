//! # icbt-refid
//!
//! Tagged, time-ordered reference identifiers for the icbt application.
//!
//! ## Design Principles
//!
//! - RefIds are minted server-side when a row is created and never change
//! - Every surface (text, bytes, JSON, database) decodes strictly
//! - RefIds are typed so one entity's id is never accepted as another's
//! - All operations are pure and safe to call from any thread
//!
//! ## Wire Format
//!
//! A RefId is 18 bytes: a tag byte, a reserved zero byte, and a UUIDv7.
//! Its text form is 29 symbols of Crockford-style base32:
//!
//! ```text
//! 040baxr70ja4ggc0jbgw5dzx7vb52
//! ^^ tag 1
//! ```
//!
//! This format provides:
//! - Type safety (the tag names the entity)
//! - Sortability (UUIDv7 leads with a millisecond timestamp)
//! - Uniqueness (74 random bits per millisecond)
//! - Human typability (no `i`, `l`, `o` or `u`; case-insensitive parsing)

mod codec;
pub mod codegen;
pub mod entities;
mod error;
mod marshal;
mod matcher;
mod refid;
pub mod require;
mod sql;
mod typed;

pub use codec::{ALPHABET, BASE64_LEN, ENCODED_LEN, HEX_LEN};
pub use error::RefIdError;
pub use matcher::{Candidate, Matcher};
pub use refid::{RefId, SIZE};
pub use require::{parse_with_require, HasTag, Requirement};
pub use sql::DriverValue;
pub use typed::{NullTypedRefId, RefTag, TypedRefId};

/// Re-export uuid for consumers that need the raw UUID.
pub use uuid::Uuid;
