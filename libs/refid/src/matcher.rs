//! Argument matchers for test doubles.
//!
//! A [`Matcher`] answers "is this any validly tagged id for entity `T`?"
//! without pinning an exact value, which is what mock expectations usually
//! want for freshly generated ids.

use std::fmt;
use std::marker::PhantomData;

use crate::refid::RefId;
use crate::typed::{RefTag, TypedRefId};

/// Something a matcher can inspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate<'a> {
    /// An already decoded id.
    Decoded(RefId),
    /// A string that still needs parsing.
    Text(&'a str),
    /// A byte buffer in the 18-byte wire form.
    Bytes(&'a [u8]),
}

impl Candidate<'_> {
    fn decode(self) -> Option<RefId> {
        match self {
            Candidate::Decoded(id) => Some(id),
            Candidate::Text(s) => RefId::parse(s).ok(),
            Candidate::Bytes(b) => RefId::from_bytes(b).ok(),
        }
    }
}

impl<T: RefTag> From<TypedRefId<T>> for Candidate<'_> {
    fn from(id: TypedRefId<T>) -> Self {
        Candidate::Decoded(id.refid())
    }
}

impl<T: RefTag> From<&TypedRefId<T>> for Candidate<'_> {
    fn from(id: &TypedRefId<T>) -> Self {
        Candidate::Decoded(id.refid())
    }
}

impl From<RefId> for Candidate<'_> {
    fn from(id: RefId) -> Self {
        Candidate::Decoded(id)
    }
}

impl From<&RefId> for Candidate<'_> {
    fn from(id: &RefId) -> Self {
        Candidate::Decoded(*id)
    }
}

impl<'a> From<&'a str> for Candidate<'a> {
    fn from(s: &'a str) -> Self {
        Candidate::Text(s)
    }
}

impl<'a> From<&'a String> for Candidate<'a> {
    fn from(s: &'a String) -> Self {
        Candidate::Text(s)
    }
}

impl<'a> From<&'a [u8]> for Candidate<'a> {
    fn from(b: &'a [u8]) -> Self {
        Candidate::Bytes(b)
    }
}

impl<'a> From<&'a Vec<u8>> for Candidate<'a> {
    fn from(b: &'a Vec<u8>) -> Self {
        Candidate::Bytes(b)
    }
}

/// Matches any value that decodes to a RefId tagged for `T`.
pub struct Matcher<T: RefTag>(PhantomData<fn() -> T>);

impl<T: RefTag> Matcher<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }

    /// Returns true if `candidate` decodes and carries `T`'s tag.
    /// Undecodable input never matches.
    pub fn matches<'a>(&self, candidate: impl Into<Candidate<'a>>) -> bool {
        candidate
            .into()
            .decode()
            .is_some_and(|id| id.has_tag(T::TAG))
    }
}

impl<T: RefTag> Default for Matcher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RefTag> Clone for Matcher<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: RefTag> Copy for Matcher<T> {}

impl<T: RefTag> fmt::Debug for Matcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}RefIdMatcher", T::NAME)
    }
}

/// Describes the expectation in mock failure output.
impl<T: RefTag> fmt::Display for Matcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "is a {} refid (tag {})", T::NAME, T::TAG)
    }
}
