// Code generated by refidgen. DO NOT EDIT.
// entity: Earmark, tag: 4

use crate::{Matcher, NullTypedRefId, RefTag, TypedRefId};

/// Reserved tag for Earmark reference ids.
pub const EARMARK_TAG: u8 = 4;

/// Marker type binding [`TypedRefId`] to the Earmark entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct EarmarkTag;

impl RefTag for EarmarkTag {
    const TAG: u8 = EARMARK_TAG;
    const NAME: &'static str = "Earmark";
}

/// Reference id of a Earmark.
///
/// `EarmarkRefId::new()` mints a tagged id; `parse`, `parse_with_require`,
/// `from_bytes`, `scan` and serde all reject ids of any other entity.
pub type EarmarkRefId = TypedRefId<EarmarkTag>;

/// Optional Earmark reference id. Absent is not an error.
pub type NullEarmarkRefId = NullTypedRefId<EarmarkTag>;

/// Test matcher accepting any validly tagged Earmark reference id.
pub type EarmarkRefIdMatcher = Matcher<EarmarkTag>;
