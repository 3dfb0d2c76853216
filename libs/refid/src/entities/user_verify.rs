// Code generated by refidgen. DO NOT EDIT.
// entity: UserVerify, tag: 6

use crate::{Matcher, NullTypedRefId, RefTag, TypedRefId};

/// Reserved tag for UserVerify reference ids.
pub const USER_VERIFY_TAG: u8 = 6;

/// Marker type binding [`TypedRefId`] to the UserVerify entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct UserVerifyTag;

impl RefTag for UserVerifyTag {
    const TAG: u8 = USER_VERIFY_TAG;
    const NAME: &'static str = "UserVerify";
}

/// Reference id of a UserVerify.
///
/// `UserVerifyRefId::new()` mints a tagged id; `parse`, `parse_with_require`,
/// `from_bytes`, `scan` and serde all reject ids of any other entity.
pub type UserVerifyRefId = TypedRefId<UserVerifyTag>;

/// Optional UserVerify reference id. Absent is not an error.
pub type NullUserVerifyRefId = NullTypedRefId<UserVerifyTag>;

/// Test matcher accepting any validly tagged UserVerify reference id.
pub type UserVerifyRefIdMatcher = Matcher<UserVerifyTag>;
