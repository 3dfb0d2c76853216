// Code generated by refidgen. DO NOT EDIT.
// entity: UserPwReset, tag: 5

use crate::{Matcher, NullTypedRefId, RefTag, TypedRefId};

/// Reserved tag for UserPwReset reference ids.
pub const USER_PW_RESET_TAG: u8 = 5;

/// Marker type binding [`TypedRefId`] to the UserPwReset entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct UserPwResetTag;

impl RefTag for UserPwResetTag {
    const TAG: u8 = USER_PW_RESET_TAG;
    const NAME: &'static str = "UserPwReset";
}

/// Reference id of a UserPwReset.
///
/// `UserPwResetRefId::new()` mints a tagged id; `parse`, `parse_with_require`,
/// `from_bytes`, `scan` and serde all reject ids of any other entity.
pub type UserPwResetRefId = TypedRefId<UserPwResetTag>;

/// Optional UserPwReset reference id. Absent is not an error.
pub type NullUserPwResetRefId = NullTypedRefId<UserPwResetTag>;

/// Test matcher accepting any validly tagged UserPwReset reference id.
pub type UserPwResetRefIdMatcher = Matcher<UserPwResetTag>;
