// Code generated by refidgen. DO NOT EDIT.
// entity: User, tag: 1

use crate::{Matcher, NullTypedRefId, RefTag, TypedRefId};

/// Reserved tag for User reference ids.
pub const USER_TAG: u8 = 1;

/// Marker type binding [`TypedRefId`] to the User entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct UserTag;

impl RefTag for UserTag {
    const TAG: u8 = USER_TAG;
    const NAME: &'static str = "User";
}

/// Reference id of a User.
///
/// `UserRefId::new()` mints a tagged id; `parse`, `parse_with_require`,
/// `from_bytes`, `scan` and serde all reject ids of any other entity.
pub type UserRefId = TypedRefId<UserTag>;

/// Optional User reference id. Absent is not an error.
pub type NullUserRefId = NullTypedRefId<UserTag>;

/// Test matcher accepting any validly tagged User reference id.
pub type UserRefIdMatcher = Matcher<UserTag>;
