// Code generated by refidgen. DO NOT EDIT.
// entity: Notification, tag: 7

use crate::{Matcher, NullTypedRefId, RefTag, TypedRefId};

/// Reserved tag for Notification reference ids.
pub const NOTIFICATION_TAG: u8 = 7;

/// Marker type binding [`TypedRefId`] to the Notification entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NotificationTag;

impl RefTag for NotificationTag {
    const TAG: u8 = NOTIFICATION_TAG;
    const NAME: &'static str = "Notification";
}

/// Reference id of a Notification.
///
/// `NotificationRefId::new()` mints a tagged id; `parse`, `parse_with_require`,
/// `from_bytes`, `scan` and serde all reject ids of any other entity.
pub type NotificationRefId = TypedRefId<NotificationTag>;

/// Optional Notification reference id. Absent is not an error.
pub type NullNotificationRefId = NullTypedRefId<NotificationTag>;

/// Test matcher accepting any validly tagged Notification reference id.
pub type NotificationRefIdMatcher = Matcher<NotificationTag>;
