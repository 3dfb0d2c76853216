// Code generated by refidgen. DO NOT EDIT.
// entity: EventItem, tag: 3

use crate::{Matcher, NullTypedRefId, RefTag, TypedRefId};

/// Reserved tag for EventItem reference ids.
pub const EVENT_ITEM_TAG: u8 = 3;

/// Marker type binding [`TypedRefId`] to the EventItem entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct EventItemTag;

impl RefTag for EventItemTag {
    const TAG: u8 = EVENT_ITEM_TAG;
    const NAME: &'static str = "EventItem";
}

/// Reference id of a EventItem.
///
/// `EventItemRefId::new()` mints a tagged id; `parse`, `parse_with_require`,
/// `from_bytes`, `scan` and serde all reject ids of any other entity.
pub type EventItemRefId = TypedRefId<EventItemTag>;

/// Optional EventItem reference id. Absent is not an error.
pub type NullEventItemRefId = NullTypedRefId<EventItemTag>;

/// Test matcher accepting any validly tagged EventItem reference id.
pub type EventItemRefIdMatcher = Matcher<EventItemTag>;
