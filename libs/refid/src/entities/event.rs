// Code generated by refidgen. DO NOT EDIT.
// entity: Event, tag: 2

use crate::{Matcher, NullTypedRefId, RefTag, TypedRefId};

/// Reserved tag for Event reference ids.
pub const EVENT_TAG: u8 = 2;

/// Marker type binding [`TypedRefId`] to the Event entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct EventTag;

impl RefTag for EventTag {
    const TAG: u8 = EVENT_TAG;
    const NAME: &'static str = "Event";
}

/// Reference id of a Event.
///
/// `EventRefId::new()` mints a tagged id; `parse`, `parse_with_require`,
/// `from_bytes`, `scan` and serde all reject ids of any other entity.
pub type EventRefId = TypedRefId<EventTag>;

/// Optional Event reference id. Absent is not an error.
pub type NullEventRefId = NullTypedRefId<EventTag>;

/// Test matcher accepting any validly tagged Event reference id.
pub type EventRefIdMatcher = Matcher<EventTag>;
