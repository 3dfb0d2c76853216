//! RefId types for every application entity.
//!
//! Each submodule is generated by `refidgen` and must not be edited by hand.
//! To add an entity, pick the next unused tag, run
//!
//! ```text
//! refidgen --name <Entity> --tag-value <tag> --crate-path crate --out-dir libs/refid/src/entities
//! ```
//!
//! then add the module below and a row to [`ENTITY_TAGS`]. Tags are never
//! reused, even after an entity is retired.

mod earmark;
mod event;
mod event_item;
mod notification;
mod user;
mod user_pw_reset;
mod user_verify;

pub use earmark::*;
pub use event::*;
pub use event_item::*;
pub use notification::*;
pub use user::*;
pub use user_pw_reset::*;
pub use user_verify::*;

/// Every assigned entity tag, by entity name.
pub const ENTITY_TAGS: &[(&str, u8)] = &[
    ("User", USER_TAG),
    ("Event", EVENT_TAG),
    ("EventItem", EVENT_ITEM_TAG),
    ("Earmark", EARMARK_TAG),
    ("UserPwReset", USER_PW_RESET_TAG),
    ("UserVerify", USER_VERIFY_TAG),
    ("Notification", NOTIFICATION_TAG),
];

/// Looks up the entity owning `tag`.
pub fn entity_name(tag: u8) -> Option<&'static str> {
    ENTITY_TAGS
        .iter()
        .find(|(_, t)| *t == tag)
        .map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RefIdError, RefTag};

    #[test]
    fn test_all_entity_tags_unique_and_nonzero() {
        let tags: Vec<u8> = ENTITY_TAGS.iter().map(|(_, t)| *t).collect();
        let unique: std::collections::HashSet<_> = tags.iter().collect();
        assert_eq!(tags.len(), unique.len(), "Duplicate entity tags found!");
        assert!(tags.iter().all(|t| *t != 0));
    }

    #[test]
    fn test_marker_names_match_registry() {
        assert_eq!(entity_name(UserTag::TAG), Some(UserTag::NAME));
        assert_eq!(entity_name(EventItemTag::TAG), Some(EventItemTag::NAME));
        assert_eq!(entity_name(NotificationTag::TAG), Some(NotificationTag::NAME));
        assert_eq!(entity_name(0), None);
        assert_eq!(entity_name(200), None);
    }

    #[test]
    fn test_event_id_rejected_as_user_id() {
        let event = EventRefId::new();
        let err = UserRefId::parse(&event.to_string()).unwrap_err();
        assert_eq!(
            err,
            RefIdError::TagMismatch {
                expected: USER_TAG,
                actual: EVENT_TAG,
            }
        );
    }

    #[test]
    fn test_matchers_are_entity_specific() {
        let earmark = EarmarkRefId::new();
        assert!(EarmarkRefIdMatcher::new().matches(earmark));
        assert!(!EventItemRefIdMatcher::new().matches(earmark.to_string().as_str()));
    }

    #[test]
    fn test_nullable_entities() {
        let verify = UserVerifyRefId::new();
        let present = NullUserVerifyRefId::from(verify);
        assert_eq!(present.get(), Some(verify));
        assert!(NullUserPwResetRefId::default().is_none());
    }
}
