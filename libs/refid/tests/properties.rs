//! Property tests for the RefId codecs and tag layer.

use icbt_refid::entities::{EventRefId, UserRefId, USER_TAG};
use icbt_refid::{RefId, RefIdError, Uuid, ENCODED_LEN, SIZE};
use proptest::prelude::*;

/// 29 alphabet symbols whose last symbol has its padding bit clear.
const CANONICAL_TEXT: &str = "[0-9a-hjkmnp-tv-z]{28}[02468acegjmprtwy]";

fn any_refid() -> impl Strategy<Value = RefId> {
    (any::<u8>(), any::<[u8; 16]>())
        .prop_map(|(tag, uuid)| RefId::from_parts(tag, Uuid::from_bytes(uuid)))
}

/// Rewrites `s` the way a person copying it by hand might: random case,
/// `1` as `i`/`l`, `0` as `o`.
fn sloppy(s: &str, picks: &[u8]) -> String {
    s.chars()
        .zip(picks.iter().cycle())
        .map(|(c, pick)| {
            let c = match (c, pick % 3) {
                ('1', 1) => 'i',
                ('1', 2) => 'l',
                ('0', 1) | ('0', 2) => 'o',
                (c, _) => c,
            };
            if pick % 2 == 0 {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn text_round_trip(id in any_refid()) {
        let s = id.to_string();
        prop_assert_eq!(s.len(), ENCODED_LEN);
        prop_assert_eq!(RefId::parse(&s).unwrap(), id);
    }

    #[test]
    fn binary_round_trip(id in any_refid()) {
        prop_assert_eq!(RefId::from_bytes(&id.to_bytes()).unwrap(), id);
    }

    #[test]
    fn auxiliary_round_trips(id in any_refid()) {
        prop_assert_eq!(RefId::from_hex_string(&id.to_hex_string()).unwrap(), id);
        prop_assert_eq!(RefId::from_base64_string(&id.to_base64_string()).unwrap(), id);
    }

    #[test]
    fn text_order_matches_byte_order(a in any_refid(), b in any_refid()) {
        prop_assert_eq!(a.cmp(&b), a.to_string().cmp(&b.to_string()));
    }

    #[test]
    fn tag_exclusivity(tag in 1u8..=255, other in any::<u8>()) {
        let id = RefId::new_tagged(tag);
        prop_assert!(id.has_tag(tag));
        if other != tag {
            prop_assert!(!id.has_tag(other));
        }
    }

    #[test]
    fn ambiguous_symbols_tolerated(
        id in any_refid(),
        picks in prop::collection::vec(any::<u8>(), ENCODED_LEN)
    ) {
        let canonical = id.to_string();
        let typed = sloppy(&canonical, &picks);
        prop_assert_eq!(RefId::parse(&typed).unwrap(), RefId::parse(&canonical).unwrap());
    }

    #[test]
    fn accepted_text_is_canonical(s in CANONICAL_TEXT) {
        let id = RefId::parse(&s).unwrap();
        prop_assert_eq!(id.to_string(), s.to_lowercase());
        let upper = s.to_uppercase();
        prop_assert_eq!(RefId::parse(&upper).unwrap().to_string(), s.to_lowercase());
    }

    #[test]
    fn other_symbol_counts_rejected(s in "[0-9a-hjkmnp-tv-z]{0,64}") {
        prop_assume!(s.len() != ENCODED_LEN);
        prop_assert_eq!(
            RefId::parse(&s).unwrap_err(),
            RefIdError::SymbolCount { expected: ENCODED_LEN, actual: s.len() }
        );
    }

    #[test]
    fn wrong_lengths_never_panic(buf in prop::collection::vec(any::<u8>(), 0..64)) {
        let result = RefId::from_bytes(&buf);
        if buf.len() == SIZE {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(
                result.unwrap_err(),
                RefIdError::InvalidLength { expected: SIZE, actual: buf.len() }
            );
        }
    }

    #[test]
    fn arbitrary_text_never_panics(s in "\\PC{0,40}") {
        let _ = RefId::parse(&s);
        let _ = UserRefId::parse(&s);
    }

    #[test]
    fn typed_parse_accepts_only_own_tag(id in any_refid()) {
        let result = UserRefId::parse(&id.to_string());
        if id.tag() == USER_TAG {
            prop_assert_eq!(result.unwrap().refid(), id);
        } else {
            prop_assert!(result.unwrap_err().is_tag_mismatch());
        }
    }
}

#[test]
fn strict_length_checking() {
    for len in [0usize, 17, 19, 1000] {
        let err = RefId::from_bytes(&vec![7u8; len]).unwrap_err();
        assert!(err.is_length_error(), "len {len}: {err}");
    }
}

#[test]
fn worked_example() {
    let mut id = RefId::parse("000baxr70ja4ggc0jbgw5dzx7vb52").unwrap();
    assert_eq!(id.tag(), 0);
    let uuid = id.uuid();
    id.set_tag(1);
    assert_eq!(id.to_string(), "040baxr70ja4ggc0jbgw5dzx7vb52");
    assert_eq!(id.uuid(), uuid);
}

#[test]
fn cross_entity_rejection() {
    let event = EventRefId::new();
    assert!(UserRefId::parse(&event.to_string())
        .unwrap_err()
        .is_tag_mismatch());
}

#[test]
fn padded_text_rejected_by_typed_parse() {
    let user = UserRefId::new();
    for suffix in ["0", "z", "7"] {
        let padded = format!("{user}{suffix}");
        assert!(RefId::parse(&padded).unwrap_err().is_length_error());
        assert!(UserRefId::parse(&padded).unwrap_err().is_length_error());
    }
}
