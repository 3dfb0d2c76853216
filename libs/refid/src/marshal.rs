//! Serde support.
//!
//! Human-readable formats (JSON, TOML, ...) carry the canonical string;
//! binary formats carry the 18-byte wire form.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::refid::{RefId, SIZE};

impl Serialize for RefId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            serializer.serialize_bytes(&self.to_bytes())
        }
    }
}

struct RefIdVisitor;

impl<'de> Visitor<'de> for RefIdVisitor {
    type Value = RefId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a refid string or {SIZE} bytes")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        RefId::parse(v).map_err(E::custom)
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        RefId::from_bytes(v).map_err(E::custom)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: de::SeqAccess<'de>,
    {
        let mut wire = [0u8; SIZE];
        for (i, slot) in wire.iter_mut().enumerate() {
            *slot = seq
                .next_element()?
                .ok_or_else(|| <A::Error as de::Error>::invalid_length(i, &self))?;
        }
        if seq.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(SIZE + 1, &self));
        }
        Ok(RefId::from_wire(&wire))
    }
}

impl<'de> Deserialize<'de> for RefId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            deserializer.deserialize_str(RefIdVisitor)
        } else {
            deserializer.deserialize_bytes(RefIdVisitor)
        }
    }
}
