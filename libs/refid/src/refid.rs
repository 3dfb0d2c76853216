//! The core RefId value type and its 18-byte wire layout.
//!
//! ```text
//! byte  0      tag (0 = untagged)
//! byte  1      reserved, always zero
//! bytes 2..18  UUIDv7, most significant byte first
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::codec;
use crate::error::RefIdError;

/// Size of the binary wire form in bytes.
pub const SIZE: usize = 18;

const TAG_INDEX: usize = 0;
const RESERVED_INDEX: usize = 1;
const UUID_OFFSET: usize = 2;

/// A tagged, time-ordered reference identifier.
///
/// Equality, hashing and ordering all follow the 18-byte wire form, so two
/// RefIds are equal exactly when their canonical strings are equal. The tag
/// takes part: the same UUID under two different tags is two different ids.
/// Ordering sorts by tag first, then by creation time.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RefId {
    tag: u8,
    uuid: Uuid,
}

impl RefId {
    /// The all-zero RefId.
    pub const NIL: Self = Self {
        tag: 0,
        uuid: Uuid::nil(),
    };

    /// Creates an untagged RefId from a fresh UUIDv7.
    #[must_use]
    pub fn new() -> Self {
        Self::new_tagged(0)
    }

    /// Creates a RefId carrying `tag` from a fresh UUIDv7.
    #[must_use]
    pub fn new_tagged(tag: u8) -> Self {
        Self {
            tag,
            uuid: Uuid::now_v7(),
        }
    }

    /// Assembles a RefId from a tag and an existing UUID.
    #[must_use]
    pub const fn from_parts(tag: u8, uuid: Uuid) -> Self {
        Self { tag, uuid }
    }

    /// Decodes the binary wire form. The slice must be exactly [`SIZE`] bytes.
    pub fn from_bytes(buf: &[u8]) -> Result<Self, RefIdError> {
        let wire: &[u8; SIZE] = buf.try_into().map_err(|_| RefIdError::InvalidLength {
            expected: SIZE,
            actual: buf.len(),
        })?;
        Ok(Self::from_wire(wire))
    }

    pub(crate) fn from_wire(wire: &[u8; SIZE]) -> Self {
        let mut uuid = [0u8; 16];
        uuid.copy_from_slice(&wire[UUID_OFFSET..]);
        Self {
            tag: wire[TAG_INDEX],
            uuid: Uuid::from_bytes(uuid),
        }
    }

    /// Returns the binary wire form.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; SIZE] {
        let mut wire = [0u8; SIZE];
        wire[TAG_INDEX] = self.tag;
        wire[RESERVED_INDEX] = 0;
        wire[UUID_OFFSET..].copy_from_slice(self.uuid.as_bytes());
        wire
    }

    /// Parses the canonical base32 form.
    ///
    /// Input is case-insensitive; `i`/`l` read as `1` and `o` reads as `0`.
    pub fn parse(s: &str) -> Result<Self, RefIdError> {
        codec::decode_native(s).map(|wire| Self::from_wire(&wire))
    }

    /// Parses `s` and requires it to carry `tag`.
    pub fn parse_tagged(tag: u8, s: &str) -> Result<Self, RefIdError> {
        crate::require::parse_with_require(s, &[&crate::require::HasTag(tag)])
    }

    /// Parses a known-good string, panicking on failure.
    ///
    /// Only for literals and tests; never feed it request input.
    #[must_use]
    pub fn must_parse(s: &str) -> Self {
        match Self::parse(s) {
            Ok(id) => id,
            Err(e) => panic!("RefId::must_parse({s:?}): {e}"),
        }
    }

    /// Parses the 36-digit hex form.
    pub fn from_hex_string(s: &str) -> Result<Self, RefIdError> {
        codec::decode_hex(s).map(|wire| Self::from_wire(&wire))
    }

    /// Parses the unpadded URL-safe base64 form.
    pub fn from_base64_string(s: &str) -> Result<Self, RefIdError> {
        codec::decode_base64(s).map(|wire| Self::from_wire(&wire))
    }

    /// Returns the lowercase hex form.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        codec::encode_hex(&self.to_bytes())
    }

    /// Returns the unpadded URL-safe base64 form.
    #[must_use]
    pub fn to_base64_string(&self) -> String {
        codec::encode_base64(&self.to_bytes())
    }

    /// Returns the tag byte.
    #[must_use]
    pub const fn tag(&self) -> u8 {
        self.tag
    }

    /// Replaces the tag, returning `self` for chaining.
    pub fn set_tag(&mut self, tag: u8) -> &mut Self {
        self.tag = tag;
        self
    }

    /// Resets the tag to zero.
    pub fn clear_tag(&mut self) -> &mut Self {
        self.tag = 0;
        self
    }

    /// Returns true if the RefId carries a nonzero tag.
    #[must_use]
    pub const fn is_tagged(&self) -> bool {
        self.tag != 0
    }

    /// Returns true if the RefId is tagged with exactly `tag`.
    ///
    /// An untagged RefId satisfies no tag, including zero.
    #[must_use]
    pub const fn has_tag(&self, tag: u8) -> bool {
        self.is_tagged() && self.tag == tag
    }

    /// Returns true for [`RefId::NIL`].
    #[must_use]
    pub fn is_nil(&self) -> bool {
        *self == Self::NIL
    }

    /// Returns the embedded UUID.
    #[must_use]
    pub const fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// Milliseconds since the Unix epoch, read from the leading 48 UUID bits.
    #[must_use]
    pub fn timestamp_ms(&self) -> u64 {
        let b = self.uuid.as_bytes();
        u64::from_be_bytes([0, 0, b[0], b[1], b[2], b[3], b[4], b[5]])
    }

    /// The creation time embedded in the UUID.
    #[must_use]
    pub fn time(&self) -> DateTime<Utc> {
        // 48 bits of milliseconds always fit in chrono's range.
        DateTime::from_timestamp_millis(self.timestamp_ms() as i64).unwrap_or_default()
    }
}

impl Default for RefId {
    fn default() -> Self {
        Self::NIL
    }
}

/// `{}` prints the canonical lowercase form, `{:#}` the uppercase form.
impl fmt::Display for RefId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut encoded = codec::encode_native(&self.to_bytes());
        if f.alternate() {
            encoded.make_ascii_uppercase();
        }
        f.pad(&encoded)
    }
}

impl fmt::Debug for RefId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RefId").field(&self.to_bytes()).finish()
    }
}

impl fmt::LowerHex for RefId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_hex_string())
    }
}

impl fmt::UpperHex for RefId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&hex::encode_upper(self.to_bytes()))
    }
}

impl FromStr for RefId {
    type Err = RefIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&[u8]> for RefId {
    type Error = RefIdError;

    fn try_from(buf: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(buf)
    }
}

impl From<RefId> for [u8; SIZE] {
    fn from(id: RefId) -> Self {
        id.to_bytes()
    }
}
