//! Database driver adapter.
//!
//! [`DriverValue`] mirrors the value kinds a SQL driver hands back for a
//! column. RefIds scan from text (the canonical string) or bytes (either the
//! 18-byte wire form or a UTF-8 encoded string) and bind as text.
//!
//! With the `sqlx` feature, [`RefId`] is also a Postgres column type that
//! encodes as TEXT and decodes from TEXT, VARCHAR or BYTEA.

use chrono::{DateTime, Utc};

use crate::error::RefIdError;
use crate::refid::{RefId, SIZE};

/// A column value as produced or accepted by a database driver.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Timestamp(DateTime<Utc>),
}

impl DriverValue {
    /// Short name of the value kind, used in scan errors.
    pub fn kind(&self) -> &'static str {
        match self {
            DriverValue::Null => "null",
            DriverValue::Bool(_) => "bool",
            DriverValue::Int(_) => "int",
            DriverValue::Float(_) => "float",
            DriverValue::Text(_) => "text",
            DriverValue::Bytes(_) => "bytes",
            DriverValue::Timestamp(_) => "timestamp",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, DriverValue::Null)
    }
}

impl From<String> for DriverValue {
    fn from(s: String) -> Self {
        DriverValue::Text(s)
    }
}

impl From<&str> for DriverValue {
    fn from(s: &str) -> Self {
        DriverValue::Text(s.to_string())
    }
}

impl From<Vec<u8>> for DriverValue {
    fn from(b: Vec<u8>) -> Self {
        DriverValue::Bytes(b)
    }
}

impl From<&[u8]> for DriverValue {
    fn from(b: &[u8]) -> Self {
        DriverValue::Bytes(b.to_vec())
    }
}

impl From<i64> for DriverValue {
    fn from(v: i64) -> Self {
        DriverValue::Int(v)
    }
}

impl RefId {
    /// Reads a RefId out of a driver value.
    ///
    /// Null and non text/bytes kinds are rejected with
    /// [`RefIdError::UnsupportedScanType`].
    pub fn scan(src: &DriverValue) -> Result<Self, RefIdError> {
        match src {
            DriverValue::Text(s) => scan_text(s),
            DriverValue::Bytes(b) => scan_bytes(b),
            other => Err(RefIdError::UnsupportedScanType(other.kind())),
        }
    }

    /// Like [`RefId::scan`], but maps SQL NULL to `None`.
    pub fn scan_nullable(src: &DriverValue) -> Result<Option<Self>, RefIdError> {
        if src.is_null() {
            return Ok(None);
        }
        Self::scan(src).map(Some)
    }

    /// The value bound for a text column: the canonical string.
    #[must_use]
    pub fn value(&self) -> DriverValue {
        DriverValue::Text(self.to_string())
    }

    /// The value bound for a binary column: the 18-byte wire form.
    #[must_use]
    pub fn value_bytes(&self) -> DriverValue {
        DriverValue::Bytes(self.to_bytes().to_vec())
    }
}

pub(crate) fn scan_text(s: &str) -> Result<RefId, RefIdError> {
    RefId::parse(s)
}

/// Binary columns carry the wire form; some drivers also deliver text
/// columns as raw UTF-8 bytes.
pub(crate) fn scan_bytes(b: &[u8]) -> Result<RefId, RefIdError> {
    if b.len() == SIZE {
        return RefId::from_bytes(b);
    }
    match std::str::from_utf8(b) {
        Ok(s) => RefId::parse(s),
        Err(_) => Err(RefIdError::InvalidLength {
            expected: SIZE,
            actual: b.len(),
        }),
    }
}

#[cfg(feature = "sqlx")]
mod postgres {
    use sqlx::encode::IsNull;
    use sqlx::error::BoxDynError;
    use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef, Postgres};
    use sqlx::{Decode, Encode, Type};

    use super::{scan_bytes, scan_text};
    use crate::refid::RefId;

    impl Type<Postgres> for RefId {
        fn type_info() -> PgTypeInfo {
            <String as Type<Postgres>>::type_info()
        }

        fn compatible(ty: &PgTypeInfo) -> bool {
            <String as Type<Postgres>>::compatible(ty)
                || <Vec<u8> as Type<Postgres>>::compatible(ty)
        }
    }

    impl Encode<'_, Postgres> for RefId {
        fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
            <String as Encode<'_, Postgres>>::encode(self.to_string(), buf)
        }
    }

    impl<'r> Decode<'r, Postgres> for RefId {
        fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
            decode_value(value)
        }
    }

    pub(crate) fn decode_value(value: PgValueRef<'_>) -> Result<RefId, BoxDynError> {
        use sqlx::ValueRef;

        let is_binary = <Vec<u8> as Type<Postgres>>::compatible(&value.type_info());
        let id = if is_binary {
            scan_bytes(<&[u8] as Decode<'_, Postgres>>::decode(value)?)?
        } else {
            scan_text(<&str as Decode<'_, Postgres>>::decode(value)?)?
        };
        Ok(id)
    }

}

#[cfg(feature = "sqlx")]
pub(crate) use postgres::decode_value;
