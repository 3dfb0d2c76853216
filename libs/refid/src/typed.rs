//! Entity-typed RefIds.
//!
//! Every entity kind gets a zero-sized marker implementing [`RefTag`]. The
//! marker pins the tag of a [`TypedRefId`], so a `TypedRefId<UserTag>` can
//! never be passed where a `TypedRefId<EventTag>` is expected, and every
//! decode path (text, bytes, JSON, database) rejects a structurally valid
//! RefId that carries another entity's tag.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::RefIdError;
use crate::refid::RefId;
use crate::require::{check_all, HasTag, Requirement};
use crate::sql::DriverValue;

/// Marker for one entity kind.
pub trait RefTag: 'static {
    /// The reserved, nonzero tag for this entity.
    const TAG: u8;

    /// Entity name, used in diagnostics.
    const NAME: &'static str;
}

/// A RefId statically bound to the entity `T`.
///
/// The tag is fixed to `T::TAG` at construction and cannot be changed.
/// Read-only accessors of [`RefId`] are available through `Deref`.
pub struct TypedRefId<T: RefTag> {
    inner: RefId,
    _tag: PhantomData<fn() -> T>,
}

impl<T: RefTag> TypedRefId<T> {
    /// The tag every value of this type carries.
    pub const TAG: u8 = T::TAG;

    const fn wrap(inner: RefId) -> Self {
        Self {
            inner,
            _tag: PhantomData,
        }
    }

    /// Creates a fresh id tagged for `T`.
    #[must_use]
    pub fn new() -> Self {
        Self::wrap(RefId::new_tagged(T::TAG))
    }

    /// Parses the canonical string, requiring `T`'s tag.
    pub fn parse(s: &str) -> Result<Self, RefIdError> {
        Self::parse_with_require(s, &[])
    }

    /// Parses the canonical string, requiring `T`'s tag and then each of
    /// `extra` in order.
    pub fn parse_with_require(s: &str, extra: &[&dyn Requirement]) -> Result<Self, RefIdError> {
        Self::checked(RefId::parse(s)?, extra)
    }

    /// Decodes the 18-byte wire form, requiring `T`'s tag.
    pub fn from_bytes(buf: &[u8]) -> Result<Self, RefIdError> {
        Self::checked(RefId::from_bytes(buf)?, &[])
    }

    /// Converts an untyped id, requiring `T`'s tag.
    pub fn from_refid(id: RefId) -> Result<Self, RefIdError> {
        Self::checked(id, &[])
    }

    /// Parses a known-good string, panicking on failure.
    ///
    /// Only for literals and tests; never feed it request input.
    #[must_use]
    pub fn must_parse(s: &str) -> Self {
        match Self::parse(s) {
            Ok(id) => id,
            Err(e) => panic!("{}RefId::must_parse({s:?}): {e}", T::NAME),
        }
    }

    /// Reads the id out of a driver value, requiring `T`'s tag.
    pub fn scan(src: &DriverValue) -> Result<Self, RefIdError> {
        Self::checked(RefId::scan(src)?, &[])
    }

    /// The value bound for a text column.
    #[must_use]
    pub fn value(&self) -> DriverValue {
        self.inner.value()
    }

    /// Returns the untyped id.
    #[must_use]
    pub const fn refid(&self) -> RefId {
        self.inner
    }

    fn checked(id: RefId, extra: &[&dyn Requirement]) -> Result<Self, RefIdError> {
        HasTag(T::TAG).check(&id)?;
        check_all(&id, extra)?;
        Ok(Self::wrap(id))
    }
}

impl<T: RefTag> Default for TypedRefId<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RefTag> Clone for TypedRefId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: RefTag> Copy for TypedRefId<T> {}

impl<T: RefTag> PartialEq for TypedRefId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: RefTag> Eq for TypedRefId<T> {}

impl<T: RefTag> PartialOrd for TypedRefId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: RefTag> Ord for TypedRefId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}

impl<T: RefTag> Hash for TypedRefId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl<T: RefTag> Deref for TypedRefId<T> {
    type Target = RefId;

    fn deref(&self) -> &RefId {
        &self.inner
    }
}

impl<T: RefTag> AsRef<RefId> for TypedRefId<T> {
    fn as_ref(&self) -> &RefId {
        &self.inner
    }
}

impl<T: RefTag> fmt::Display for TypedRefId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

/// Names the entity and shows the raw wire bytes, like [`RefId`]'s `Debug`.
impl<T: RefTag> fmt::Debug for TypedRefId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}RefId({:?})", T::NAME, self.inner.to_bytes())
    }
}

impl<T: RefTag> fmt::LowerHex for TypedRefId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.inner, f)
    }
}

impl<T: RefTag> fmt::UpperHex for TypedRefId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.inner, f)
    }
}

impl<T: RefTag> FromStr for TypedRefId<T> {
    type Err = RefIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<T: RefTag> TryFrom<RefId> for TypedRefId<T> {
    type Error = RefIdError;

    fn try_from(id: RefId) -> Result<Self, Self::Error> {
        Self::from_refid(id)
    }
}

impl<T: RefTag> From<TypedRefId<T>> for RefId {
    fn from(id: TypedRefId<T>) -> Self {
        id.inner
    }
}

impl<T: RefTag> Serialize for TypedRefId<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.inner.serialize(serializer)
    }
}

impl<'de, T: RefTag> Deserialize<'de> for TypedRefId<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = RefId::deserialize(deserializer)?;
        Self::from_refid(id).map_err(serde::de::Error::custom)
    }
}

/// An optional [`TypedRefId`], for nullable columns and optional fields.
///
/// Absence is not an error; a present value with the wrong tag is.
pub struct NullTypedRefId<T: RefTag>(Option<TypedRefId<T>>);

impl<T: RefTag> NullTypedRefId<T> {
    /// The absent value.
    #[must_use]
    pub const fn none() -> Self {
        Self(None)
    }

    #[must_use]
    pub const fn some(id: TypedRefId<T>) -> Self {
        Self(Some(id))
    }

    /// Returns the id, if present.
    #[must_use]
    pub const fn get(&self) -> Option<TypedRefId<T>> {
        self.0
    }

    #[must_use]
    pub const fn is_some(&self) -> bool {
        self.0.is_some()
    }

    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// Parses an optional string; empty input is absent.
    pub fn parse(s: &str) -> Result<Self, RefIdError> {
        if s.is_empty() {
            return Ok(Self::none());
        }
        TypedRefId::parse(s).map(Self::some)
    }

    /// Reads from a driver value; SQL NULL is absent.
    pub fn scan(src: &DriverValue) -> Result<Self, RefIdError> {
        if src.is_null() {
            return Ok(Self::none());
        }
        TypedRefId::scan(src).map(Self::some)
    }

    /// The value bound for a nullable text column.
    #[must_use]
    pub fn value(&self) -> DriverValue {
        match &self.0 {
            Some(id) => id.value(),
            None => DriverValue::Null,
        }
    }
}

impl<T: RefTag> Default for NullTypedRefId<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T: RefTag> Clone for NullTypedRefId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: RefTag> Copy for NullTypedRefId<T> {}

impl<T: RefTag> PartialEq for NullTypedRefId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: RefTag> Eq for NullTypedRefId<T> {}

impl<T: RefTag> Hash for NullTypedRefId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T: RefTag> fmt::Debug for NullTypedRefId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(id) => write!(f, "Null{id:?}"),
            None => write!(f, "Null{}RefId(None)", T::NAME),
        }
    }
}

impl<T: RefTag> From<TypedRefId<T>> for NullTypedRefId<T> {
    fn from(id: TypedRefId<T>) -> Self {
        Self::some(id)
    }
}

impl<T: RefTag> From<Option<TypedRefId<T>>> for NullTypedRefId<T> {
    fn from(id: Option<TypedRefId<T>>) -> Self {
        Self(id)
    }
}

impl<T: RefTag> From<NullTypedRefId<T>> for Option<TypedRefId<T>> {
    fn from(id: NullTypedRefId<T>) -> Self {
        id.0
    }
}

impl<T: RefTag> Serialize for NullTypedRefId<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de, T: RefTag> Deserialize<'de> for NullTypedRefId<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<TypedRefId<T>>::deserialize(deserializer).map(Self)
    }
}

#[cfg(feature = "sqlx")]
mod postgres {
    use sqlx::encode::IsNull;
    use sqlx::error::BoxDynError;
    use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef, Postgres};
    use sqlx::{Decode, Encode, Type, ValueRef};

    use super::{NullTypedRefId, RefTag, TypedRefId};
    use crate::refid::RefId;
    use crate::sql::decode_value;

    impl<T: RefTag> Type<Postgres> for TypedRefId<T> {
        fn type_info() -> PgTypeInfo {
            <RefId as Type<Postgres>>::type_info()
        }

        fn compatible(ty: &PgTypeInfo) -> bool {
            <RefId as Type<Postgres>>::compatible(ty)
        }
    }

    impl<T: RefTag> Encode<'_, Postgres> for TypedRefId<T> {
        fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
            <RefId as Encode<'_, Postgres>>::encode_by_ref(&self.refid(), buf)
        }
    }

    impl<'r, T: RefTag> Decode<'r, Postgres> for TypedRefId<T> {
        fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
            Ok(TypedRefId::from_refid(decode_value(value)?)?)
        }
    }

    impl<T: RefTag> Type<Postgres> for NullTypedRefId<T> {
        fn type_info() -> PgTypeInfo {
            <RefId as Type<Postgres>>::type_info()
        }

        fn compatible(ty: &PgTypeInfo) -> bool {
            <RefId as Type<Postgres>>::compatible(ty)
        }
    }

    impl<T: RefTag> Encode<'_, Postgres> for NullTypedRefId<T> {
        fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
            match self.get() {
                Some(id) => <TypedRefId<T> as Encode<'_, Postgres>>::encode_by_ref(&id, buf),
                None => Ok(IsNull::Yes),
            }
        }
    }

    impl<'r, T: RefTag> Decode<'r, Postgres> for NullTypedRefId<T> {
        fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
            if value.is_null() {
                return Ok(NullTypedRefId::none());
            }
            <TypedRefId<T> as Decode<'r, Postgres>>::decode(value).map(NullTypedRefId::some)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        struct Widget;

        impl RefTag for Widget {
            const TAG: u8 = 42;
            const NAME: &'static str = "Widget";
        }

        #[test]
        fn test_typed_column_type_matches_untyped() {
            let untyped = <RefId as Type<Postgres>>::type_info();
            assert_eq!(<TypedRefId<Widget> as Type<Postgres>>::type_info(), untyped);
            assert_eq!(<NullTypedRefId<Widget> as Type<Postgres>>::type_info(), untyped);

            for name in ["text", "varchar", "bytea"] {
                let ty = PgTypeInfo::with_name(name);
                assert!(<TypedRefId<Widget> as Type<Postgres>>::compatible(&ty), "{name}");
                assert!(<NullTypedRefId<Widget> as Type<Postgres>>::compatible(&ty), "{name}");
            }
            let int8 = PgTypeInfo::with_name("int8");
            assert!(!<TypedRefId<Widget> as Type<Postgres>>::compatible(&int8));
        }

        #[test]
        fn test_encode() {
            let id = TypedRefId::<Widget>::new();
            let mut buf = PgArgumentBuffer::default();
            let is_null =
                <TypedRefId<Widget> as Encode<'_, Postgres>>::encode_by_ref(&id, &mut buf).unwrap();
            assert!(matches!(is_null, IsNull::No));
            assert_eq!(buf.as_slice(), id.to_string().as_bytes());

            let mut buf = PgArgumentBuffer::default();
            let absent = NullTypedRefId::<Widget>::none();
            let is_null =
                <NullTypedRefId<Widget> as Encode<'_, Postgres>>::encode_by_ref(&absent, &mut buf)
                    .unwrap();
            assert!(matches!(is_null, IsNull::Yes));
            assert!(buf.is_empty());
        }
    }
}
