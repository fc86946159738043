//! Serde support for enumeration values.
//!
//! Values are written as their ordinal. Reading accepts either an ordinal
//! or any name the model resolves.

use crate::{traits::MultiEnumKind, value::MultiEnum};
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, Visitor},
};
use std::{fmt, marker::PhantomData};

impl<K> Serialize for MultiEnum<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.ordinal() as u64)
    }
}

impl<'de, K: MultiEnumKind> Deserialize<'de> for MultiEnum<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MultiEnumVisitor(PhantomData))
    }
}

///
/// MultiEnumVisitor
///

struct MultiEnumVisitor<K>(PhantomData<fn() -> K>);

impl<K: MultiEnumKind> Visitor<'_> for MultiEnumVisitor<K> {
    type Value = MultiEnum<K>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "an ordinal or member name of '{}'", K::MODEL.path)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        let ordinal = usize::try_from(v)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))?;

        MultiEnum::from_ordinal(ordinal).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        let ordinal =
            usize::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))?;

        MultiEnum::from_ordinal(ordinal).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        MultiEnum::from_name(v).map_err(E::custom)
    }
}

///
/// TESTS
///
