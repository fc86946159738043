//! Resolution of constructor inputs to a canonical ordinal.
//!
//! Every lookup here is a scan over the model's `'static` tables; nothing
//! is cached or mutated.

use crate::{
    error::MultiEnumError,
    model::MultiEnumModel,
    traits::MultiEnumKind,
    value::MultiEnum,
};
use std::fmt;

///
/// ValueSpec
///
/// One constructor input for an enumeration of kind `K`.
///

pub enum ValueSpec<'a, K: MultiEnumKind> {
    /// An existing value; passed through unchanged.
    Instance(MultiEnum<K>),

    /// A raw ordinal.
    Ordinal(usize),

    /// A name looked up across every row and column.
    Name(&'a str),

    /// A name looked up in one labelled column only.
    Field { field: &'a str, name: &'a str },
}

impl<K: MultiEnumKind> ValueSpec<'_, K> {
    /// Resolve to an ordinal without building a value.
    pub fn ordinal(&self) -> Result<usize, MultiEnumError> {
        let model = K::MODEL;

        match *self {
            Self::Instance(value) => Ok(value.ordinal()),
            Self::Ordinal(ordinal) => resolve_ordinal(model, ordinal),
            Self::Name(name) => resolve_name(model, name),
            Self::Field { field, name } => resolve_field(model, field, name),
        }
    }

    pub(crate) const fn is_instance(&self) -> bool {
        matches!(self, Self::Instance(_))
    }
}

impl<K: MultiEnumKind> Clone for ValueSpec<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: MultiEnumKind> Copy for ValueSpec<'_, K> {}

impl<K: MultiEnumKind> fmt::Debug for ValueSpec<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instance(value) => f.debug_tuple("Instance").field(value).finish(),
            Self::Ordinal(ordinal) => f.debug_tuple("Ordinal").field(ordinal).finish(),
            Self::Name(name) => f.debug_tuple("Name").field(name).finish(),
            Self::Field { field, name } => f
                .debug_struct("Field")
                .field("field", field)
                .field("name", name)
                .finish(),
        }
    }
}

impl<K: MultiEnumKind> From<MultiEnum<K>> for ValueSpec<'_, K> {
    fn from(value: MultiEnum<K>) -> Self {
        Self::Instance(value)
    }
}

impl<K: MultiEnumKind> From<usize> for ValueSpec<'_, K> {
    fn from(ordinal: usize) -> Self {
        Self::Ordinal(ordinal)
    }
}

impl<'a, K: MultiEnumKind> From<&'a str> for ValueSpec<'a, K> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl<'a, K: MultiEnumKind> From<(&'a str, &'a str)> for ValueSpec<'a, K> {
    fn from((field, name): (&'a str, &'a str)) -> Self {
        Self::Field { field, name }
    }
}

/// Check a raw ordinal against the member table.
pub fn resolve_ordinal(model: &MultiEnumModel, ordinal: usize) -> Result<usize, MultiEnumError> {
    model.row(ordinal).map(|_| ordinal)
}

/// First row, in ordinal order, holding `name` in any column.
pub fn resolve_name(model: &MultiEnumModel, name: &str) -> Result<usize, MultiEnumError> {
    let members = model.members()?;

    members
        .iter()
        .position(|row| row.iter().any(|stored| model.name_matches(stored, name)))
        .ok_or_else(|| MultiEnumError::name_not_found(model.path, name))
}

/// First row whose `field` column is exactly `name`.
pub fn resolve_field(
    model: &MultiEnumModel,
    field: &str,
    name: &str,
) -> Result<usize, MultiEnumError> {
    let members = model.members()?;
    let index = model.field_index(field)?;

    members
        .iter()
        .position(|row| row.get(index).is_some_and(|stored| *stored == name))
        .ok_or_else(|| MultiEnumError::name_not_found(model.path, name))
}

///
/// TESTS
///
