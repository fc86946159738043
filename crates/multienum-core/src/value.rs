use crate::{
    choice::{Choice, ChoiceField, list_choices},
    error::MultiEnumError,
    model::{MemberTable, MultiEnumModel, NameRow},
    resolve::ValueSpec,
    traits::MultiEnumKind,
};
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    iter::FusedIterator,
    marker::PhantomData,
    ops::Range,
    slice,
    str::FromStr,
};

///
/// MultiEnum
///
/// One member of the enumeration described by `K::MODEL`.
///
/// Holds the canonical ordinal and a reference to its row in the static
/// member table, so every name lookup is a slice index. Equality, ordering
/// and hashing use the ordinal alone.
///

pub struct MultiEnum<K> {
    ordinal: usize,
    names: NameRow,
    kind: PhantomData<fn() -> K>,
}

impl<K> MultiEnum<K> {
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self.ordinal
    }

    /// Default (first-column) name; empty for an empty row.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self.names {
            &[name, ..] => name,
            [] => "",
        }
    }

    /// Cached name row, one entry per column.
    #[must_use]
    pub const fn names(self) -> NameRow {
        self.names
    }

    /// Name in column `index`, if the row is that wide.
    #[must_use]
    pub fn column(self, index: usize) -> Option<&'static str> {
        self.names.get(index).copied()
    }
}

impl<K: MultiEnumKind> MultiEnum<K> {
    /// Build the member at a checked ordinal.
    fn at(model: &MultiEnumModel, ordinal: usize) -> Result<Self, MultiEnumError> {
        Ok(Self {
            ordinal,
            names: model.row(ordinal)?,
            kind: PhantomData,
        })
    }

    /// Resolve a single input.
    ///
    /// An `Instance` input is returned unchanged. Any other input is
    /// resolved against the model and the matching row is cached.
    pub fn resolve(spec: ValueSpec<'_, K>) -> Result<Self, MultiEnumError> {
        let model = K::MODEL;

        let result = model.members().and_then(|_| match spec {
            ValueSpec::Instance(value) => Ok(value),
            spec => spec.ordinal().and_then(|ordinal| Self::at(model, ordinal)),
        });

        match &result {
            Ok(value) => tracing::trace!(
                path = model.path,
                ordinal = value.ordinal,
                "resolved multienum value"
            ),
            Err(err) => tracing::debug!(
                path = model.path,
                input = ?spec,
                %err,
                "multienum resolution failed"
            ),
        }

        result
    }

    /// Resolve from exactly one input.
    ///
    /// Zero or several inputs fail with `InvalidArguments`.
    pub fn from_inputs(inputs: &[ValueSpec<'_, K>]) -> Result<Self, MultiEnumError> {
        let model = K::MODEL;
        model.members()?;

        match inputs {
            [spec] => Self::resolve(*spec),
            _ => {
                tracing::debug!(
                    path = model.path,
                    count = inputs.len(),
                    "multienum expects a single input"
                );

                Err(MultiEnumError::InvalidArguments {
                    path: model.path,
                    count: inputs.len(),
                })
            }
        }
    }

    /// Resolve from one or more inputs that must all name the same member.
    ///
    /// Older multi-input contract. Disagreeing inputs fail with
    /// `ConflictingValues`. When an `Instance` input is present it is the
    /// value returned.
    pub fn resolve_all(inputs: &[ValueSpec<'_, K>]) -> Result<Self, MultiEnumError> {
        let model = K::MODEL;
        model.members()?;

        let mut resolved: Option<Self> = None;
        for spec in inputs {
            let value = Self::resolve(*spec)?;

            match resolved {
                Some(current) if current.ordinal != value.ordinal => {
                    tracing::debug!(
                        path = model.path,
                        first = current.ordinal,
                        second = value.ordinal,
                        "multienum inputs disagree"
                    );

                    return Err(MultiEnumError::ConflictingValues {
                        path: model.path,
                        first: current.ordinal,
                        second: value.ordinal,
                    });
                }
                Some(_) if !spec.is_instance() => {}
                _ => resolved = Some(value),
            }
        }

        resolved.ok_or(MultiEnumError::InvalidArguments {
            path: model.path,
            count: 0,
        })
    }

    pub fn from_ordinal(ordinal: usize) -> Result<Self, MultiEnumError> {
        Self::resolve(ValueSpec::Ordinal(ordinal))
    }

    pub fn from_name(name: &str) -> Result<Self, MultiEnumError> {
        Self::resolve(ValueSpec::Name(name))
    }

    /// Resolve `name` within the column labelled `field`.
    pub fn from_field(field: &str, name: &str) -> Result<Self, MultiEnumError> {
        Self::resolve(ValueSpec::Field { field, name })
    }

    // ------------------------------------------------------------------
    // Field access
    // ------------------------------------------------------------------

    /// Name under the field labelled `label`.
    pub fn field(self, label: &str) -> Result<&'static str, MultiEnumError> {
        let model = K::MODEL;
        let index = model.field_index(label)?;

        self.column(index)
            .ok_or_else(|| MultiEnumError::unknown_field(model.path, label))
    }

    /// `(label, name)` pairs in field order.
    ///
    /// Fails with `UnknownField` when the type defines no field labels.
    pub fn fields(self) -> Result<FieldIter, MultiEnumError> {
        let model = K::MODEL;
        let labels = model
            .fields
            .ok_or_else(|| MultiEnumError::unknown_field(model.path, "<fields>"))?;

        Ok(FieldIter {
            inner: labels.iter().zip(self.names.iter()),
        })
    }

    #[must_use]
    pub const fn model() -> &'static MultiEnumModel {
        K::MODEL
    }

    // ------------------------------------------------------------------
    // Type-level views
    // ------------------------------------------------------------------

    /// Every member, in ordinal order.
    pub fn members() -> Result<Members<K>, MultiEnumError> {
        let table = K::MODEL.members()?;

        Ok(Members {
            table,
            range: 0..table.len(),
            kind: PhantomData,
        })
    }

    /// Number of members; zero for an undefined table.
    #[must_use]
    pub const fn len() -> usize {
        K::MODEL.len()
    }

    /// True when the type has no members, defined or not.
    #[must_use]
    pub const fn is_empty() -> bool {
        K::MODEL.is_empty()
    }

    /// Choice projection with the type's configured defaults.
    pub fn choices() -> Result<Vec<Choice>, MultiEnumError> {
        list_choices(K::MODEL, None, None)
    }

    /// Choice projection with explicit selectors and/or range.
    pub fn choices_with(
        fields: Option<(ChoiceField, ChoiceField)>,
        range: Option<Range<usize>>,
    ) -> Result<Vec<Choice>, MultiEnumError> {
        list_choices(K::MODEL, fields, range)
    }
}

impl<K> Clone for MultiEnum<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for MultiEnum<K> {}

impl<K, O> PartialEq<MultiEnum<O>> for MultiEnum<K> {
    fn eq(&self, other: &MultiEnum<O>) -> bool {
        self.ordinal == other.ordinal
    }
}

impl<K> Eq for MultiEnum<K> {}

impl<K, O> PartialOrd<MultiEnum<O>> for MultiEnum<K> {
    fn partial_cmp(&self, other: &MultiEnum<O>) -> Option<Ordering> {
        Some(self.ordinal.cmp(&other.ordinal))
    }
}

impl<K> Ord for MultiEnum<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal.cmp(&other.ordinal)
    }
}

impl<K> Hash for MultiEnum<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordinal.hash(state);
    }
}

impl<K> PartialEq<usize> for MultiEnum<K> {
    fn eq(&self, other: &usize) -> bool {
        self.ordinal == *other
    }
}

impl<K> PartialEq<MultiEnum<K>> for usize {
    fn eq(&self, other: &MultiEnum<K>) -> bool {
        *self == other.ordinal
    }
}

impl<K> PartialOrd<usize> for MultiEnum<K> {
    fn partial_cmp(&self, other: &usize) -> Option<Ordering> {
        Some(self.ordinal.cmp(other))
    }
}

impl<K> fmt::Display for MultiEnum<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<K> fmt::Debug for MultiEnum<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.name())
    }
}

impl<K: MultiEnumKind> FromStr for MultiEnum<K> {
    type Err = MultiEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl<K: MultiEnumKind> TryFrom<usize> for MultiEnum<K> {
    type Error = MultiEnumError;

    fn try_from(ordinal: usize) -> Result<Self, Self::Error> {
        Self::from_ordinal(ordinal)
    }
}

impl<K: MultiEnumKind> TryFrom<&str> for MultiEnum<K> {
    type Error = MultiEnumError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Self::from_name(name)
    }
}

impl<K> From<MultiEnum<K>> for usize {
    fn from(value: MultiEnum<K>) -> Self {
        value.ordinal
    }
}

///
/// FieldIter
/// Restartable `(label, name)` walk over one member's cached row.
///

#[derive(Clone, Debug)]
pub struct FieldIter {
    inner: std::iter::Zip<slice::Iter<'static, &'static str>, slice::Iter<'static, &'static str>>,
}

impl Iterator for FieldIter {
    type Item = (&'static str, &'static str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(label, name)| (*label, *name))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for FieldIter {}

impl FusedIterator for FieldIter {}

///
/// Members
/// Every member of one enumeration, in ordinal order.
///

pub struct Members<K> {
    table: MemberTable,
    range: Range<usize>,
    kind: PhantomData<fn() -> K>,
}

impl<K> Members<K> {
    fn build(&self, ordinal: usize) -> MultiEnum<K> {
        MultiEnum {
            ordinal,
            names: self.table[ordinal],
            kind: PhantomData,
        }
    }
}

impl<K> Clone for Members<K> {
    fn clone(&self) -> Self {
        Self {
            table: self.table,
            range: self.range.clone(),
            kind: PhantomData,
        }
    }
}

impl<K> Iterator for Members<K> {
    type Item = MultiEnum<K>;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(|ordinal| self.build(ordinal))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<K> DoubleEndedIterator for Members<K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.range.next_back().map(|ordinal| self.build(ordinal))
    }
}

impl<K> ExactSizeIterator for Members<K> {}

impl<K> FusedIterator for Members<K> {}

///
/// TESTS
///
