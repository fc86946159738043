//! Static enumeration models.
//!
//! A model is the whole definition of one enumeration type: its member
//! table, optional field labels, matching flags and choice-list defaults.
//! Models are `'static` and never mutated after definition.

use crate::{choice::ChoiceField, error::MultiEnumError};
use serde::Serialize;
use std::ops::{Not, Range};

/// Accepted names for one ordinal, one per field.
pub type NameRow = &'static [&'static str];

/// Every row of an enumeration; row index is the ordinal.
pub type MemberTable = &'static [NameRow];

///
/// MultiEnumModel
/// Runtime definition of one enumeration type.
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct MultiEnumModel {
    /// Fully-qualified type path (for diagnostics).
    pub path: &'static str,

    /// Member table; `None` means the type was never given members.
    pub members: Option<MemberTable>,

    /// Column labels, in row order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<&'static [&'static str]>,

    #[serde(skip_serializing_if = "Not::not")]
    pub case_insensitive: bool,

    /// Default selector pair for choice projection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choice_fields: Option<(ChoiceField, ChoiceField)>,

    /// Default `[start, end)` row range for choice projection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choice_range: Option<(usize, usize)>,
}

impl MultiEnumModel {
    /// Model with no members, fields or choice configuration.
    #[must_use]
    pub const fn new(path: &'static str) -> Self {
        Self {
            path,
            members: None,
            fields: None,
            case_insensitive: false,
            choice_fields: None,
            choice_range: None,
        }
    }

    #[must_use]
    pub const fn with_members(self, members: MemberTable) -> Self {
        Self {
            members: Some(members),
            ..self
        }
    }

    #[must_use]
    pub const fn with_fields(self, fields: &'static [&'static str]) -> Self {
        Self {
            fields: Some(fields),
            ..self
        }
    }

    /// Match names with Unicode lowercase folding when `enabled`.
    #[must_use]
    pub const fn with_case_insensitive(self, enabled: bool) -> Self {
        Self {
            case_insensitive: enabled,
            ..self
        }
    }

    #[must_use]
    pub const fn with_choice_fields(self, first: ChoiceField, second: ChoiceField) -> Self {
        Self {
            choice_fields: Some((first, second)),
            ..self
        }
    }

    #[must_use]
    pub const fn with_choice_range(self, start: usize, end: usize) -> Self {
        Self {
            choice_range: Some((start, end)),
            ..self
        }
    }

    /// Member table, or `UndefinedEnumeration` if the type has none.
    pub const fn members(&self) -> Result<MemberTable, MultiEnumError> {
        match self.members {
            Some(members) => Ok(members),
            None => Err(MultiEnumError::UndefinedEnumeration { path: self.path }),
        }
    }

    /// Number of members; an undefined table counts as empty.
    #[must_use]
    pub const fn len(&self) -> usize {
        match self.members {
            Some(members) => members.len(),
            None => 0,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Name row stored at `ordinal`.
    pub fn row(&self, ordinal: usize) -> Result<NameRow, MultiEnumError> {
        let members = self.members()?;

        members
            .get(ordinal)
            .copied()
            .ok_or(MultiEnumError::OrdinalOutOfRange {
                path: self.path,
                ordinal,
                len: members.len(),
            })
    }

    /// Column index of a field label.
    ///
    /// A type without a field list has no labelled columns at all.
    pub fn field_index(&self, label: &str) -> Result<usize, MultiEnumError> {
        self.fields
            .and_then(|fields| fields.iter().position(|field| *field == label))
            .ok_or_else(|| MultiEnumError::unknown_field(self.path, label))
    }

    /// Compare a stored name against a candidate, honouring the
    /// type's case sensitivity.
    #[must_use]
    pub fn name_matches(&self, stored: &str, candidate: &str) -> bool {
        if self.case_insensitive {
            stored
                .chars()
                .flat_map(char::to_lowercase)
                .eq(candidate.chars().flat_map(char::to_lowercase))
        } else {
            stored == candidate
        }
    }

    /// Selector pair used when a choice projection names none.
    ///
    /// Falls back per position: the configured pair, then the field label
    /// at that position, then the bare column.
    #[must_use]
    pub fn default_choice_fields(&self) -> (ChoiceField, ChoiceField) {
        if let Some(pair) = self.choice_fields {
            return pair;
        }

        let at = |position: usize| {
            self.fields
                .and_then(|fields| fields.get(position).copied())
                .map_or(ChoiceField::Column(position), ChoiceField::Field)
        };

        (at(0), at(1))
    }

    /// Row range used when a choice projection names none.
    #[must_use]
    pub fn default_choice_range(&self) -> Range<usize> {
        self.choice_range
            .map_or(0..self.len(), |(start, end)| start..end)
    }
}

///
/// TESTS
///
