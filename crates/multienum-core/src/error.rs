use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error as ThisError;

///
/// MultiEnumError
///
/// Structured resolution/access error for one enumeration type.
/// Every variant carries the model `path` so diagnostics name the type.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum MultiEnumError {
    #[error("multienum '{path}' has no member table")]
    UndefinedEnumeration { path: &'static str },

    #[error("multienum '{path}' expects exactly one value input, got {count}")]
    InvalidArguments { path: &'static str, count: usize },

    #[error("multienum '{path}' inputs resolve to different values ({first} and {second})")]
    ConflictingValues {
        path: &'static str,
        first: usize,
        second: usize,
    },

    #[error("name '{name}' not found in multienum '{path}'")]
    NameNotFound { path: &'static str, name: String },

    #[error("field '{field}' not defined on multienum '{path}'")]
    UnknownField { path: &'static str, field: String },

    #[error("ordinal {ordinal} out of range for multienum '{path}' ({len} members)")]
    OrdinalOutOfRange {
        path: &'static str,
        ordinal: usize,
        len: usize,
    },
}

impl MultiEnumError {
    /// Stable classification for this error.
    ///
    /// Conflicting loose inputs are an argument error; an out-of-range
    /// ordinal is a lookup miss like any unmatched name.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UndefinedEnumeration { .. } => ErrorKind::UndefinedEnumeration,
            Self::InvalidArguments { .. } | Self::ConflictingValues { .. } => {
                ErrorKind::InvalidArguments
            }
            Self::NameNotFound { .. } | Self::OrdinalOutOfRange { .. } => ErrorKind::NameNotFound,
            Self::UnknownField { .. } => ErrorKind::UnknownField,
        }
    }

    /// Model path of the enumeration that raised the error.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::UndefinedEnumeration { path }
            | Self::InvalidArguments { path, .. }
            | Self::ConflictingValues { path, .. }
            | Self::NameNotFound { path, .. }
            | Self::UnknownField { path, .. }
            | Self::OrdinalOutOfRange { path, .. } => path,
        }
    }

    pub(crate) fn name_not_found(path: &'static str, name: impl Into<String>) -> Self {
        Self::NameNotFound {
            path,
            name: name.into(),
        }
    }

    pub(crate) fn unknown_field(path: &'static str, field: impl Into<String>) -> Self {
        Self::UnknownField {
            path,
            field: field.into(),
        }
    }

    #[must_use]
    pub fn display_with_kind(&self) -> String {
        format!("{}: {}", self.kind(), self)
    }
}

///
/// ErrorKind
///
/// Caller-facing error taxonomy. Variants are stable; new failure modes
/// map onto one of these rather than adding a kind.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ErrorKind {
    UndefinedEnumeration,
    InvalidArguments,
    NameNotFound,
    UnknownField,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::UndefinedEnumeration => "undefined_enumeration",
            Self::InvalidArguments => "invalid_arguments",
            Self::NameNotFound => "name_not_found",
            Self::UnknownField => "unknown_field",
        };
        write!(f, "{label}")
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflicting_values_classify_as_invalid_arguments() {
        let err = MultiEnumError::ConflictingValues {
            path: "test::Number",
            first: 2,
            second: 0,
        };

        assert_eq!(err.kind(), ErrorKind::InvalidArguments);
        assert_eq!(err.path(), "test::Number");
    }

    #[test]
    fn out_of_range_ordinal_classifies_as_name_not_found() {
        let err = MultiEnumError::OrdinalOutOfRange {
            path: "test::Number",
            ordinal: 9,
            len: 4,
        };

        assert_eq!(err.kind(), ErrorKind::NameNotFound);
        assert_eq!(
            err.to_string(),
            "ordinal 9 out of range for multienum 'test::Number' (4 members)"
        );
    }

    #[test]
    fn display_with_kind_prefixes_stable_label() {
        let err = MultiEnumError::unknown_field("test::Number", "third");

        assert_eq!(
            err.display_with_kind(),
            "unknown_field: field 'third' not defined on multienum 'test::Number'"
        );
    }
}
