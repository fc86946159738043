use multienum_core::error::MultiEnumError;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

pub use multienum_core::error::ErrorKind;

///
/// Error
/// Public error type with a stable kind taxonomy.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub path: String,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::NameNotFound)
    }
}

impl From<MultiEnumError> for Error {
    fn from(err: MultiEnumError) -> Self {
        Self::new(err.kind(), err.path(), err.to_string())
    }
}
