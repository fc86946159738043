//! Enumerations whose members answer to several parallel names.
//!
//! ## Crate layout
//! - `core`: runtime models, resolution, values and choice projection.
//! - `error`: the stable public error type.
//!
//! Define a type with [`multi_enum!`], then build values from an ordinal,
//! any of their names, or a name within one labelled field.

pub use multienum_core as core;

pub mod error;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Macros
//

pub use multienum_core::multi_enum;

pub use error::{Error, ErrorKind};

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::{
        choice::{Choice, ChoiceField, ChoiceValue},
        model::MultiEnumModel,
        resolve::ValueSpec,
        traits::MultiEnumKind as _,
        value::MultiEnum,
    };
    pub use crate::multi_enum;
}
