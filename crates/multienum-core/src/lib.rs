//! Core runtime for multienum: static enumeration models, input
//! resolution, the `MultiEnum` value type and choice-list projection.
#![warn(unreachable_pub)]

#[macro_use]
mod macros;

// public exports are one module level down
pub mod choice;
pub mod error;
pub mod model;
pub mod resolve;
pub mod serialize;
pub mod traits;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// Errors and resolution helpers stay at their module paths.
///

pub mod prelude {
    pub use crate::{
        choice::{ChoiceField, ChoiceValue},
        model::MultiEnumModel,
        resolve::ValueSpec,
        traits::MultiEnumKind,
        value::MultiEnum,
    };
}
