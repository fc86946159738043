use crate::model::MultiEnumModel;

///
/// MultiEnumKind
///
/// Binds a marker type to its static enumeration model.
///
/// Implemented by `multi_enum!`; hand-written impls are fine as long as
/// `MODEL` is a `'static` constant.
///

pub trait MultiEnumKind: 'static {
    const MODEL: &'static MultiEnumModel;

    /// Model path, for diagnostics.
    #[must_use]
    fn path() -> &'static str {
        Self::MODEL.path
    }
}
