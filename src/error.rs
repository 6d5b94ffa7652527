//! Errors raised while traversing containers whose shape is only known at
//! runtime.

use thiserror::Error;

/// Failure modes of runtime traversal dispatch.
///
/// Statically typed optics never fail: a missing focus simply yields no
/// value. These errors only surface when a container is handed to the
/// [`Registry`](crate::dynamic::Registry) as a type-erased value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpticError {
    /// The container type has no traversal registered for it.
    #[error("unsupported traversable type `{type_name}`: no traversal is registered for it")]
    UnsupportedTraversable {
        /// Name of the rejected type, as reported by `std::any::type_name`.
        type_name: &'static str,
    },

    /// A container was asked to rebuild itself from the wrong number of
    /// elements.
    #[error("cannot rebuild `{type_name}`: expected {expected} elements, found {found}")]
    ShapeMismatch {
        /// Name of the container being rebuilt.
        type_name: &'static str,
        /// Number of elements the container was split into.
        expected: usize,
        /// Number of elements supplied for reassembly.
        found: usize,
    },
}

impl OpticError {
    /// Returns the name of the container type involved in the failure.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::UnsupportedTraversable { type_name } | Self::ShapeMismatch { type_name, .. } => {
                type_name
            }
        }
    }
}
