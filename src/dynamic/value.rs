use std::any::{Any, TypeId, type_name};
use std::fmt;

/// A value whose concrete type is only known at runtime.
///
/// Unlike a bare `Box<dyn Any>`, a `Dynamic` remembers the name of the
/// type it was created from, so errors can say what was rejected.
pub struct Dynamic {
    type_name: &'static str,
    value: Box<dyn Any>,
}

impl Dynamic {
    /// Erases the type of `value`.
    #[must_use]
    pub fn new<S: Any>(value: S) -> Self {
        Self {
            type_name: type_name::<S>(),
            value: Box::new(value),
        }
    }

    pub(crate) fn from_parts(type_name: &'static str, value: Box<dyn Any>) -> Self {
        Self { type_name, value }
    }

    pub(crate) fn as_any(&self) -> &dyn Any {
        self.value.as_ref()
    }

    pub(crate) fn into_parts(self) -> (&'static str, Box<dyn Any>) {
        (self.type_name, self.value)
    }

    /// Name of the erased type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Identifier of the erased type.
    #[must_use]
    pub fn value_type_id(&self) -> TypeId {
        self.value.as_ref().type_id()
    }

    /// Returns `true` if the erased type is `S`.
    #[must_use]
    pub fn is<S: Any>(&self) -> bool {
        self.value.is::<S>()
    }

    /// Borrows the value as an `S`, if that is its type.
    #[must_use]
    pub fn downcast_ref<S: Any>(&self) -> Option<&S> {
        self.value.downcast_ref()
    }

    /// Recovers the value as an `S`, or gives it back unchanged.
    ///
    /// # Errors
    ///
    /// Returns `self` when the erased type is not `S`.
    pub fn downcast<S: Any>(self) -> Result<S, Self> {
        match self.value.downcast::<S>() {
            Ok(value) => Ok(*value),
            Err(value) => Err(Self {
                type_name: self.type_name,
                value,
            }),
        }
    }
}

impl fmt::Debug for Dynamic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Dynamic")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}
