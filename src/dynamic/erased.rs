use std::any::Any;
use std::fmt;
use std::iter::Enumerate;

use super::value::Dynamic;
use crate::error::OpticError;
use crate::optics::{Rebuild, Shape, Traversable};

type Assemble<A> = Box<dyn FnOnce(Vec<A>) -> Box<dyn Any>>;

/// A container taken apart by a [`Registry`](super::Registry): its elements
/// in natural order plus what is needed to put it back together.
///
/// `Erased` is itself [`Traversable`], so [`traverse`](crate::optics::traverse)
/// and every accessor built on it work on it directly. Once done, call
/// [`assemble`](Self::assemble) to get the rebuilt container back.
pub struct Erased<A> {
    type_name: &'static str,
    shape: Shape,
    arity: usize,
    values: Vec<A>,
    assemble: Assemble<A>,
}

impl<A> Erased<A> {
    pub(crate) fn new(
        type_name: &'static str,
        shape: Shape,
        values: Vec<A>,
        assemble: Assemble<A>,
    ) -> Self {
        Self {
            type_name,
            shape,
            arity: values.len(),
            values,
            assemble,
        }
    }

    /// Name of the original container type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Shape of the original container.
    #[must_use]
    pub const fn container_shape(&self) -> Shape {
        self.shape
    }

    /// The elements, in the container's natural order.
    #[must_use]
    pub fn values(&self) -> &[A] {
        &self.values
    }

    /// Swaps in a new list of elements.
    ///
    /// # Errors
    ///
    /// Returns [`OpticError::ShapeMismatch`] if `values` does not have as many
    /// elements as the container was split into.
    pub fn replace_values(mut self, values: Vec<A>) -> Result<Self, OpticError> {
        self.check_arity(values.len())?;
        self.values = values;
        Ok(self)
    }

    /// Rebuilds the original container from the current elements.
    ///
    /// # Errors
    ///
    /// Returns [`OpticError::ShapeMismatch`] if elements were added or removed
    /// since the container was split.
    pub fn assemble(self) -> Result<Dynamic, OpticError> {
        self.check_arity(self.values.len())?;
        tracing::trace!(type_name = self.type_name, elements = self.arity, "assembling container");
        let rebuilt = (self.assemble)(self.values);
        Ok(Dynamic::from_parts(self.type_name, rebuilt))
    }

    fn check_arity(&self, found: usize) -> Result<(), OpticError> {
        if found == self.arity {
            Ok(())
        } else {
            tracing::debug!(
                type_name = self.type_name,
                expected = self.arity,
                found,
                "element count changed since split"
            );
            Err(OpticError::ShapeMismatch {
                type_name: self.type_name,
                expected: self.arity,
                found,
            })
        }
    }
}

impl<A> Traversable for Erased<A> {
    type Key = usize;
    type Item = A;
    type Entries = Enumerate<std::vec::IntoIter<A>>;

    fn shape(&self) -> Shape {
        self.shape
    }
}

/// The reassembly step is fixed to `Vec<A>`, so an erased container can
/// only be rebuilt with elements of its own type.
impl<A> Rebuild<A> for Erased<A> {
    type Output = Self;
    type Builder = Self;

    fn into_parts(mut self) -> (Self, Self::Entries) {
        let values = std::mem::replace(&mut self.values, Vec::with_capacity(self.arity));
        (self, values.into_iter().enumerate())
    }

    fn rebuild(mut builder: Self, _position: usize, item: A) -> Self {
        builder.values.push(item);
        builder
    }

    fn finish(builder: Self) -> Self {
        builder
    }
}

impl<A: fmt::Debug> fmt::Debug for Erased<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Erased")
            .field("type_name", &self.type_name)
            .field("shape", &self.shape)
            .field("values", &self.values)
            .finish_non_exhaustive()
    }
}
