//! The endomorphism monoid.
//!
//! [`Endo`] wraps functions `A -> A` and combines them by composition. It is
//! the monoid behind right folds through optics: each focus becomes one step
//! of a composed function, which is then applied to the initial value.
//!
//! Composition is stored as a flat list of steps rather than nested
//! closures, so applying an `Endo` built from a million foci does not grow
//! the call stack.

use std::fmt;

use super::monoid::Monoid;
use super::semigroup::Semigroup;

/// A function from `A` to `A`, combined by composition.
///
/// `Endo::new(f).combine(Endo::new(g))` behaves like `x -> f(g(x))`.
///
/// # Examples
///
/// ```rust
/// use optika::typeclass::{Endo, Monoid, Semigroup};
///
/// let add_one = Endo::new(|x: i32| x + 1);
/// let double = Endo::new(|x: i32| x * 2);
///
/// // add_one after double
/// assert_eq!(add_one.combine(double).apply(5), 11);
/// assert_eq!(Endo::<i32>::empty().apply(5), 5);
/// ```
pub struct Endo<'a, A> {
    steps: Vec<Box<dyn FnOnce(A) -> A + 'a>>,
}

impl<'a, A> Endo<'a, A> {
    /// Wraps a single function.
    pub fn new<F>(function: F) -> Self
    where
        F: FnOnce(A) -> A + 'a,
    {
        Self {
            steps: vec![Box::new(function)],
        }
    }

    /// The identity function.
    pub const fn identity() -> Self {
        Self { steps: Vec::new() }
    }

    /// Applies the composed function to `value`.
    ///
    /// The rightmost function runs first.
    pub fn apply(self, value: A) -> A {
        self.steps
            .into_iter()
            .rev()
            .fold(value, |accumulator, step| step(accumulator))
    }

    /// Returns the number of functions composed into this `Endo`.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if this `Endo` is the identity.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<A> Semigroup for Endo<'_, A> {
    fn combine(mut self, mut other: Self) -> Self {
        self.steps.append(&mut other.steps);
        self
    }
}

impl<A> Monoid for Endo<'_, A> {
    fn empty() -> Self {
        Self::identity()
    }
}

impl<A> Default for Endo<'_, A> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<A> fmt::Debug for Endo<'_, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Endo")
            .field("steps", &self.steps.len())
            .finish()
    }
}
