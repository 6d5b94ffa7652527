//! Apply, Applicative and Settable type classes, expressed on brands.
//!
//! [`Apply`] combines two independent effects, [`Applicative`] adds the
//! ability to lift a plain value, and [`Settable`] marks the applicatives
//! whose effect is trivial enough to be stripped off again.
//!
//! Traversals run under any `Applicative` brand; setters only under
//! `Settable` ones.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! brand.apply(brand.pure(|x| x), v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! brand.apply(brand.pure(f), brand.pure(x)) == brand.pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optika::typeclass::{Applicative, Apply, OptionBrand};
//!
//! assert_eq!(OptionBrand.pure(42), Some(42));
//! assert_eq!(OptionBrand.map2(Some(1), Some(2), |x, y| x + y), Some(3));
//! assert_eq!(OptionBrand.map2(Some(1), None::<i32>, |x, y| x + y), None);
//! ```

use super::functor::Functor;
use super::higher::{OptionBrand, ResultBrand};

/// A functor that can combine two independent values with a binary function.
pub trait Apply: Functor {
    /// Combines `first` and `second` with `function`.
    ///
    /// Effects are combined left to right: `first` before `second`.
    fn map2<A, B, C, F>(
        &self,
        first: Self::Applied<A>,
        second: Self::Applied<B>,
        function: F,
    ) -> Self::Applied<C>
    where
        F: FnOnce(A, B) -> C;

    /// Applies a wrapped function to a wrapped value.
    #[inline]
    fn apply<A, B, F>(&self, function: Self::Applied<F>, value: Self::Applied<A>) -> Self::Applied<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map2(function, value, |function, value| function(value))
    }
}

/// An [`Apply`] that can lift a plain value.
pub trait Applicative: Apply {
    /// Lifts `value` into the applied type with no effect.
    fn pure<A>(&self, value: A) -> Self::Applied<A>;
}

/// An applicative whose effect can be discarded to recover the value.
///
/// Only the identity applicative qualifies. Optics restricted to `Settable`
/// brands can modify their foci but never observe them.
pub trait Settable: Applicative {
    /// Unwraps a value produced under this brand.
    fn untainted<A>(&self, value: Self::Applied<A>) -> A;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl Apply for OptionBrand {
    #[inline]
    fn map2<A, B, C, F>(&self, first: Option<A>, second: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        first.zip(second).map(|(first, second)| function(first, second))
    }
}

impl Applicative for OptionBrand {
    #[inline]
    fn pure<A>(&self, value: A) -> Option<A> {
        Some(value)
    }
}

impl<E> Apply for ResultBrand<E> {
    #[inline]
    fn map2<A, B, C, F>(&self, first: Result<A, E>, second: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(A, B) -> C,
    {
        match (first, second) {
            (Ok(first), Ok(second)) => Ok(function(first, second)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }
}

impl<E> Applicative for ResultBrand<E> {
    #[inline]
    fn pure<A>(&self, value: A) -> Result<A, E> {
        Ok(value)
    }
}
