//! Functor and Contravariant type classes, expressed on brands.
//!
//! A [`Functor`] brand can map a function over the element of its applied
//! type. A [`Contravariant`] brand can additionally map *backwards*: it can
//! turn an `Applied<A>` into an `Applied<B>` given a function `B -> A`. A
//! brand that is both carries no element at all, only a phantom, which is
//! exactly what read-only optics need.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! brand.fmap(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! brand.fmap(brand.fmap(fa, f), g) == brand.fmap(fa, |x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optika::typeclass::{Functor, OptionBrand};
//!
//! let transformed = OptionBrand.fmap(Some(5), |n: i32| n.to_string());
//! assert_eq!(transformed, Some("5".to_string()));
//!
//! let missing = OptionBrand.fmap(None, |n: i32| n.to_string());
//! assert_eq!(missing, None);
//! ```

use super::higher::{OptionBrand, ResultBrand, TypeConstructor};

/// A brand whose applied type can have a function mapped over its contents.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the element inside `value`.
    ///
    /// # Arguments
    ///
    /// * `value` - The container to map over
    /// * `function` - The transformation, called at most once
    fn fmap<A, B, F>(&self, value: Self::Applied<A>, function: F) -> Self::Applied<B>
    where
        F: FnOnce(A) -> B;

    /// Replaces the element with `replacement`, keeping the structure.
    #[inline]
    fn replace<A, B>(&self, value: Self::Applied<A>, replacement: B) -> Self::Applied<B> {
        self.fmap(value, move |_| replacement)
    }
}

/// A functor that can also be mapped contravariantly.
///
/// Only brands that hold no element of their parameter type can implement
/// this lawfully; for them both `fmap` and `contramap` merely change the
/// phantom type.
///
/// # Laws
///
/// ```text
/// brand.contramap(fa, |x| x) == fa
/// ```
pub trait Contravariant: Functor {
    /// Changes the phantom parameter using a function pointing the other way.
    fn contramap<A, B, F>(&self, value: Self::Applied<A>, function: F) -> Self::Applied<B>
    where
        F: FnOnce(B) -> A;

    /// Forgets the element type entirely.
    ///
    /// A value of `Applied<A>` is re-tagged as `Applied<B>` by first mapping
    /// the element away and then contramapping from `B`.
    #[inline]
    fn phantom<A, B>(&self, value: Self::Applied<A>) -> Self::Applied<B> {
        self.contramap(self.fmap(value, |_| ()), |_| ())
    }
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl Functor for OptionBrand {
    #[inline]
    fn fmap<A, B, F>(&self, value: Option<A>, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        value.map(function)
    }
}

impl<E> Functor for ResultBrand<E> {
    #[inline]
    fn fmap<A, B, F>(&self, value: Result<A, E>, function: F) -> Result<B, E>
    where
        F: FnOnce(A) -> B,
    {
        value.map(function)
    }
}
