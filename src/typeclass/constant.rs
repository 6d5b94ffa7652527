//! Constant functors: carriers that ignore their element type.
//!
//! [`Const<R, A>`] holds an `R` and only pretends to hold an `A`. Mapping
//! over it never runs the function, which is what makes running an optic
//! under [`ConstBrand`] a read: the handler stores the focus in the `R` slot
//! and the reconstruction step becomes a no-op.
//!
//! [`ApplyConst<M, A>`] is the same idea for multi-focus reads. Its payload
//! is a [`Monoid`], so two carriers can be combined, and that is all a
//! traversal needs to summarise every focus into one value.

use std::fmt;
use std::marker::PhantomData;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::applicative::{Applicative, Apply};
use super::functor::{Contravariant, Functor};
use super::higher::TypeConstructor;
use super::monoid::Monoid;
use super::semigroup::Semigroup;

// =============================================================================
// Const
// =============================================================================

/// A value of type `R` tagged with a phantom type `A`.
///
/// # Examples
///
/// ```rust
/// use optika::typeclass::{Const, ConstBrand, Functor};
///
/// let tagged: Const<&str, i32> = Const::new("kept");
/// let mapped: Const<&str, String> = ConstBrand::new().fmap(tagged, |n: i32| n.to_string());
/// assert_eq!(mapped.into_inner(), "kept");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Const<R, A> {
    value: R,
    _phantom: PhantomData<fn() -> A>,
}

impl<R, A> Const<R, A> {
    /// Wraps `value`.
    #[inline]
    pub const fn new(value: R) -> Self {
        Self {
            value,
            _phantom: PhantomData,
        }
    }

    /// Consumes the carrier and returns the stored value.
    #[inline]
    pub fn into_inner(self) -> R {
        self.value
    }

    /// Returns a reference to the stored value.
    #[inline]
    pub const fn as_inner(&self) -> &R {
        &self.value
    }

    /// Changes the phantom type.
    #[inline]
    pub fn retag<B>(self) -> Const<R, B> {
        Const::new(self.value)
    }
}

impl<R: Clone, A> Clone for Const<R, A> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<R: Copy, A> Copy for Const<R, A> {}

impl<R: PartialEq, A> PartialEq for Const<R, A> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<R: Eq, A> Eq for Const<R, A> {}

impl<R: fmt::Debug, A> fmt::Debug for Const<R, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Const").field(&self.value).finish()
    }
}

/// Brand for [`Const<R, _>`].
///
/// A functor and a contravariant functor, but deliberately not an
/// applicative: there is no way to combine two `R`s or conjure one from
/// nothing. Optics that may see zero or several foci therefore cannot run
/// under it, which is how `get` rejects traversals at compile time.
pub struct ConstBrand<R>(PhantomData<fn() -> R>);

impl<R> ConstBrand<R> {
    /// Creates the brand.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<R> Default for ConstBrand<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for ConstBrand<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for ConstBrand<R> {}

impl<R> fmt::Debug for ConstBrand<R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("ConstBrand")
    }
}

impl<R> TypeConstructor for ConstBrand<R> {
    type Applied<A> = Const<R, A>;
}

impl<R> Functor for ConstBrand<R> {
    #[inline]
    fn fmap<A, B, F>(&self, value: Const<R, A>, _function: F) -> Const<R, B>
    where
        F: FnOnce(A) -> B,
    {
        value.retag()
    }
}

impl<R> Contravariant for ConstBrand<R> {
    #[inline]
    fn contramap<A, B, F>(&self, value: Const<R, A>, _function: F) -> Const<R, B>
    where
        F: FnOnce(B) -> A,
    {
        value.retag()
    }
}

// =============================================================================
// ApplyConst
// =============================================================================

/// A monoidal value of type `M` tagged with a phantom type `A`.
///
/// # Examples
///
/// ```rust
/// use optika::typeclass::{ApplyConst, ApplyConstBrand, Apply, Sum};
///
/// let brand = ApplyConstBrand::<Sum<i32>>::new();
/// let left: ApplyConst<Sum<i32>, ()> = ApplyConst::new(Sum::new(2));
/// let right: ApplyConst<Sum<i32>, ()> = ApplyConst::new(Sum::new(3));
/// let combined = brand.map2(left, right, |(), ()| ());
/// assert_eq!(combined.into_inner(), Sum::new(5));
/// ```
pub struct ApplyConst<M, A> {
    value: M,
    _phantom: PhantomData<fn() -> A>,
}

impl<M, A> ApplyConst<M, A> {
    /// Wraps `value`.
    #[inline]
    pub const fn new(value: M) -> Self {
        Self {
            value,
            _phantom: PhantomData,
        }
    }

    /// Consumes the carrier and returns the accumulated value.
    #[inline]
    pub fn into_inner(self) -> M {
        self.value
    }

    /// Returns a reference to the accumulated value.
    #[inline]
    pub const fn as_inner(&self) -> &M {
        &self.value
    }

    /// Changes the phantom type.
    #[inline]
    pub fn retag<B>(self) -> ApplyConst<M, B> {
        ApplyConst::new(self.value)
    }
}

impl<M: Clone, A> Clone for ApplyConst<M, A> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<M: PartialEq, A> PartialEq for ApplyConst<M, A> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<M: Eq, A> Eq for ApplyConst<M, A> {}

impl<M: fmt::Debug, A> fmt::Debug for ApplyConst<M, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("ApplyConst").field(&self.value).finish()
    }
}

/// Brand for [`ApplyConst<M, _>`].
///
/// An applicative whenever `M` is a monoid: `pure` yields `M::empty()` and
/// `map2` combines the two payloads left to right. It is also
/// contravariant, so every read-only optic and every traversal can run
/// under it.
pub struct ApplyConstBrand<M>(PhantomData<fn() -> M>);

impl<M> ApplyConstBrand<M> {
    /// Creates the brand.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<M> Default for ApplyConstBrand<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Clone for ApplyConstBrand<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for ApplyConstBrand<M> {}

impl<M> fmt::Debug for ApplyConstBrand<M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("ApplyConstBrand")
    }
}

impl<M> TypeConstructor for ApplyConstBrand<M> {
    type Applied<A> = ApplyConst<M, A>;
}

impl<M> Functor for ApplyConstBrand<M> {
    #[inline]
    fn fmap<A, B, F>(&self, value: ApplyConst<M, A>, _function: F) -> ApplyConst<M, B>
    where
        F: FnOnce(A) -> B,
    {
        value.retag()
    }
}

impl<M> Contravariant for ApplyConstBrand<M> {
    #[inline]
    fn contramap<A, B, F>(&self, value: ApplyConst<M, A>, _function: F) -> ApplyConst<M, B>
    where
        F: FnOnce(B) -> A,
    {
        value.retag()
    }
}

impl<M: Semigroup> Apply for ApplyConstBrand<M> {
    #[inline]
    fn map2<A, B, C, F>(
        &self,
        first: ApplyConst<M, A>,
        second: ApplyConst<M, B>,
        _function: F,
    ) -> ApplyConst<M, C>
    where
        F: FnOnce(A, B) -> C,
    {
        ApplyConst::new(first.value.combine(second.value))
    }
}

impl<M: Monoid> Applicative for ApplyConstBrand<M> {
    #[inline]
    fn pure<A>(&self, _value: A) -> ApplyConst<M, A> {
        ApplyConst::new(M::empty())
    }
}

static_assertions::assert_eq_size!(ConstBrand<String>, ());
static_assertions::assert_eq_size!(ApplyConstBrand<Vec<u8>>, ());
static_assertions::assert_not_impl_any!(ConstBrand<i32>: Apply);
