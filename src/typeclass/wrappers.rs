//! Newtype wrappers that pick a particular monoid for a type.
//!
//! The same underlying value can be combined in more than one way: numbers
//! add ([`Sum`]) or multiply ([`Product`]); optional values keep the
//! leftmost ([`First`]) or rightmost ([`Last`]) present value. Folds through
//! optics choose their summary by choosing the wrapper.
//!
//! # Available Wrappers
//!
//! - [`Sum`]: Addition (identity: `Default::default()`)
//! - [`Product`]: Multiplication (identity: one)
//! - [`First`]: Leftmost `Some` (identity: `None`)
//! - [`Last`]: Rightmost `Some` (identity: `None`)

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// =============================================================================
// Sum Wrapper
// =============================================================================

/// A newtype wrapper that represents the additive monoid.
///
/// `Sum(a).combine(Sum(b))` equals `Sum(a + b)`, and the identity element is
/// `Sum(A::default())`.
///
/// # Examples
///
/// ```rust
/// use optika::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum::new(3).combine(Sum::new(5)), Sum::new(8));
/// assert_eq!(Sum::<i32>::empty(), Sum::new(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Creates a new `Sum` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Sum` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

// =============================================================================
// Product Wrapper
// =============================================================================

/// A newtype wrapper that represents the multiplicative monoid.
///
/// # Examples
///
/// ```rust
/// use optika::typeclass::{Monoid, Product, Semigroup};
///
/// assert_eq!(Product::new(3).combine(Product::new(5)), Product::new(15));
/// assert_eq!(Product::<i64>::empty(), Product::new(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Product<A>(pub A);

impl<A> Product<A> {
    /// Creates a new `Product` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Product` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

// =============================================================================
// First / Last Wrappers
// =============================================================================

/// Keeps the leftmost present value.
///
/// Folding with `First` is how a multi-focus optic yields "the first focus,
/// if any".
///
/// # Examples
///
/// ```rust
/// use optika::typeclass::{First, Monoid, Semigroup};
///
/// let combined = First::new(None).combine(First::new(Some(2))).combine(First::new(Some(3)));
/// assert_eq!(combined.into_inner(), Some(2));
/// assert_eq!(First::<i32>::empty().into_inner(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct First<A>(pub Option<A>);

impl<A> First<A> {
    /// Creates a new `First` wrapping the given option.
    #[inline]
    pub const fn new(value: Option<A>) -> Self {
        Self(value)
    }

    /// Consumes the `First` and returns the inner option.
    #[inline]
    pub fn into_inner(self) -> Option<A> {
        self.0
    }

    /// Returns a reference to the inner option.
    #[inline]
    pub const fn as_inner(&self) -> &Option<A> {
        &self.0
    }
}

impl<A> Default for First<A> {
    fn default() -> Self {
        Self(None)
    }
}

impl<A> From<A> for First<A> {
    fn from(value: A) -> Self {
        Self(Some(value))
    }
}

/// Keeps the rightmost present value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Last<A>(pub Option<A>);

impl<A> Last<A> {
    /// Creates a new `Last` wrapping the given option.
    #[inline]
    pub const fn new(value: Option<A>) -> Self {
        Self(value)
    }

    /// Consumes the `Last` and returns the inner option.
    #[inline]
    pub fn into_inner(self) -> Option<A> {
        self.0
    }

    /// Returns a reference to the inner option.
    #[inline]
    pub const fn as_inner(&self) -> &Option<A> {
        &self.0
    }
}

impl<A> Default for Last<A> {
    fn default() -> Self {
        Self(None)
    }
}

impl<A> From<A> for Last<A> {
    fn from(value: A) -> Self {
        Self(Some(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn sum_accessors() {
        let sum = Sum::new(4);
        assert_eq!(*sum.as_inner(), 4);
        assert_eq!(sum.into_inner(), 4);
    }

    #[rstest]
    fn product_accessors() {
        let product = Product::new(2.5);
        assert_eq!(*product.as_inner(), 2.5);
        assert_eq!(product.into_inner(), 2.5);
    }

    #[rstest]
    fn first_default_is_none() {
        assert_eq!(First::<u8>::default(), First::new(None));
    }

    #[rstest]
    fn last_from_wraps_in_some() {
        assert_eq!(Last::from('z').into_inner(), Some('z'));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn first_serializes_as_option() {
        assert_eq!(serde_json::to_string(&First::new(Some(1))).unwrap(), "1");
        assert_eq!(serde_json::to_string(&First::<i32>::new(None)).unwrap(), "null");
    }
}
