//! Identity wrapper type - the identity functor.
//!
//! [`Identity`] wraps a value and adds no behaviour. Its brand,
//! [`IdentityBrand`], is the carrier for every write through an optic:
//! running an optic under it rebuilds the structure with new foci and
//! [`Settable::untainted`] unwraps the result.

use super::applicative::{Applicative, Apply, Settable};
use super::functor::Functor;
use super::higher::TypeConstructor;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The identity functor - wraps a value without adding any behaviour.
///
/// # Examples
///
/// ```rust
/// use optika::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
///
/// // Using the tuple-struct syntax
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
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

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

/// Brand for [`Identity`].
///
/// The only [`Settable`] brand: `set` and `over` run optics under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IdentityBrand;

impl TypeConstructor for IdentityBrand {
    type Applied<A> = Identity<A>;
}

impl Functor for IdentityBrand {
    #[inline]
    fn fmap<A, B, F>(&self, value: Identity<A>, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(value.0))
    }
}

impl Apply for IdentityBrand {
    #[inline]
    fn map2<A, B, C, F>(&self, first: Identity<A>, second: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity(function(first.0, second.0))
    }
}

impl Applicative for IdentityBrand {
    #[inline]
    fn pure<A>(&self, value: A) -> Identity<A> {
        Identity(value)
    }
}

impl Settable for IdentityBrand {
    #[inline]
    fn untainted<A>(&self, value: Identity<A>) -> A {
        value.0
    }
}

static_assertions::assert_eq_size!(IdentityBrand, ());
