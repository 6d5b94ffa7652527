//! Higher-Kinded Type emulation through brands and Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Option<_>` directly.
//! Instead, every constructor gets a zero-sized *brand* type whose
//! [`TypeConstructor::Applied`] associated type maps an element type to the
//! concrete container. Brands are ordinary values, so a function that needs
//! "some functor `F`" takes `&F` and calls the capability methods on it.
//!
//! This is the encoding optics are built on: an optic is polymorphic in the
//! brand it runs under, and the accessor chooses the brand.
//!
//! # Example
//!
//! ```rust
//! use optika::typeclass::{OptionBrand, TypeConstructor};
//!
//! fn empty<F>() -> F::Applied<String>
//! where
//!     F: TypeConstructor,
//!     F::Applied<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let nothing: Option<String> = empty::<OptionBrand>();
//! assert_eq!(nothing, None);
//! ```

/// A brand standing in for a type constructor.
///
/// # Laws
///
/// Implementations are expected to be zero-sized markers. All behaviour
/// lives in the capability traits ([`Functor`](super::Functor),
/// [`Applicative`](super::Applicative), ...) implemented on the brand.
pub trait TypeConstructor {
    /// The constructor applied to the element type `A`.
    ///
    /// For [`OptionBrand`](super::OptionBrand), `Applied<i32>` is `Option<i32>`.
    type Applied<A>;
}

// =============================================================================
// Standard Library Type Brands
// =============================================================================

/// Brand for [`Option`].
///
/// As an applicative, combining short-circuits to `None` as soon as either
/// side is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OptionBrand;

impl TypeConstructor for OptionBrand {
    type Applied<A> = Option<A>;
}

/// Brand for [`Result`] with a fixed error type `E`.
///
/// As an applicative, the first error encountered (left to right) wins.
pub struct ResultBrand<E>(std::marker::PhantomData<fn() -> E>);

impl<E> ResultBrand<E> {
    /// Creates the brand.
    #[must_use]
    pub const fn new() -> Self {
        Self(std::marker::PhantomData)
    }
}

impl<E> Default for ResultBrand<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for ResultBrand<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for ResultBrand<E> {}

impl<E> std::fmt::Debug for ResultBrand<E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("ResultBrand")
    }
}

impl<E> TypeConstructor for ResultBrand<E> {
    type Applied<A> = Result<A, E>;
}

static_assertions::assert_eq_size!(OptionBrand, ());
static_assertions::assert_eq_size!(ResultBrand<String>, ());
