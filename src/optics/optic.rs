//! The optic abstraction every lens, getter, setter, fold and traversal
//! implements.
//!
//! In the van Laarhoven formulation an optic is a function that, given a
//! way to turn a focus `A` into an effectful replacement `F<B>`, turns a
//! whole structure `S` into an effectful rebuilt structure `F<T>`:
//!
//! ```text
//! (A -> F<B>) -> S -> F<T>
//! ```
//!
//! The carrier `F` is chosen by the *caller*. Running under
//! [`IdentityBrand`](crate::typeclass::IdentityBrand) writes, running under
//! [`ConstBrand`](crate::typeclass::ConstBrand) reads a single focus, and
//! running under [`ApplyConstBrand`](crate::typeclass::ApplyConstBrand)
//! summarises many foci. What an optic *can* do is therefore exactly the set
//! of brands it implements [`Optic`] for:
//!
//! | Kind | Implemented for brands that are |
//! |------|---------------------------------|
//! | Lens | `Functor` |
//! | Traversal | `Applicative` |
//! | Getter | `Contravariant` |
//! | Fold | `Applicative + Contravariant` |
//! | Setter | `Settable` |
//!
//! Asking a traversal for `get` requires an impl for `ConstBrand`, which is
//! not applicative, so the mistake is a compile error rather than a
//! surprise at runtime.

use crate::typeclass::TypeConstructor;

/// An optic runnable under the carrier brand `F`.
///
/// # Type Parameters
///
/// - `F`: The carrier brand
/// - `S`: The source structure
/// - `T`: The rebuilt structure (equal to `S` unless the optic changes type)
/// - `A`: The focus read from `S`
/// - `B`: The replacement focus written into `T`
///
/// # Examples
///
/// ```rust
/// use optika::optics::{lens, Optic};
/// use optika::typeclass::{Identity, IdentityBrand};
///
/// let first = lens(|pair: &(i32, char)| pair.0, |pair: (i32, char), value: i32| (value, pair.1));
///
/// let rebuilt = first.run(
///     &IdentityBrand,
///     &mut |_: &IdentityBrand, focus: i32| Identity::new(focus + 1),
///     (41, 'x'),
/// );
/// assert_eq!(rebuilt.into_inner(), (42, 'x'));
/// ```
pub trait Optic<F: TypeConstructor, S, T, A, B> {
    /// Runs the optic: each focus of `source` is handed to `handler`, and
    /// the handler's results are threaded back into the rebuilt structure.
    ///
    /// Foci are visited in the structure's natural order.
    fn run<H>(&self, brand: &F, handler: &mut H, source: S) -> F::Applied<T>
    where
        H: FnMut(&F, A) -> F::Applied<B>;
}

impl<F, S, T, A, B, O> Optic<F, S, T, A, B> for &O
where
    F: TypeConstructor,
    O: Optic<F, S, T, A, B> + ?Sized,
{
    #[inline]
    fn run<H>(&self, brand: &F, handler: &mut H, source: S) -> F::Applied<T>
    where
        H: FnMut(&F, A) -> F::Applied<B>,
    {
        (**self).run(brand, handler, source)
    }
}
