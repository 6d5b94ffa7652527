//! Setters: write-only optics, and the write accessors shared by every
//! optic that can modify its foci.
//!
//! [`setting`] turns a "map over every focus" function into an optic. Such
//! an optic can modify, but it can never observe, so it only runs under
//! [`Settable`] brands.
//!
//! [`set`] and [`over`] run any optic under
//! [`IdentityBrand`]: lenses, traversals, setters and their compositions.

use super::optic::Optic;
use crate::typeclass::{Identity, IdentityBrand, Settable};

/// A setter built from a mapping function.
///
/// Created by [`setting`].
#[derive(Clone, Copy)]
pub struct Setting<M> {
    modifier: M,
}

/// Creates a setter from a function that applies a modification to every
/// focus of a structure.
///
/// The modifier receives the per-focus update as `&mut dyn FnMut(A) -> B`
/// and the structure to rebuild.
///
/// # Example
///
/// ```
/// use optika::optics::{over, set, setting};
///
/// let every_value = setting(|update: &mut dyn FnMut(i32) -> i32, values: Vec<i32>| {
///     values.into_iter().map(|value| update(value)).collect::<Vec<_>>()
/// });
///
/// assert_eq!(over(&every_value, |x: i32| x + 1, vec![1, 2]), vec![2, 3]);
/// assert_eq!(set(&every_value, 0, vec![1, 2]), vec![0, 0]);
/// ```
#[must_use]
pub const fn setting<S, T, A, B, M>(modifier: M) -> Setting<M>
where
    M: Fn(&mut dyn FnMut(A) -> B, S) -> T,
{
    Setting { modifier }
}

impl<F, S, T, A, B, M> Optic<F, S, T, A, B> for Setting<M>
where
    F: Settable,
    M: Fn(&mut dyn FnMut(A) -> B, S) -> T,
{
    fn run<H>(&self, brand: &F, handler: &mut H, source: S) -> F::Applied<T>
    where
        H: FnMut(&F, A) -> F::Applied<B>,
    {
        let mut update = |focus: A| brand.untainted(handler(brand, focus));
        brand.pure((self.modifier)(&mut update, source))
    }
}

impl<M> std::fmt::Debug for Setting<M> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Setting").finish_non_exhaustive()
    }
}

/// Replaces every focus of `optic` in `source` with `value`.
///
/// A missing focus (an absent [`index`](super::index), an empty container)
/// leaves the structure unchanged.
///
/// # Example
///
/// ```
/// use optika::optics::{index, set, traverse};
///
/// assert_eq!(set(&index(1), 9, vec![1, 2, 3]), vec![1, 9, 3]);
/// assert_eq!(set(&index(7), 9, vec![1, 2, 3]), vec![1, 2, 3]);
/// assert_eq!(set(&traverse(), 0, vec![1, 2, 3]), vec![0, 0, 0]);
/// ```
pub fn set<O, S, T, A, B>(optic: &O, value: B, source: S) -> T
where
    O: Optic<IdentityBrand, S, T, A, B>,
    B: Clone,
{
    optic
        .run(
            &IdentityBrand,
            &mut |_: &IdentityBrand, _: A| Identity::new(value.clone()),
            source,
        )
        .into_inner()
}

/// Replaces every focus of `optic` in `source` with `function` applied to
/// it.
///
/// `function` is called once per focus, in the structure's natural order.
///
/// # Example
///
/// ```
/// use optika::optics::{compose, over, traverse};
///
/// let nested = vec![vec![1, 2], vec![3]];
/// let everything = compose(traverse(), traverse());
/// assert_eq!(over(&everything, |x: i32| x * 10, nested), vec![vec![10, 20], vec![30]]);
/// ```
pub fn over<O, S, T, A, B, G>(optic: &O, mut function: G, source: S) -> T
where
    O: Optic<IdentityBrand, S, T, A, B>,
    G: FnMut(A) -> B,
{
    optic
        .run(
            &IdentityBrand,
            &mut |_: &IdentityBrand, focus: A| Identity::new(function(focus)),
            source,
        )
        .into_inner()
}
