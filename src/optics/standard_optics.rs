//! Lenses onto the components of a pair.
//!
//! Both lenses are type-changing: replacing the first component of an
//! `(A, C)` with a `B` yields a `(B, C)`.

use super::optic::Optic;
use crate::typeclass::Functor;

/// A lens onto the first component of a pair.
///
/// Created by [`pair_first`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PairFirst;

/// A lens onto the second component of a pair.
///
/// Created by [`pair_second`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PairSecond;

/// Focuses on the first component of a pair.
///
/// # Example
///
/// ```
/// use optika::optics::{get, over, pair_first};
///
/// assert_eq!(get(&pair_first(), (1, "one")), 1);
/// assert_eq!(over(&pair_first(), |n: i32| n.to_string(), (1, "one")), ("1".to_string(), "one"));
/// ```
#[must_use]
pub const fn pair_first() -> PairFirst {
    PairFirst
}

/// Focuses on the second component of a pair.
#[must_use]
pub const fn pair_second() -> PairSecond {
    PairSecond
}

impl<F, A, B, C> Optic<F, (A, C), (B, C), A, B> for PairFirst
where
    F: Functor,
{
    #[inline]
    fn run<H>(&self, brand: &F, handler: &mut H, source: (A, C)) -> F::Applied<(B, C)>
    where
        H: FnMut(&F, A) -> F::Applied<B>,
    {
        let (first, second) = source;
        brand.fmap(handler(brand, first), |first| (first, second))
    }
}

impl<F, A, B, C> Optic<F, (C, A), (C, B), A, B> for PairSecond
where
    F: Functor,
{
    #[inline]
    fn run<H>(&self, brand: &F, handler: &mut H, source: (C, A)) -> F::Applied<(C, B)>
    where
        H: FnMut(&F, A) -> F::Applied<B>,
    {
        let (first, second) = source;
        brand.fmap(handler(brand, second), |second| (first, second))
    }
}
