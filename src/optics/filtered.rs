//! Filtered optics for conditional element access.
//!
//! [`filtering`] keeps its single candidate focus only when a predicate
//! holds. Composed after a traversal, it narrows the traversal to the
//! matching elements: the others are left untouched by `set` and `over`
//! and excluded from folds.
//!
//! The predicate must not depend on anything the update changes, or the
//! composition laws of the resulting traversal no longer hold.
//!
//! # Examples
//!
//! ```
//! use optika::optics::{compose, filtering, over, sum_of, traverse};
//!
//! let evens = compose(traverse(), filtering(|x: &i32| x % 2 == 0));
//!
//! assert_eq!(over(&evens, |x: i32| x * 2, vec![1, 2, 3, 4]), vec![1, 4, 3, 8]);
//! assert_eq!(sum_of(&evens, vec![1, 2, 3, 4]), 6);
//! ```

use std::fmt;

use super::optic::Optic;
use crate::typeclass::Applicative;

/// A traversal with zero or one focus, decided by a predicate.
///
/// Created by [`filtering`].
#[derive(Clone, Copy)]
pub struct Filtering<P> {
    predicate: P,
}

/// Creates a traversal that focuses on its input only when `predicate`
/// returns `true`.
#[must_use]
pub const fn filtering<A, P>(predicate: P) -> Filtering<P>
where
    P: Fn(&A) -> bool,
{
    Filtering { predicate }
}

impl<F, A, P> Optic<F, A, A, A, A> for Filtering<P>
where
    F: Applicative,
    P: Fn(&A) -> bool,
{
    #[inline]
    fn run<H>(&self, brand: &F, handler: &mut H, source: A) -> F::Applied<A>
    where
        H: FnMut(&F, A) -> F::Applied<A>,
    {
        if (self.predicate)(&source) {
            handler(brand, source)
        } else {
            brand.pure(source)
        }
    }
}

impl<P> fmt::Debug for Filtering<P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Filtering").finish_non_exhaustive()
    }
}
