//! Composition of optics.
//!
//! [`compose`] chains an outer optic (from `S` to `X`) with an inner optic
//! (from `X` to `A`) into one optic from `S` to `A`. The composite runs
//! under a brand only when both parts do, so its capability is the weaker
//! of the two:
//!
//! | outer \ inner | Lens | Getter | Traversal | Fold | Setter |
//! |---------------|------|--------|-----------|------|--------|
//! | Lens          | Lens | Getter | Traversal | Fold | Setter |
//! | Getter        | Getter | Getter | Fold    | Fold | -      |
//! | Traversal     | Traversal | Fold | Traversal | Fold | Setter |
//! | Fold          | Fold | Fold   | Fold      | Fold | -      |
//! | Setter        | Setter | -    | Setter    | -    | Setter |
//!
//! Composition is associative, and [`identity`] is its unit on both sides.
//!
//! # Examples
//!
//! ```
//! use optika::field;
//! use optika::optics::{compose, get, set, to_array_of, traverse};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Team { members: Vec<Member> }
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Member { name: String }
//!
//! let names = compose(field!(Team, members), compose(traverse(), field!(Member, name)));
//!
//! let team = Team { members: vec![Member { name: "ada".into() }, Member { name: "alan".into() }] };
//! assert_eq!(to_array_of(&names, team.clone()), vec!["ada", "alan"]);
//!
//! let anonymous = set(&names, String::from("?"), team);
//! assert_eq!(to_array_of(&names, anonymous), vec!["?", "?"]);
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::optic::Optic;
use crate::typeclass::{Functor, TypeConstructor};

/// Two optics run one inside the other.
///
/// Created by [`compose`]. `X` and `Y` are the intermediate focus types
/// (read and written) the two parts meet at.
pub struct Composed<O1, O2, X, Y> {
    outer: O1,
    inner: O2,
    _marker: PhantomData<fn(X) -> Y>,
}

impl<O1, O2, X, Y> Composed<O1, O2, X, Y> {
    /// Returns the outer optic.
    pub const fn outer(&self) -> &O1 {
        &self.outer
    }

    /// Returns the inner optic.
    pub const fn inner(&self) -> &O2 {
        &self.inner
    }
}

/// Composes `outer` with `inner`: the foci of the result are the foci of
/// `inner` within every focus of `outer`.
#[must_use]
pub const fn compose<O1, O2, X, Y>(outer: O1, inner: O2) -> Composed<O1, O2, X, Y> {
    Composed {
        outer,
        inner,
        _marker: PhantomData,
    }
}

impl<F, S, T, X, Y, A, B, O1, O2> Optic<F, S, T, A, B> for Composed<O1, O2, X, Y>
where
    F: TypeConstructor,
    O1: Optic<F, S, T, X, Y>,
    O2: Optic<F, X, Y, A, B>,
{
    #[inline]
    fn run<H>(&self, brand: &F, handler: &mut H, source: S) -> F::Applied<T>
    where
        H: FnMut(&F, A) -> F::Applied<B>,
    {
        let inner = &self.inner;
        self.outer.run(
            brand,
            &mut |brand: &F, focus: X| inner.run(brand, &mut *handler, focus),
            source,
        )
    }
}

impl<O1: Clone, O2: Clone, X, Y> Clone for Composed<O1, O2, X, Y> {
    fn clone(&self) -> Self {
        compose(self.outer.clone(), self.inner.clone())
    }
}

impl<O1: Copy, O2: Copy, X, Y> Copy for Composed<O1, O2, X, Y> {}

impl<O1: fmt::Debug, O2: fmt::Debug, X, Y> fmt::Debug for Composed<O1, O2, X, Y> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Composed")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}

/// The optic whose single focus is the whole structure.
///
/// Created by [`identity`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Whole;

/// The unit of [`compose`]: focuses on the structure itself.
///
/// # Example
///
/// ```
/// use optika::optics::{compose, get, identity, index};
///
/// let same = compose(identity(), compose(index(0), identity()));
/// assert_eq!(get(&same, vec!['a']), 'a');
/// ```
#[must_use]
pub const fn identity() -> Whole {
    Whole
}

impl<F, S, T> Optic<F, S, T, S, T> for Whole
where
    F: Functor,
{
    #[inline]
    fn run<H>(&self, brand: &F, handler: &mut H, source: S) -> F::Applied<T>
    where
        H: FnMut(&F, S) -> F::Applied<T>,
    {
        handler(brand, source)
    }
}
