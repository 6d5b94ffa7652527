//! Folds: read-only optics with any number of foci, and the fold accessors.
//!
//! Every accessor here runs an optic under
//! [`ApplyConstBrand<M>`](crate::typeclass::ApplyConstBrand) for some
//! monoid `M`. Each focus is mapped into `M` and the results are combined
//! left to right. Lenses, getters, traversals, folds and their compositions
//! all qualify; setters do not.
//!
//! # Examples
//!
//! ```
//! use optika::optics::{folding, fold_map_of, length_of, to_array_of};
//! use optika::typeclass::Sum;
//!
//! let digits = folding(|number: &u32| {
//!     number.to_string().chars().filter_map(|c| c.to_digit(10)).collect::<Vec<_>>()
//! });
//!
//! assert_eq!(to_array_of(&digits, 2024), vec![2, 0, 2, 4]);
//! assert_eq!(fold_map_of(&digits, Sum::new, 2024).into_inner(), 8);
//! assert_eq!(length_of(&digits, 7), 1);
//! ```

use std::collections::VecDeque;
use std::marker::PhantomData;
use std::ops::Add;

use super::optic::Optic;
use crate::typeclass::{
    Applicative, ApplyConst, ApplyConstBrand, Contravariant, Endo, First, Last, Monoid, Product, Sum,
};

/// A fold built from a function listing the foci.
///
/// Created by [`folding`].
pub struct Folding<G, I> {
    elements: G,
    _marker: PhantomData<fn() -> I>,
}

/// Creates a fold from a function that lists the foci of a structure.
///
/// The function borrows the structure and returns anything iterable.
#[must_use]
pub const fn folding<S, A, I, G>(elements: G) -> Folding<G, I>
where
    G: Fn(&S) -> I,
    I: IntoIterator<Item = A>,
{
    Folding {
        elements,
        _marker: PhantomData,
    }
}

impl<F, S, A, I, G> Optic<F, S, S, A, A> for Folding<G, I>
where
    F: Applicative + Contravariant,
    G: Fn(&S) -> I,
    I: IntoIterator<Item = A>,
{
    fn run<H>(&self, brand: &F, handler: &mut H, source: S) -> F::Applied<S>
    where
        H: FnMut(&F, A) -> F::Applied<A>,
    {
        let summary = (self.elements)(&source)
            .into_iter()
            .fold(brand.pure(()), |accumulator, focus| {
                brand.map2(accumulator, handler(brand, focus), |(), _| ())
            });
        brand.contramap(summary, |_: S| ())
    }
}

impl<G: Clone, I> Clone for Folding<G, I> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            _marker: PhantomData,
        }
    }
}

impl<G: Copy, I> Copy for Folding<G, I> {}

impl<G, I> std::fmt::Debug for Folding<G, I> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Folding").finish_non_exhaustive()
    }
}

// =============================================================================
// Monoidal folds
// =============================================================================

/// Maps every focus into a monoid and combines the results left to right.
///
/// With no foci the result is `M::empty()`.
pub fn fold_map_of<O, S, A, M, G>(optic: &O, mut function: G, source: S) -> M
where
    O: Optic<ApplyConstBrand<M>, S, S, A, A>,
    M: Monoid,
    G: FnMut(A) -> M,
{
    optic
        .run(
            &ApplyConstBrand::new(),
            &mut |_: &ApplyConstBrand<M>, focus: A| ApplyConst::new(function(focus)),
            source,
        )
        .into_inner()
}

/// Combines foci that are themselves monoid values.
///
/// # Example
///
/// ```
/// use optika::optics::{fold_of, traverse};
///
/// let words = vec!["ab".to_string(), "cd".to_string()];
/// assert_eq!(fold_of(&traverse(), words), "abcd");
/// ```
pub fn fold_of<O, S, A>(optic: &O, source: S) -> A
where
    O: Optic<ApplyConstBrand<A>, S, S, A, A>,
    A: Monoid,
{
    fold_map_of(optic, |focus| focus, source)
}

/// Right-associative fold over the foci.
///
/// For foci `a1, ..., an` the result is `f(a1, f(a2, ... f(an, initial)))`.
/// The composed steps are kept in a flat list, so long focus sequences do
/// not deepen the call stack.
///
/// # Example
///
/// ```
/// use optika::optics::{foldr_of, traverse};
///
/// let spelled = foldr_of(&traverse(), |c: char, rest: String| format!("{c}{rest}"), String::from("!"), vec!['h', 'i']);
/// assert_eq!(spelled, "hi!");
/// ```
pub fn foldr_of<O, S, A, R, G>(optic: &O, function: G, initial: R, source: S) -> R
where
    O: for<'f> Optic<ApplyConstBrand<Endo<'f, R>>, S, S, A, A>,
    G: Fn(A, R) -> R,
{
    let function = &function;
    fold_map_of(
        optic,
        |focus: A| Endo::new(move |accumulator: R| function(focus, accumulator)),
        source,
    )
    .apply(initial)
}

/// Sums the foci, starting from `A::default()`.
///
/// # Example
///
/// ```
/// use optika::optics::{sum_of, traverse};
///
/// assert_eq!(sum_of(&traverse(), vec![1, 2, 3]), 6);
/// assert_eq!(sum_of(&traverse(), Vec::<i32>::new()), 0);
/// ```
pub fn sum_of<O, S, A>(optic: &O, source: S) -> A
where
    O: for<'f> Optic<ApplyConstBrand<Endo<'f, A>>, S, S, A, A>,
    A: Add<Output = A> + Default,
{
    foldr_of(optic, |focus: A, accumulator: A| focus + accumulator, A::default(), source)
}

/// Multiplies the foci, starting from one.
pub fn product_of<O, S, A>(optic: &O, source: S) -> A
where
    O: Optic<ApplyConstBrand<Product<A>>, S, S, A, A>,
    Product<A>: Monoid,
{
    fold_map_of(optic, Product::new, source).into_inner()
}

/// Counts the foci.
pub fn length_of<O, S, A>(optic: &O, source: S) -> usize
where
    O: Optic<ApplyConstBrand<Sum<usize>>, S, S, A, A>,
{
    fold_map_of(optic, |_| Sum::new(1), source).into_inner()
}

// =============================================================================
// Extracting foci
// =============================================================================

/// Returns the first focus, if any.
///
/// # Example
///
/// ```
/// use optika::optics::{index, lookup, traverse};
///
/// assert_eq!(lookup(&traverse(), vec![7, 8]), Some(7));
/// assert_eq!(lookup(&index(9), vec![7, 8]), None);
/// ```
pub fn lookup<O, S, A>(optic: &O, source: S) -> Option<A>
where
    O: Optic<ApplyConstBrand<First<A>>, S, S, A, A>,
{
    fold_map_of(optic, |focus| First::new(Some(focus)), source).into_inner()
}

/// Returns the last focus, if any.
pub fn last_of<O, S, A>(optic: &O, source: S) -> Option<A>
where
    O: Optic<ApplyConstBrand<Last<A>>, S, S, A, A>,
{
    fold_map_of(optic, |focus| Last::new(Some(focus)), source).into_inner()
}

/// Returns `true` if any focus satisfies `predicate`.
pub fn any_of<O, S, A, P>(optic: &O, predicate: P, source: S) -> bool
where
    O: Optic<ApplyConstBrand<First<()>>, S, S, A, A>,
    P: Fn(&A) -> bool,
{
    fold_map_of(optic, |focus: A| First::new(predicate(&focus).then_some(())), source)
        .into_inner()
        .is_some()
}

/// Returns `true` if every focus satisfies `predicate`; vacuously `true`
/// with no foci.
pub fn all_of<O, S, A, P>(optic: &O, predicate: P, source: S) -> bool
where
    O: Optic<ApplyConstBrand<First<()>>, S, S, A, A>,
    P: Fn(&A) -> bool,
{
    !any_of(optic, |focus: &A| !predicate(focus), source)
}

/// Collects the foci into a `Vec`, in order.
///
/// # Example
///
/// ```
/// use optika::optics::{compose, to_array_of, traverse};
///
/// let nested = vec![vec![1, 2], vec![], vec![3]];
/// assert_eq!(to_array_of(&compose(traverse(), traverse()), nested), vec![1, 2, 3]);
/// ```
pub fn to_array_of<O, S, A>(optic: &O, source: S) -> Vec<A>
where
    O: for<'f> Optic<ApplyConstBrand<Endo<'f, VecDeque<A>>>, S, S, A, A>,
{
    Vec::from(to_list_of(optic, source))
}

/// Collects the foci into a `VecDeque`, in order, by prepending each focus
/// in a right fold.
pub fn to_list_of<O, S, A>(optic: &O, source: S) -> VecDeque<A>
where
    O: for<'f> Optic<ApplyConstBrand<Endo<'f, VecDeque<A>>>, S, S, A, A>,
{
    foldr_of(
        optic,
        |focus, mut list: VecDeque<A>| {
            list.push_front(focus);
            list
        },
        VecDeque::new(),
        source,
    )
}

/// Collects the foci into a persistent [`Stack`](crate::persistent::Stack)
/// whose top is the first focus.
#[cfg(feature = "persistent")]
pub fn to_stack_of<O, S, A>(optic: &O, source: S) -> crate::persistent::Stack<A>
where
    O: for<'f> Optic<ApplyConstBrand<Endo<'f, crate::persistent::Stack<A>>>, S, S, A, A>,
{
    foldr_of(
        optic,
        |focus, stack: crate::persistent::Stack<A>| stack.cons(focus),
        crate::persistent::Stack::new(),
        source,
    )
}
