//! Traversals: optics with zero or more foci that can both read and write.
//!
//! [`traverse`] focuses on every element of any [`Traversable`] container.
//! A traversal runs under any [`Applicative`] brand, so it supports `set`,
//! `over`, every fold accessor, and [`traverse_of`] with an arbitrary
//! applicative such as `Option` or `Result`.
//!
//! # Laws
//!
//! 1. **Identity Law**: Traversing with `pure` changes nothing.
//!    ```text
//!    over(t, |x| x, s) == s
//!    ```
//!
//! 2. **Fusion Law**: Two passes equal one composed pass.
//!    ```text
//!    over(t, g, over(t, f, s)) == over(t, |x| g(f(x)), s)
//!    ```
//!
//! 3. **Composition Law**: A composed traversal updates like nested passes.
//!    ```text
//!    over(compose(t1, t2), f, s) == over(t1, |x| over(t2, f, x), s)
//!    ```
//!
//! # Examples
//!
//! ```
//! use optika::optics::{over, set, to_array_of, traverse};
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//!
//! assert_eq!(to_array_of(&traverse(), numbers.clone()), vec![1, 2, 3, 4, 5]);
//! assert_eq!(over(&traverse(), |x: i32| x * 2, numbers.clone()), vec![2, 4, 6, 8, 10]);
//! assert_eq!(set(&traverse(), 0, numbers), vec![0, 0, 0, 0, 0]);
//! ```

use super::optic::Optic;
use crate::typeclass::{Applicative, TypeConstructor};

/// How a container lays out its elements.
///
/// The shape decides how a traversal threads the applicative through the
/// container: every shape visits elements in the container's natural
/// order, and an [`Optional`](Shape::Optional) container with no element
/// returns `pure(container)` without calling the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A sequence; elements are keyed by position.
    Indexed,
    /// A key-value container; values are traversed, keys are preserved.
    Keyed,
    /// At most one element.
    Optional,
}

/// A container whose elements can be visited in a fixed natural order.
///
/// Implementations exist for the standard collections (see
/// [`each`](super::each)), and [`Erased`](crate::dynamic::Erased)
/// implements it for containers known only at runtime. Putting elements
/// back is described by [`Rebuild`].
pub trait Traversable: Sized {
    /// Where an element sits: its position, its map key, or `()`.
    type Key;

    /// The traversed element.
    type Item;

    /// The entries, in natural order.
    type Entries: Iterator<Item = (Self::Key, Self::Item)>;

    /// Reports the container's shape.
    fn shape(&self) -> Shape;
}

/// A [`Traversable`] container that can be rebuilt holding elements of
/// type `B`.
///
/// `Vec<A>` rebuilds into `Vec<B>` for any `B`; a set only into sets of
/// ordered elements; an [`Erased`](crate::dynamic::Erased) container only
/// into its own element type.
///
/// # Laws
///
/// Splitting a container and rebuilding it from the unchanged entries, in
/// order, must yield an equal container.
pub trait Rebuild<B>: Traversable {
    /// The same kind of container, holding `B`s.
    type Output;

    /// Partially rebuilt container, threaded through the traversal.
    type Builder;

    /// Splits the container into an empty builder and its entries.
    fn into_parts(self) -> (Self::Builder, Self::Entries);

    /// Puts one entry back.
    fn rebuild(builder: Self::Builder, key: Self::Key, item: B) -> Self::Builder;

    /// Finishes rebuilding.
    fn finish(builder: Self::Builder) -> Self::Output;
}

/// Runs `handler` over every element of `source` and rebuilds it under the
/// applicative `brand`.
///
/// Effects are combined left to right with an explicit loop, so the depth
/// of the call stack does not depend on the number of elements.
pub fn traverse_container<F, S, B, H>(
    brand: &F,
    handler: &mut H,
    source: S,
) -> F::Applied<<S as Rebuild<B>>::Output>
where
    F: Applicative,
    S: Rebuild<B>,
    H: FnMut(&F, S::Item) -> F::Applied<B>,
{
    let shape = source.shape();
    let (builder, mut entries) = source.into_parts();
    match shape {
        Shape::Optional => match entries.next() {
            Some((key, item)) => brand.fmap(handler(brand, item), move |item| {
                S::finish(S::rebuild(builder, key, item))
            }),
            None => brand.pure(S::finish(builder)),
        },
        Shape::Indexed | Shape::Keyed => {
            let rebuilt = entries.fold(brand.pure(builder), |accumulator, (key, item)| {
                brand.map2(accumulator, handler(brand, item), move |builder, item| {
                    S::rebuild(builder, key, item)
                })
            });
            brand.fmap(rebuilt, S::finish)
        }
    }
}

/// The traversal over every element of a [`Traversable`] container.
///
/// Created by [`traverse`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Each;

/// Focuses on every element of a container.
///
/// For maps the foci are the values; keys are left untouched. The element
/// type may change on the way back: traversing a `Vec<&str>` with a
/// handler producing `i32` rebuilds a `Vec<i32>`.
#[must_use]
pub const fn traverse() -> Each {
    Each
}

impl<F, S, B> Optic<F, S, <S as Rebuild<B>>::Output, S::Item, B> for Each
where
    F: Applicative,
    S: Rebuild<B>,
{
    #[inline]
    fn run<H>(&self, brand: &F, handler: &mut H, source: S) -> F::Applied<<S as Rebuild<B>>::Output>
    where
        H: FnMut(&F, S::Item) -> F::Applied<B>,
    {
        traverse_container(brand, handler, source)
    }
}

/// Runs `optic` under a caller-chosen brand.
///
/// This is the fully general accessor: `set`, `over`, `get` and the folds
/// are all `traverse_of` with a particular brand. With
/// [`OptionBrand`](crate::typeclass::OptionBrand) it validates every focus
/// and fails as a whole if any focus fails.
///
/// # Example
///
/// ```
/// use optika::optics::{traverse, traverse_of};
/// use optika::typeclass::OptionBrand;
///
/// let halve = |_: &OptionBrand, x: i32| (x % 2 == 0).then_some(x / 2);
///
/// assert_eq!(traverse_of(&OptionBrand, &traverse(), halve, vec![2, 4]), Some(vec![1, 2]));
/// assert_eq!(traverse_of(&OptionBrand, &traverse(), halve, vec![2, 3]), None);
///
/// let parse = |_: &OptionBrand, text: &str| text.parse::<u8>().ok();
/// assert_eq!(traverse_of(&OptionBrand, &traverse(), parse, vec!["7", "8"]), Some(vec![7, 8]));
/// ```
pub fn traverse_of<F, O, S, T, A, B, G>(brand: &F, optic: &O, mut function: G, source: S) -> F::Applied<T>
where
    F: TypeConstructor,
    O: Optic<F, S, T, A, B>,
    G: FnMut(&F, A) -> F::Applied<B>,
{
    optic.run(brand, &mut function, source)
}

static_assertions::assert_not_impl_any!(
    Each: Optic<crate::typeclass::ConstBrand<i32>, Vec<i32>, Vec<i32>, i32, i32>
);
static_assertions::assert_impl_all!(
    Each: Optic<crate::typeclass::IdentityBrand, Vec<i32>, Vec<i32>, i32, i32>
);
