//! Getters: read-only optics with exactly one focus.
//!
//! [`to`] lifts a plain function into an optic. The result composes with
//! lenses and traversals like any other optic, but since it only runs under
//! [`Contravariant`] brands the composite can no longer be written through.
//!
//! [`get`] is the accessor for every optic with exactly one focus.

use super::optic::Optic;
use crate::typeclass::{Const, ConstBrand, Contravariant};

/// An optic that reads a derived value.
///
/// Created by [`to`].
#[derive(Clone, Copy)]
pub struct To<G> {
    getter: G,
}

/// Lifts a function into a getter.
///
/// # Example
///
/// ```
/// use optika::optics::{compose, get, to, to_array_of, traverse};
///
/// let length = to(|text: &String| text.len());
/// assert_eq!(get(&length, "four".to_string()), 4);
///
/// let words = vec!["a".to_string(), "abc".to_string()];
/// assert_eq!(to_array_of(&compose(traverse(), length), words), vec![1, 3]);
/// ```
#[must_use]
pub const fn to<S, A, G>(getter: G) -> To<G>
where
    G: Fn(&S) -> A,
{
    To { getter }
}

impl<F, S, A, G> Optic<F, S, S, A, A> for To<G>
where
    F: Contravariant,
    G: Fn(&S) -> A,
{
    #[inline]
    fn run<H>(&self, brand: &F, handler: &mut H, source: S) -> F::Applied<S>
    where
        H: FnMut(&F, A) -> F::Applied<A>,
    {
        let focus = (self.getter)(&source);
        brand.phantom(handler(brand, focus))
    }
}

impl<G> std::fmt::Debug for To<G> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("To").finish_non_exhaustive()
    }
}

/// Reads the single focus of `optic` in `source`.
///
/// Only optics with exactly one focus (lenses, getters and their
/// compositions, and [`index`](super::index) / [`key`](super::key)) can be
/// read this way; passing a traversal or fold is a compile error. Use
/// [`lookup`](super::lookup) or [`to_array_of`](super::to_array_of) for
/// those.
///
/// # Example
///
/// ```
/// use optika::optics::{compose, get, index};
///
/// let grid = vec![vec![1, 2], vec![3, 4]];
/// assert_eq!(get(&compose(index(1), index(0)), grid), 3);
/// ```
pub fn get<O, S, A>(optic: &O, source: S) -> A
where
    O: Optic<ConstBrand<A>, S, S, A, A>,
{
    optic
        .run(
            &ConstBrand::new(),
            &mut |_: &ConstBrand<A>, focus: A| Const::new(focus),
            source,
        )
        .into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{compose, lookup, to_array_of};
    use crate::typeclass::IdentityBrand;
    use rstest::rstest;

    #[derive(Clone, Debug, PartialEq)]
    struct Temperature {
        celsius: f64,
    }

    #[rstest]
    fn to_reads_derived_value() {
        let fahrenheit = to(|reading: &Temperature| reading.celsius * 9.0 / 5.0 + 32.0);
        assert_eq!(get(&fahrenheit, Temperature { celsius: 100.0 }), 212.0);
    }

    #[rstest]
    fn to_composes_after_a_lens() {
        let celsius = crate::field!(Temperature, celsius);
        let rounded = compose(celsius, to(|value: &f64| value.round() as i64));
        assert_eq!(get(&rounded, Temperature { celsius: 21.6 }), 22);
    }

    #[rstest]
    fn to_works_as_a_fold() {
        let doubled = to(|value: &i32| value * 2);
        assert_eq!(lookup(&doubled, 4), Some(8));
        assert_eq!(to_array_of(&doubled, 4), vec![8]);
    }

    #[rstest]
    fn lens_composed_with_getter_reads_the_same_as_a_getter() {
        let lens_then_getter = compose(crate::field!(Temperature, celsius), to(|c: &f64| c + 1.0));
        let direct = to(|reading: &Temperature| reading.celsius + 1.0);
        let source = Temperature { celsius: 3.0 };
        assert_eq!(get(&lens_then_getter, source.clone()), get(&direct, source));
    }

    static_assertions::assert_not_impl_any!(
        To<fn(&i32) -> i32>: Optic<IdentityBrand, i32, i32, i32, i32>
    );
}
