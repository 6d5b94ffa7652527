//! Lens optics for focusing on exactly one part of a structure.
//!
//! A lens pairs a getter with a setter. Because it always has exactly one
//! focus it runs under any [`Functor`] brand, which means it can be read
//! with [`get`](super::get), written with [`set`](super::set) and
//! [`over`](super::over), folded, and traversed.
//!
//! # Laws
//!
//! Every lens must satisfy three laws:
//!
//! 1. **GetPut Law**: Setting what you got changes nothing.
//!    ```text
//!    set(lens, get(lens, s), s) == s
//!    ```
//!
//! 2. **PutGet Law**: You get back what you set.
//!    ```text
//!    get(lens, set(lens, v, s)) == v
//!    ```
//!
//! 3. **PutPut Law**: The last set wins.
//!    ```text
//!    set(lens, v2, set(lens, v1, s)) == set(lens, v2, s)
//!    ```
//!
//! # Examples
//!
//! ```
//! use optika::field;
//! use optika::optics::{get, set};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_lens = field!(Point, x);
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(get(&x_lens, point.clone()), 10);
//!
//! let updated = set(&x_lens, 100, point);
//! assert_eq!(updated, Point { x: 100, y: 20 });
//! ```

use std::fmt;

use super::optic::Optic;
use crate::typeclass::Functor;

/// A lens built from a getter and a setter.
///
/// The getter receives the structure by reference and returns an owned
/// focus; the setter consumes the structure and a replacement focus. The
/// setter may change the structure's type (`S -> T`) when the replacement
/// has a different type (`A -> B`).
///
/// # Type Parameters
///
/// - `G`: The getter, `Fn(&S) -> A`
/// - `St`: The setter, `Fn(S, B) -> T`
#[derive(Clone, Copy)]
pub struct Lens<G, St> {
    getter: G,
    setter: St,
}

/// A lens onto a field of a struct, with both functions as plain function
/// pointers. This is what `#[derive(Lenses)]` generates.
pub type FieldLens<S, A> = Lens<fn(&S) -> A, fn(S, A) -> S>;

impl<G, St> Lens<G, St> {
    /// Creates a new `Lens` from a getter and setter.
    ///
    /// Prefer [`lens`] when the closures need their signatures inferred.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self { getter, setter }
    }
}

impl<S, A> FieldLens<S, A> {
    /// Creates a field lens from two function pointers.
    #[must_use]
    pub const fn from_fns(getter: fn(&S) -> A, setter: fn(S, A) -> S) -> Self {
        Self { getter, setter }
    }
}

/// Creates a lens from a getter and a setter.
///
/// # Arguments
///
/// * `getter` - Extracts the focus from a borrowed structure
/// * `setter` - Rebuilds the structure around a new focus
///
/// # Example
///
/// ```
/// use optika::optics::{lens, over};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Account { owner: String, balance: i64 }
///
/// let balance = lens(
///     |account: &Account| account.balance,
///     |account: Account, balance: i64| Account { balance, ..account },
/// );
///
/// let account = Account { owner: "ada".into(), balance: 10 };
/// assert_eq!(over(&balance, |b: i64| b - 3, account).balance, 7);
/// ```
#[must_use]
pub const fn lens<S, T, A, B, G, St>(getter: G, setter: St) -> Lens<G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, B) -> T,
{
    Lens { getter, setter }
}

impl<F, S, T, A, B, G, St> Optic<F, S, T, A, B> for Lens<G, St>
where
    F: Functor,
    G: Fn(&S) -> A,
    St: Fn(S, B) -> T,
{
    #[inline]
    fn run<H>(&self, brand: &F, handler: &mut H, source: S) -> F::Applied<T>
    where
        H: FnMut(&F, A) -> F::Applied<B>,
    {
        let focus = (self.getter)(&source);
        brand.fmap(handler(brand, focus), |value| (self.setter)(source, value))
    }
}

impl<G, St> fmt::Debug for Lens<G, St> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Lens").finish_non_exhaustive()
    }
}

/// Creates a lens focusing on a field of a struct.
///
/// The field type must implement `Clone`, since reading through the lens
/// returns an owned copy of the field.
///
/// # Syntax
///
/// ```text
/// field!(StructName, field_name)
/// field!(StructName<T>, field_name)
/// field!(path::to::StructName, field_name)
/// ```
///
/// # Example
///
/// ```
/// use optika::field;
/// use optika::optics::{compose, get, over};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Address { street: String, city: String }
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Person { name: String, address: Address }
///
/// let street = compose(field!(Person, address), field!(Address, street));
///
/// let person = Person {
///     name: "Alice".to_string(),
///     address: Address { street: "Main St".to_string(), city: "Tokyo".to_string() },
/// };
///
/// assert_eq!(get(&street, person.clone()), "Main St");
/// let moved = over(&street, |s: String| s.to_uppercase(), person);
/// assert_eq!(moved.address.street, "MAIN ST");
/// ```
#[macro_export]
macro_rules! field {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::lens(
            |source: &$struct_type| ::core::clone::Clone::clone(&source.$field),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::lens(
            |source: &$struct_type<$($generic),+>| ::core::clone::Clone::clone(&source.$field),
            |mut source: $struct_type<$($generic),+>, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::lens(
            |source: &$struct_type| ::core::clone::Clone::clone(&source.$field),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}
