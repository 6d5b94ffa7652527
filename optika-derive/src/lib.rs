//! Derive macros for optika lenses.
//!
//! # Available Derive Macros
//!
//! - [`Lenses`]: Generates a lens constructor for every field of a struct
//!
//! # Example
//!
//! ```rust,ignore
//! use optika::Lenses;
//! use optika::optics::{get, set};
//!
//! #[derive(Clone, Lenses)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! // Generated methods:
//! // - Point::x_lens() -> FieldLens<Point, i32>
//! // - Point::y_lens() -> FieldLens<Point, i32>
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(get(&Point::x_lens(), point.clone()), 10);
//! assert_eq!(set(&Point::y_lens(), 0, point).y, 0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;

use proc_macro::TokenStream;

/// Derive macro generating a lens for each field of a struct.
///
/// For each field `foo` of type `T`, generates an associated function
/// `foo_lens()` returning an `optika::optics::FieldLens<Self, T>`.
///
/// # Requirements
///
/// - The struct must have named fields
/// - Every field type must implement `Clone`, since reading through a lens
///   returns an owned copy of the field. Mark other fields with
///   `#[lens(skip)]` to leave them without a lens; an unmarked field that is
///   not `Clone` fails to compile at the derive
///
/// # Generated Code
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_lens() -> ::optika::optics::FieldLens<Self, T> { ... }
/// }
/// ```
///
/// # Example
///
/// ```rust,ignore
/// use optika::Lenses;
/// use optika::optics::{compose, get, over};
///
/// #[derive(Clone, Debug, PartialEq, Lenses)]
/// struct Address {
///     city: String,
/// }
///
/// #[derive(Clone, Debug, PartialEq, Lenses)]
/// struct Person {
///     name: String,
///     address: Address,
/// }
///
/// let city = compose(Person::address_lens(), Address::city_lens());
/// let person = Person { name: "Alice".into(), address: Address { city: "Tokyo".into() } };
///
/// assert_eq!(get(&city, person.clone()), "Tokyo");
/// assert_eq!(over(&city, |c: String| c.to_uppercase(), person).address.city, "TOKYO");
/// ```
#[proc_macro_derive(Lenses, attributes(lens))]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}
