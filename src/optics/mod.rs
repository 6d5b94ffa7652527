//! Optics for immutable data manipulation.
//!
//! An optic describes where the foci of a structure are; an accessor
//! decides what to do with them. Every optic is a single function run under
//! a functor brand (see [`Optic`]), and what an optic can be used for follows
//! from the brands it runs under.
//!
//! # Optics Hierarchy
//!
//! ```text
//! Lens      = Getter + Traversal     exactly one focus
//! Traversal = Fold   + Setter        any number of foci, read and written
//! Getter    <: Fold                  one focus, read only
//! Fold                               any number of foci, read only
//! Setter                             any number of foci, write only
//! ```
//!
//! # Available Optics
//!
//! - [`lens`], [`field!`](crate::field), [`pair_first`], [`pair_second`],
//!   [`at`], [`contains`]: lenses
//! - [`to`]: getters
//! - [`traverse`], [`index`], [`key`], [`filtering`]: traversals
//! - [`folding`]: folds
//! - [`setting`]: setters
//! - [`compose`], [`identity`]: composition and its unit
//!
//! # Missing Elements
//!
//! [`index`] and [`key`] are affine traversals, not lenses: they have zero
//! or one focus. A missing position or key is not an error. `set` and
//! `over` leave the structure unchanged and the folds see no focus, so
//! [`lookup`] returns `None`. [`get`] is the one exception: it requires
//! exactly one focus and panics, naming the position, when the element is
//! absent, like slice indexing.
//!
//! ```should_panic
//! use optika::optics::{get, index};
//!
//! get(&index(3), vec![1, 2, 3]);
//! ```
//!
//! # Example
//!
//! ```
//! use optika::field;
//! use optika::optics::{compose, get, lookup, over, traverse, index};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, addresses: Vec<Address> }
//!
//! let person = Person {
//!     name: "Alice".to_string(),
//!     addresses: vec![
//!         Address { street: "Main St".to_string(), city: "Tokyo".to_string() },
//!         Address { street: "Oak Ave".to_string(), city: "Osaka".to_string() },
//!     ],
//! };
//!
//! let cities = compose(field!(Person, addresses), compose(traverse(), field!(Address, city)));
//! let second_street = compose(field!(Person, addresses), compose(index(1), field!(Address, street)));
//!
//! assert_eq!(get(&second_street, person.clone()), "Oak Ave");
//! assert_eq!(lookup(&cities, person.clone()), Some("Tokyo".to_string()));
//!
//! let shouting = over(&cities, |city: String| city.to_uppercase(), person);
//! assert_eq!(shouting.addresses[1].city, "OSAKA");
//! assert_eq!(shouting.name, "Alice");
//! ```

mod at;
mod chain;
pub mod each;
mod filtered;
mod fold;
mod getter;
mod ixed;
mod lens;
mod optic;
mod optics_compose;
mod setter;
mod standard_optics;
mod traversal;

pub use optic::Optic;

// Re-export lens construction
pub use lens::FieldLens;
pub use lens::Lens;
pub use lens::lens;

// Re-export getters and setters with their accessors
pub use getter::To;
pub use getter::get;
pub use getter::to;
pub use setter::Setting;
pub use setter::over;
pub use setter::set;
pub use setter::setting;

// Re-export folds and fold accessors
pub use fold::Folding;
pub use fold::all_of;
pub use fold::any_of;
pub use fold::fold_map_of;
pub use fold::fold_of;
pub use fold::folding;
pub use fold::foldr_of;
pub use fold::last_of;
pub use fold::length_of;
pub use fold::lookup;
pub use fold::product_of;
pub use fold::sum_of;
pub use fold::to_array_of;
pub use fold::to_list_of;
#[cfg(feature = "persistent")]
pub use fold::to_stack_of;

// Re-export traversals
pub use filtered::Filtering;
pub use filtered::filtering;
pub use traversal::Each;
pub use traversal::Rebuild;
pub use traversal::Shape;
pub use traversal::Traversable;
pub use traversal::traverse;
pub use traversal::traverse_container;
pub use traversal::traverse_of;

// Re-export adapters
pub use at::At;
pub use at::AtKey;
pub use at::Contains;
pub use at::Membership;
pub use at::at;
pub use at::contains;
pub use ixed::Index;
pub use ixed::Ixed;
pub use ixed::index;
pub use ixed::key;
pub use standard_optics::PairFirst;
pub use standard_optics::PairSecond;
pub use standard_optics::pair_first;
pub use standard_optics::pair_second;

// Re-export composition
pub use chain::Chain;
pub use chain::chain;
pub use optics_compose::Composed;
pub use optics_compose::Whole;
pub use optics_compose::compose;
pub use optics_compose::identity;
