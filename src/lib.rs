//! # optika
//!
//! Composable, immutable data access through van Laarhoven optics.
//!
//! ## Overview
//!
//! An optic is a single value that focuses on zero or more parts of a larger
//! structure. The same optic can be used to read, overwrite, transform, or
//! summarise those parts, and optics compose with [`optics::compose`] into
//! deeper paths without losing that generality.
//!
//! - **Type Classes**: `Functor`, `Apply`, `Applicative`, `Contravariant`,
//!   `Settable`, plus the `Identity`, `Const` and `ApplyConst` carriers
//! - **Monoids**: `Sum`, `Product`, `First`, `Last`, `Endo`
//! - **Optics**: lenses, getters, setters, folds and traversals with
//!   `get`, `set`, `over`, `fold_map_of`, `foldr_of`, `to_list_of` and friends
//! - **Persistent Data Structures**: the immutable [`persistent::Stack`]
//! - **Dynamic Traversal**: a type-erased registry for traversing containers
//!   that are only known at runtime
//!
//! Out-of-range indices, missing keys and empty containers are not errors:
//! an optic over them simply has no focus. The only failures are the
//! runtime-dispatch errors in [`error::OpticError`], and the panic of
//! [`optics::get`] when asked to read through a missing
//! [`index`](optics::index) or [`key`](optics::key); use
//! [`optics::lookup`] there instead.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and carrier types
//! - `optics`: Optics and their accessors
//! - `persistent`: Persistent data structures
//! - `arc`: Use `Arc` instead of `Rc` inside persistent data structures
//! - `dynamic`: Runtime traversal registry (pulls in `tracing`)
//! - `derive`: `#[derive(Lenses)]`
//! - `serde`: Serialization for wrapper and persistent types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use optika::prelude::*;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Player {
//!     name: String,
//!     scores: Vec<u32>,
//! }
//!
//! let player = Player { name: "ada".to_string(), scores: vec![3, 5, 8] };
//! let scores = optika::field!(Player, scores);
//!
//! assert_eq!(get(&compose(scores, index(1)), player.clone()), 5);
//!
//! let doubled = over(&compose(scores, traverse()), |score: u32| score * 2, player);
//! assert_eq!(doubled.scores, vec![6, 10, 16]);
//! assert_eq!(sum_of(&compose(scores, traverse()), doubled), 32);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and accessor functions.
///
/// # Usage
///
/// ```rust
/// use optika::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;

    #[cfg(feature = "dynamic")]
    pub use crate::dynamic::*;

    pub use crate::error::OpticError;
}

pub mod error;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(feature = "dynamic")]
pub mod dynamic;

#[cfg(feature = "derive")]
pub use optika_derive::Lenses;
