//! Fluent sequences of updates.
//!
//! [`chain`] wraps a structure so several `set` and `over` calls can be
//! written one after another, in the order they are applied.
//!
//! # Examples
//!
//! ```
//! use optika::field;
//! use optika::optics::{chain, compose, index, traverse};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Order { customer: String, quantities: Vec<u32> }
//!
//! let order = Order { customer: "ada".into(), quantities: vec![1, 2, 3] };
//!
//! let updated = chain(order)
//!     .set(&field!(Order, customer), "alan".to_string())
//!     .over(&compose(field!(Order, quantities), traverse()), |q: u32| q * 10)
//!     .set(&compose(field!(Order, quantities), index(0)), 5)
//!     .build();
//!
//! assert_eq!(updated, Order { customer: "alan".into(), quantities: vec![5, 20, 30] });
//! ```

use super::optic::Optic;
use super::setter::{over, set};
use crate::typeclass::IdentityBrand;

/// A structure with pending updates applied eagerly.
///
/// Created by [`chain`]; finish with [`Chain::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a chain does nothing until `build` is called"]
pub struct Chain<S> {
    value: S,
}

/// Starts a chain of updates on `source`.
pub const fn chain<S>(source: S) -> Chain<S> {
    Chain { value: source }
}

impl<S> Chain<S> {
    /// Overwrites every focus of `optic` with `value`.
    pub fn set<O, T, A, B>(self, optic: &O, value: B) -> Chain<T>
    where
        O: Optic<IdentityBrand, S, T, A, B>,
        B: Clone,
    {
        chain(set(optic, value, self.value))
    }

    /// Replaces every focus of `optic` with `function` applied to it.
    pub fn over<O, T, A, B, G>(self, optic: &O, function: G) -> Chain<T>
    where
        O: Optic<IdentityBrand, S, T, A, B>,
        G: FnMut(A) -> B,
    {
        chain(over(optic, function, self.value))
    }

    /// Returns the updated structure.
    #[must_use]
    pub fn build(self) -> S {
        self.value
    }
}
