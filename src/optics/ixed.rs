//! Index-based access to existing elements: [`index`] for sequences and
//! [`key`] for maps.
//!
//! The resulting optic focuses on the element at the given position or key
//! when it exists, and on nothing otherwise:
//!
//! - [`lookup`](super::lookup) returns `None` for a missing element,
//! - [`set`](super::set) and [`over`](super::over) leave the structure
//!   unchanged (no element is inserted),
//! - [`get`](super::get) reads the element directly. It assumes the element
//!   exists; see [`Index`] for what happens otherwise.
//!
//! # Examples
//!
//! ```
//! use optika::optics::{get, index, key, lookup, set};
//! use std::collections::HashMap;
//!
//! let scores = vec![10, 20, 30];
//! assert_eq!(get(&index(2), scores.clone()), 30);
//! assert_eq!(lookup(&index(3), scores.clone()), None);
//! assert_eq!(set(&index(0), 15, scores), vec![15, 20, 30]);
//!
//! let ages = HashMap::from([("ada", 36)]);
//! assert_eq!(lookup(&key("ada"), ages.clone()), Some(36));
//! assert_eq!(set(&key("bob"), 1, ages.clone()), ages);
//! ```

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

use super::optic::Optic;
use crate::typeclass::{Applicative, Const, ConstBrand, Functor};

/// A container whose existing elements can be addressed by `K`.
///
/// Only existing elements are reachable: `ix_set` on a missing key is a
/// no-op. See [`At`](super::At) for a lens that can insert and remove.
pub trait Ixed<K>: Sized {
    /// The addressed element.
    type Value;

    /// Returns a copy of the element at `key`, if present.
    fn ix_get(&self, key: &K) -> Option<Self::Value>;

    /// Replaces the element at `key`, if present.
    #[must_use]
    fn ix_set(self, key: &K, value: Self::Value) -> Self;
}

impl<T: Clone> Ixed<usize> for Vec<T> {
    type Value = T;

    fn ix_get(&self, position: &usize) -> Option<T> {
        self.get(*position).cloned()
    }

    fn ix_set(mut self, position: &usize, value: T) -> Self {
        if let Some(slot) = self.get_mut(*position) {
            *slot = value;
        }
        self
    }
}

impl<T: Clone> Ixed<usize> for VecDeque<T> {
    type Value = T;

    fn ix_get(&self, position: &usize) -> Option<T> {
        self.get(*position).cloned()
    }

    fn ix_set(mut self, position: &usize, value: T) -> Self {
        if let Some(slot) = self.get_mut(*position) {
            *slot = value;
        }
        self
    }
}

impl<K: Ord, V: Clone> Ixed<K> for BTreeMap<K, V> {
    type Value = V;

    fn ix_get(&self, key: &K) -> Option<V> {
        self.get(key).cloned()
    }

    fn ix_set(mut self, key: &K, value: V) -> Self {
        if let Some(slot) = self.get_mut(key) {
            *slot = value;
        }
        self
    }
}

impl<K: Eq + Hash, V: Clone, H: BuildHasher> Ixed<K> for HashMap<K, V, H> {
    type Value = V;

    fn ix_get(&self, key: &K) -> Option<V> {
        self.get(key).cloned()
    }

    fn ix_set(mut self, key: &K, value: V) -> Self {
        if let Some(slot) = self.get_mut(key) {
            *slot = value;
        }
        self
    }
}

/// An optic onto the element at a position or key.
///
/// Created by [`index`] and [`key`].
///
/// # Panics
///
/// Reading a missing element with [`get`](super::get) panics, since `get`
/// must produce a value and there is none. Use
/// [`lookup`](super::lookup) when the element may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Index<K> {
    key: K,
}

impl<K> Index<K> {
    /// Returns the position or key this optic addresses.
    pub const fn key(&self) -> &K {
        &self.key
    }
}

/// Focuses on the element at `position` of a sequence.
#[must_use]
pub const fn index(position: usize) -> Index<usize> {
    Index { key: position }
}

/// Focuses on the value stored under `key` in a map.
#[must_use]
pub const fn key<K>(key: K) -> Index<K> {
    Index { key }
}

impl<F, S, K> Optic<F, S, S, S::Value, S::Value> for Index<K>
where
    F: Applicative,
    S: Ixed<K>,
{
    fn run<H>(&self, brand: &F, handler: &mut H, source: S) -> F::Applied<S>
    where
        H: FnMut(&F, S::Value) -> F::Applied<S::Value>,
    {
        match source.ix_get(&self.key) {
            Some(focus) => brand.fmap(handler(brand, focus), |value| source.ix_set(&self.key, value)),
            None => brand.pure(source),
        }
    }
}

impl<R, S, K> Optic<ConstBrand<R>, S, S, S::Value, S::Value> for Index<K>
where
    S: Ixed<K>,
    K: Debug,
{
    fn run<H>(&self, brand: &ConstBrand<R>, handler: &mut H, source: S) -> Const<R, S>
    where
        H: FnMut(&ConstBrand<R>, S::Value) -> Const<R, S::Value>,
    {
        match source.ix_get(&self.key) {
            Some(focus) => brand.fmap(handler(brand, focus), |value| source.ix_set(&self.key, value)),
            None => panic!(
                "no element at {:?}; use `lookup` to read an element that may be absent",
                self.key
            ),
        }
    }
}
