//! Lenses onto the presence of a key or element.
//!
//! [`at`] views a map entry as an `Option`: reading yields `Some(value)` or
//! `None`, writing `Some(value)` inserts or replaces, and writing `None`
//! removes. [`contains`] views set membership as a `bool`.
//!
//! Unlike [`key`](super::key), both are proper lenses with exactly one
//! focus, so [`get`](super::get) never fails on them.
//!
//! # Examples
//!
//! ```
//! use optika::optics::{at, contains, get, set};
//! use std::collections::{BTreeMap, BTreeSet};
//!
//! let config = BTreeMap::from([("mode", "fast")]);
//! assert_eq!(get(&at("mode"), config.clone()), Some("fast"));
//! assert_eq!(get(&at("color"), config.clone()), None);
//!
//! let without_mode = set(&at("mode"), None, config);
//! assert!(without_mode.is_empty());
//!
//! let tags = BTreeSet::from(["rust"]);
//! assert!(get(&contains("rust"), tags.clone()));
//! assert_eq!(set(&contains("optics"), true, tags).len(), 2);
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

use super::optic::Optic;
use crate::typeclass::Functor;

// =============================================================================
// At
// =============================================================================

/// A map whose entries can be read, inserted and removed by key.
pub trait At<K>: Sized {
    /// The stored value.
    type Value;

    /// Returns a copy of the value under `key`, if present.
    fn at_get(&self, key: &K) -> Option<Self::Value>;

    /// Inserts (`Some`) or removes (`None`) the value under `key`.
    #[must_use]
    fn at_set(self, key: &K, value: Option<Self::Value>) -> Self;
}

impl<K: Ord + Clone, V: Clone> At<K> for BTreeMap<K, V> {
    type Value = V;

    fn at_get(&self, key: &K) -> Option<V> {
        self.get(key).cloned()
    }

    fn at_set(mut self, key: &K, value: Option<V>) -> Self {
        match value {
            Some(value) => {
                self.insert(key.clone(), value);
            }
            None => {
                self.remove(key);
            }
        }
        self
    }
}

impl<K: Eq + Hash + Clone, V: Clone, H: BuildHasher> At<K> for HashMap<K, V, H> {
    type Value = V;

    fn at_get(&self, key: &K) -> Option<V> {
        self.get(key).cloned()
    }

    fn at_set(mut self, key: &K, value: Option<V>) -> Self {
        match value {
            Some(value) => {
                self.insert(key.clone(), value);
            }
            None => {
                self.remove(key);
            }
        }
        self
    }
}

/// A lens onto the optional value stored under a key.
///
/// Created by [`at`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AtKey<K> {
    key: K,
}

/// Focuses on the entry under `key` as an `Option`.
#[must_use]
pub const fn at<K>(key: K) -> AtKey<K> {
    AtKey { key }
}

impl<F, S, K> Optic<F, S, S, Option<S::Value>, Option<S::Value>> for AtKey<K>
where
    F: Functor,
    S: At<K>,
{
    fn run<H>(&self, brand: &F, handler: &mut H, source: S) -> F::Applied<S>
    where
        H: FnMut(&F, Option<S::Value>) -> F::Applied<Option<S::Value>>,
    {
        let focus = source.at_get(&self.key);
        brand.fmap(handler(brand, focus), |value| source.at_set(&self.key, value))
    }
}

// =============================================================================
// Contains
// =============================================================================

/// A set whose membership can be queried and toggled.
pub trait Membership<V>: Sized {
    /// Returns `true` if `value` is a member.
    fn has(&self, value: &V) -> bool;

    /// Adds (`true`) or removes (`false`) `value`.
    #[must_use]
    fn with_membership(self, value: &V, member: bool) -> Self;
}

impl<V: Ord + Clone> Membership<V> for BTreeSet<V> {
    fn has(&self, value: &V) -> bool {
        self.contains(value)
    }

    fn with_membership(mut self, value: &V, member: bool) -> Self {
        if member {
            self.insert(value.clone());
        } else {
            self.remove(value);
        }
        self
    }
}

impl<V: Eq + Hash + Clone, H: BuildHasher> Membership<V> for HashSet<V, H> {
    fn has(&self, value: &V) -> bool {
        self.contains(value)
    }

    fn with_membership(mut self, value: &V, member: bool) -> Self {
        if member {
            self.insert(value.clone());
        } else {
            self.remove(value);
        }
        self
    }
}

/// A lens onto whether a value is a member of a set.
///
/// Created by [`contains`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Contains<V> {
    value: V,
}

/// Focuses on the membership of `value`.
#[must_use]
pub const fn contains<V>(value: V) -> Contains<V> {
    Contains { value }
}

impl<F, S, V> Optic<F, S, S, bool, bool> for Contains<V>
where
    F: Functor,
    S: Membership<V>,
{
    fn run<H>(&self, brand: &F, handler: &mut H, source: S) -> F::Applied<S>
    where
        H: FnMut(&F, bool) -> F::Applied<bool>,
    {
        let member = source.has(&self.value);
        brand.fmap(handler(brand, member), |member| source.with_membership(&self.value, member))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{compose, get, lookup, over, set, traverse};
    use rstest::rstest;

    #[rstest]
    fn at_insert_then_get() {
        let map: HashMap<u8, String> = HashMap::new();
        let inserted = set(&at(7), Some("seven".to_string()), map);
        assert_eq!(get(&at(7), inserted), Some("seven".to_string()));
    }

    #[rstest]
    fn at_lens_laws_hold_for_present_and_absent_keys() {
        let map = BTreeMap::from([(1, 'a')]);
        for target in [1, 2] {
            let current = get(&at(target), map.clone());
            assert_eq!(set(&at(target), current, map.clone()), map);
            assert_eq!(get(&at(target), set(&at(target), Some('z'), map.clone())), Some('z'));
        }
    }

    #[rstest]
    fn at_then_traverse_reaches_present_value_only() {
        let map = BTreeMap::from([("x", 1)]);
        let present = compose(at("x"), traverse());
        let absent = compose(at("y"), traverse());
        assert_eq!(lookup(&present, map.clone()), Some(1));
        assert_eq!(lookup(&absent, map.clone()), None);
        assert_eq!(over(&absent, |v: i32| v + 1, map.clone()), map);
    }

    #[rstest]
    #[case(true, 3)]
    #[case(false, 1)]
    fn contains_toggles_membership(#[case] member: bool, #[case] expected_len: usize) {
        let set_of_ids: HashSet<u32> = HashSet::from([1, 2]);
        let toggled = set(&contains(if member { 9 } else { 2 }), member, set_of_ids);
        assert_eq!(toggled.len(), expected_len);
    }

    #[rstest]
    fn contains_reads_membership() {
        let letters = BTreeSet::from(['a', 'b']);
        assert!(get(&contains('a'), letters.clone()));
        assert!(!get(&contains('q'), letters));
    }
}
