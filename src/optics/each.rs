//! [`Traversable`] implementations for standard containers.
//!
//! These are what make [`traverse`](super::traverse) work on ordinary
//! collections.
//!
//! | Container | Shape | Foci |
//! |-----------|-------|------|
//! | [`Vec<T>`], [`VecDeque<T>`] | Indexed | every element, front to back |
//! | [`BTreeSet<T>`] | Indexed | every element, ascending |
//! | [`Option<T>`] | Optional | the contained value, if any |
//! | [`BTreeMap<K, V>`] | Keyed | every value, by ascending key |
//! | [`HashMap<K, V>`] | Keyed | every value, in iteration order |
//! | `Stack<T>` | Indexed | every element, top to bottom |
//!
//! Rebuilding a set from modified elements may merge elements that became
//! equal.
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//! use optika::optics::{over, to_array_of, traverse};
//!
//! let stock = BTreeMap::from([("apples", 3), ("pears", 0)]);
//!
//! assert_eq!(to_array_of(&traverse(), stock.clone()), vec![3, 0]);
//!
//! let restocked = over(&traverse(), |count: i32| count + 10, stock);
//! assert_eq!(restocked, BTreeMap::from([("apples", 13), ("pears", 10)]));
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque, btree_map, btree_set, hash_map};
use std::hash::{BuildHasher, Hash};
use std::iter::Enumerate;

use super::traversal::{Rebuild, Shape, Traversable};

// =============================================================================
// Sequences
// =============================================================================

impl<T> Traversable for Vec<T> {
    type Key = usize;
    type Item = T;
    type Entries = Enumerate<std::vec::IntoIter<T>>;

    fn shape(&self) -> Shape {
        Shape::Indexed
    }
}

impl<T, B> Rebuild<B> for Vec<T> {
    type Output = Vec<B>;
    type Builder = Vec<B>;

    fn into_parts(self) -> (Vec<B>, Self::Entries) {
        (Vec::with_capacity(self.len()), self.into_iter().enumerate())
    }

    fn rebuild(mut builder: Vec<B>, _position: usize, item: B) -> Vec<B> {
        builder.push(item);
        builder
    }

    fn finish(builder: Vec<B>) -> Vec<B> {
        builder
    }
}

impl<T> Traversable for VecDeque<T> {
    type Key = usize;
    type Item = T;
    type Entries = Enumerate<std::collections::vec_deque::IntoIter<T>>;

    fn shape(&self) -> Shape {
        Shape::Indexed
    }
}

impl<T, B> Rebuild<B> for VecDeque<T> {
    type Output = VecDeque<B>;
    type Builder = VecDeque<B>;

    fn into_parts(self) -> (VecDeque<B>, Self::Entries) {
        (VecDeque::with_capacity(self.len()), self.into_iter().enumerate())
    }

    fn rebuild(mut builder: VecDeque<B>, _position: usize, item: B) -> VecDeque<B> {
        builder.push_back(item);
        builder
    }

    fn finish(builder: VecDeque<B>) -> VecDeque<B> {
        builder
    }
}

impl<T> Traversable for BTreeSet<T> {
    type Key = usize;
    type Item = T;
    type Entries = Enumerate<btree_set::IntoIter<T>>;

    fn shape(&self) -> Shape {
        Shape::Indexed
    }
}

impl<T, B: Ord> Rebuild<B> for BTreeSet<T> {
    type Output = BTreeSet<B>;
    type Builder = BTreeSet<B>;

    fn into_parts(self) -> (BTreeSet<B>, Self::Entries) {
        (BTreeSet::new(), self.into_iter().enumerate())
    }

    fn rebuild(mut builder: BTreeSet<B>, _position: usize, item: B) -> BTreeSet<B> {
        builder.insert(item);
        builder
    }

    fn finish(builder: BTreeSet<B>) -> BTreeSet<B> {
        builder
    }
}

// =============================================================================
// Option
// =============================================================================

impl<T> Traversable for Option<T> {
    type Key = ();
    type Item = T;
    type Entries = std::option::IntoIter<((), T)>;

    fn shape(&self) -> Shape {
        Shape::Optional
    }
}

impl<T, B> Rebuild<B> for Option<T> {
    type Output = Option<B>;
    type Builder = Option<B>;

    fn into_parts(self) -> (Option<B>, Self::Entries) {
        (None, self.map(|item| ((), item)).into_iter())
    }

    fn rebuild(_builder: Option<B>, (): (), item: B) -> Option<B> {
        Some(item)
    }

    fn finish(builder: Option<B>) -> Option<B> {
        builder
    }
}

// =============================================================================
// Maps
// =============================================================================

impl<K, V> Traversable for BTreeMap<K, V> {
    type Key = K;
    type Item = V;
    type Entries = btree_map::IntoIter<K, V>;

    fn shape(&self) -> Shape {
        Shape::Keyed
    }
}

impl<K: Ord, V, B> Rebuild<B> for BTreeMap<K, V> {
    type Output = BTreeMap<K, B>;
    type Builder = BTreeMap<K, B>;

    fn into_parts(self) -> (BTreeMap<K, B>, Self::Entries) {
        (BTreeMap::new(), self.into_iter())
    }

    fn rebuild(mut builder: BTreeMap<K, B>, key: K, value: B) -> BTreeMap<K, B> {
        builder.insert(key, value);
        builder
    }

    fn finish(builder: BTreeMap<K, B>) -> BTreeMap<K, B> {
        builder
    }
}

impl<K, V, H> Traversable for HashMap<K, V, H> {
    type Key = K;
    type Item = V;
    type Entries = hash_map::IntoIter<K, V>;

    fn shape(&self) -> Shape {
        Shape::Keyed
    }
}

impl<K, V, H, B> Rebuild<B> for HashMap<K, V, H>
where
    K: Eq + Hash,
    H: BuildHasher + Clone,
{
    type Output = HashMap<K, B, H>;
    type Builder = HashMap<K, B, H>;

    fn into_parts(self) -> (HashMap<K, B, H>, Self::Entries) {
        let builder = HashMap::with_capacity_and_hasher(self.len(), self.hasher().clone());
        (builder, self.into_iter())
    }

    fn rebuild(mut builder: HashMap<K, B, H>, key: K, value: B) -> HashMap<K, B, H> {
        builder.insert(key, value);
        builder
    }

    fn finish(builder: HashMap<K, B, H>) -> HashMap<K, B, H> {
        builder
    }
}

// =============================================================================
// Persistent Data Structures
// =============================================================================

#[cfg(feature = "persistent")]
mod persistent_implementations {
    use std::iter::Enumerate;

    use super::{Rebuild, Shape, Traversable};
    use crate::persistent::{Stack, StackIntoIter};

    impl<T: Clone> Traversable for Stack<T> {
        type Key = usize;
        type Item = T;
        type Entries = Enumerate<StackIntoIter<T>>;

        fn shape(&self) -> Shape {
            Shape::Indexed
        }
    }

    impl<T: Clone, B> Rebuild<B> for Stack<T> {
        type Output = Stack<B>;
        type Builder = Vec<B>;

        fn into_parts(self) -> (Vec<B>, Self::Entries) {
            (Vec::with_capacity(self.len()), self.into_iter().enumerate())
        }

        fn rebuild(mut builder: Vec<B>, _position: usize, item: B) -> Vec<B> {
            builder.push(item);
            builder
        }

        fn finish(builder: Vec<B>) -> Stack<B> {
            builder.into_iter().collect()
        }
    }
}
