//! Property-based tests for Traversal laws.
//!
//! Traversal Laws:
//!
//! 1. **Identity Law**: Updating with the identity function yields the original.
//!    ```text
//!    over(traversal, |x| x, source) == source
//!    ```
//!
//! 2. **Fusion Law**: Consecutive updates equal a single composed update.
//!    ```text
//!    over(traversal, g, over(traversal, f, source)) == over(traversal, |x| g(f(x)), source)
//!    ```
//!
//! 3. **Composition Law**: Updating through a composed traversal equals
//!    updating through the outer traversal with an update through the inner.
//!    ```text
//!    over(compose(outer, inner), f, source) == over(outer, |x| over(inner, f, x), source)
//!    ```

#![forbid(unsafe_code)]

use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};
use std::fmt::Debug;

use optika::optics::{Optic, compose, filtering, index, key, length_of, over, set, to_array_of, traverse};
use optika::typeclass::{ApplyConstBrand, Endo, IdentityBrand, Sum};
use proptest::prelude::*;

fn increment(x: i32) -> i32 {
    x.wrapping_add(1)
}

fn double(x: i32) -> i32 {
    x.wrapping_mul(2)
}

fn check_traversal_laws<O, S>(traversal: &O, source: S) -> Result<(), TestCaseError>
where
    O: Optic<IdentityBrand, S, S, i32, i32>,
    S: Clone + PartialEq + Debug,
{
    prop_assert_eq!(over(traversal, |x: i32| x, source.clone()), source.clone());

    let twice = over(traversal, double, over(traversal, increment, source.clone()));
    let composed = over(traversal, |x: i32| double(increment(x)), source);
    prop_assert_eq!(twice, composed);
    Ok(())
}

// =============================================================================
// Container Traversals
// =============================================================================

proptest! {
    #[test]
    fn prop_vec_traversal_laws(elements in prop::collection::vec(any::<i32>(), 0..32)) {
        check_traversal_laws(&traverse(), elements)?;
    }

    #[test]
    fn prop_vec_deque_traversal_laws(elements in prop::collection::vec_deque(any::<i32>(), 0..32)) {
        let elements: VecDeque<i32> = elements;
        check_traversal_laws(&traverse(), elements)?;
    }

    #[test]
    fn prop_option_traversal_laws(element in prop::option::of(any::<i32>())) {
        check_traversal_laws(&traverse(), element)?;
    }

    #[test]
    fn prop_btree_map_traversal_laws(map in prop::collection::btree_map(any::<u8>(), any::<i32>(), 0..16)) {
        let map: BTreeMap<u8, i32> = map;
        check_traversal_laws(&traverse(), map)?;
    }

    #[test]
    fn prop_hash_map_traversal_laws(map in prop::collection::hash_map(any::<u8>(), any::<i32>(), 0..16)) {
        let map: HashMap<u8, i32> = map;
        check_traversal_laws(&traverse(), map)?;
    }

    /// Sets only satisfy the identity law: elements that become equal merge.
    #[test]
    fn prop_btree_set_traversal_identity(set in prop::collection::btree_set(any::<i32>(), 0..16)) {
        let set: BTreeSet<i32> = set;
        prop_assert_eq!(over(&traverse(), |x: i32| x, set.clone()), set);
    }

    #[cfg(feature = "persistent")]
    #[test]
    fn prop_stack_traversal_laws(elements in prop::collection::vec(any::<i32>(), 0..32)) {
        let stack: optika::persistent::Stack<i32> = elements.into_iter().collect();
        check_traversal_laws(&traverse(), stack)?;
    }
}

// =============================================================================
// Composition Law
// =============================================================================

proptest! {
    #[test]
    fn prop_nested_vec_composition_law(grid in prop::collection::vec(prop::collection::vec(any::<i32>(), 0..8), 0..8)) {
        let composed = over(&compose(traverse(), traverse()), increment, grid.clone());
        let nested = over(&traverse(), |row: Vec<i32>| over(&traverse(), increment, row), grid);
        prop_assert_eq!(composed, nested);
    }

    #[test]
    fn prop_option_of_map_composition_law(
        source in prop::option::of(prop::collection::btree_map(any::<u8>(), any::<i32>(), 0..8))
    ) {
        let composed = over(&compose(traverse(), traverse()), double, source.clone());
        let nested = over(&traverse(), |map: BTreeMap<u8, i32>| over(&traverse(), double, map), source);
        prop_assert_eq!(composed, nested);
    }

    #[test]
    fn prop_key_then_traverse_composition_law(
        map in prop::collection::btree_map(0_u8..4, prop::collection::vec(any::<i32>(), 0..4), 0..4),
        target in 0_u8..4
    ) {
        let composed = over(&compose(key(target), traverse()), increment, map.clone());
        let nested = over(&key(target), |row: Vec<i32>| over(&traverse(), increment, row), map);
        prop_assert_eq!(composed, nested);
    }

    #[test]
    fn prop_type_changing_composition_law(grid in prop::collection::vec(prop::collection::vec(any::<i32>(), 0..8), 0..8)) {
        let render = |x: i32| x.to_string();
        let composed = over(&compose(traverse(), traverse()), render, grid.clone());
        let nested = over(&traverse(), |row: Vec<i32>| over(&traverse(), render, row), grid);
        prop_assert_eq!(composed, nested);
    }
}

// =============================================================================
// Composed Traversals
// =============================================================================

proptest! {
    #[test]
    fn prop_nested_traversal_laws(grid in prop::collection::vec(prop::collection::vec(any::<i32>(), 0..8), 0..8)) {
        check_traversal_laws(&compose(traverse(), traverse()), grid)?;
    }

    #[test]
    fn prop_index_traversal_laws(elements in prop::collection::vec(any::<i32>(), 0..8), position in 0_usize..10) {
        check_traversal_laws(&index(position), elements)?;
    }

    #[test]
    fn prop_key_then_traverse_laws(
        map in prop::collection::btree_map(0_u8..4, prop::collection::vec(any::<i32>(), 0..4), 0..4),
        target in 0_u8..4
    ) {
        check_traversal_laws(&compose(key(target), traverse()), map)?;
    }

    /// The predicate looks at a part of the focus that the update leaves alone.
    #[test]
    fn prop_filtered_traversal_laws(pairs in prop::collection::vec(any::<(bool, i32)>(), 0..16)) {
        let flagged = compose(
            traverse(),
            compose(filtering(|pair: &(bool, i32)| pair.0), optika::optics::pair_second()),
        );
        check_traversal_laws(&flagged, pairs)?;
    }

    #[test]
    fn prop_traversal_preserves_length(elements in prop::collection::vec(any::<i32>(), 0..32)) {
        let length = elements.len();
        let updated = over(&traverse(), increment, elements);
        prop_assert_eq!(length_of(&traverse(), updated), length);
    }

    #[test]
    fn prop_set_equals_over_with_constant(elements in prop::collection::vec(any::<i32>(), 0..32), value in any::<i32>()) {
        let via_set = set(&traverse(), value, elements.clone());
        let via_over = over(&traverse(), |_: i32| value, elements);
        prop_assert_eq!(via_set, via_over);
    }

    #[test]
    fn prop_to_array_of_follows_iteration_order(map in prop::collection::btree_map(any::<i8>(), any::<i32>(), 0..16)) {
        let map: BTreeMap<i8, i32> = map;
        let expected: Vec<i32> = map.values().copied().collect();
        prop_assert_eq!(to_array_of(&traverse(), map), expected);
    }
}

static_assertions::assert_impl_all!(
    optika::optics::Each: Optic<ApplyConstBrand<Sum<usize>>, Vec<i32>, Vec<i32>, i32, i32>,
    Optic<ApplyConstBrand<Endo<'static, i32>>, Vec<i32>, Vec<i32>, i32, i32>
);
