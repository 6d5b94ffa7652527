//! Property-based tests for Lens laws.
//!
//! This module verifies that every shipped lens satisfies the required laws:
//!
//! - **GetPut Law**: `set(lens, get(lens, s), s) == s`
//! - **PutGet Law**: `get(lens, set(lens, v, s)) == v`
//! - **PutPut Law**: `set(lens, v2, set(lens, v1, s)) == set(lens, v2, s)`
//!
//! Using proptest, we generate random inputs to verify these laws across a
//! wide range of values.

#![cfg(feature = "derive")]

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt::Debug;

use optika::Lenses;
use optika::optics::{Optic, at, compose, contains, get, identity, index, key, pair_first, pair_second, set};
use optika::typeclass::{ConstBrand, IdentityBrand};
use proptest::prelude::*;

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Address {
    street: String,
    city: String,
}

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Person {
    name: String,
    address: Address,
}

fn address_strategy() -> impl Strategy<Value = Address> {
    ("[a-z]{0,8}", "[a-z]{0,8}").prop_map(|(street, city)| Address { street, city })
}

fn person_strategy() -> impl Strategy<Value = Person> {
    ("[a-z]{0,8}", address_strategy()).prop_map(|(name, address)| Person { name, address })
}

fn check_lens_laws<O, S, A>(lens: &O, source: S, first: A, second: A) -> Result<(), TestCaseError>
where
    O: Optic<ConstBrand<A>, S, S, A, A> + Optic<IdentityBrand, S, S, A, A>,
    S: Clone + PartialEq + Debug,
    A: Clone + PartialEq + Debug,
{
    let current = get(lens, source.clone());
    prop_assert_eq!(set(lens, current, source.clone()), source.clone());

    prop_assert_eq!(get(lens, set(lens, first.clone(), source.clone())), first.clone());

    let twice = set(lens, second.clone(), set(lens, first, source.clone()));
    prop_assert_eq!(twice, set(lens, second, source));
    Ok(())
}

// =============================================================================
// Field Lenses
// =============================================================================

proptest! {
    #[test]
    fn prop_field_lens_laws(x in any::<i32>(), y in any::<i32>(), v1 in any::<i32>(), v2 in any::<i32>()) {
        check_lens_laws(&optika::field!(Point, x), Point { x, y }, v1, v2)?;
        check_lens_laws(&Point::x_lens(), Point { x, y }, v2, v1)?;
        check_lens_laws(&Point::y_lens(), Point { x, y }, v1, v2)?;
    }

    #[test]
    fn prop_derived_lens_laws(person in person_strategy(), v1 in "[a-z]{0,8}", v2 in "[a-z]{0,8}") {
        check_lens_laws(&Person::name_lens(), person.clone(), v1.clone(), v2.clone())?;
        check_lens_laws(&Address::city_lens(), person.address.clone(), v1, v2)?;
    }

    #[test]
    fn prop_composed_lens_laws(person in person_strategy(), v1 in "[a-z]{0,8}", v2 in "[a-z]{0,8}") {
        let street = compose(Person::address_lens(), Address::street_lens());
        check_lens_laws(&street, person, v1, v2)?;
    }

    #[test]
    fn prop_nested_struct_lens_laws(person in person_strategy(), a1 in address_strategy(), a2 in address_strategy()) {
        check_lens_laws(&Person::address_lens(), person, a1, a2)?;
    }

    #[test]
    fn prop_identity_lens_laws(x in any::<i32>(), v1 in any::<i32>(), v2 in any::<i32>()) {
        check_lens_laws(&identity(), x, v1, v2)?;
    }
}

// =============================================================================
// Adapter Lenses
// =============================================================================

proptest! {
    #[test]
    fn prop_pair_lens_laws(pair in any::<(u8, bool)>(), f1 in any::<u8>(), f2 in any::<u8>(), s1 in any::<bool>(), s2 in any::<bool>()) {
        check_lens_laws(&pair_first(), pair, f1, f2)?;
        check_lens_laws(&pair_second(), pair, s1, s2)?;
    }

    #[test]
    fn prop_at_lens_laws(
        map in prop::collection::btree_map(0_u8..16, any::<i32>(), 0..8),
        target in 0_u8..16,
        v1 in prop::option::of(any::<i32>()),
        v2 in prop::option::of(any::<i32>())
    ) {
        check_lens_laws(&at(target), map, v1, v2)?;
    }

    #[test]
    fn prop_at_lens_laws_on_hash_map(
        map in prop::collection::hash_map("[a-c]", any::<i16>(), 0..4),
        target in "[a-c]",
        v1 in prop::option::of(any::<i16>()),
        v2 in prop::option::of(any::<i16>())
    ) {
        let map: HashMap<String, i16> = map;
        check_lens_laws(&at(target), map, v1, v2)?;
    }

    #[test]
    fn prop_contains_lens_laws(
        members in prop::collection::btree_set(0_u8..16, 0..8),
        target in 0_u8..16,
        m1 in any::<bool>(),
        m2 in any::<bool>()
    ) {
        let members: BTreeSet<u8> = members;
        check_lens_laws(&contains(target), members, m1, m2)?;
    }

    /// An index into a non-empty sequence behaves as a lens on that element.
    #[test]
    fn prop_index_lens_laws_when_present(
        numbers in prop::collection::vec(any::<i64>(), 1..16),
        seed in any::<prop::sample::Index>(),
        v1 in any::<i64>(),
        v2 in any::<i64>()
    ) {
        let position = seed.index(numbers.len());
        check_lens_laws(&index(position), numbers, v1, v2)?;
    }

    #[test]
    fn prop_key_lens_laws_when_present(v0 in any::<i32>(), v1 in any::<i32>(), v2 in any::<i32>()) {
        let map = BTreeMap::from([("k", v0)]);
        check_lens_laws(&key("k"), map, v1, v2)?;
    }
}
