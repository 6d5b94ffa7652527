//! Integration tests for the accessor functions.
//!
//! Covers reading, writing and folding through lenses, getters, folds,
//! traversals and their compositions on nested data.

use std::collections::{BTreeMap, HashMap, VecDeque};

use optika::field;
use optika::optics::{
    all_of, any_of, at, chain, compose, filtering, fold_map_of, fold_of, folding, foldr_of, get, index, key,
    last_of, length_of, lookup, over, product_of, set, setting, sum_of, to, to_array_of, to_list_of, traverse,
    traverse_of,
};
use optika::typeclass::{First, OptionBrand, ResultBrand, Sum};
use rstest::rstest;

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
struct Inventory {
    warehouses: Vec<Warehouse>,
}

#[derive(Clone, Debug, PartialEq)]
struct Warehouse {
    name: String,
    stock: BTreeMap<String, u32>,
}

fn inventory() -> Inventory {
    Inventory {
        warehouses: vec![
            Warehouse {
                name: "north".to_string(),
                stock: BTreeMap::from([("bolts".to_string(), 40), ("nuts".to_string(), 0)]),
            },
            Warehouse {
                name: "south".to_string(),
                stock: BTreeMap::from([("bolts".to_string(), 2)]),
            },
        ],
    }
}

// =============================================================================
// Reference Examples
// =============================================================================

#[rstest]
fn sum_of_traverse() {
    assert_eq!(sum_of(&traverse(), vec![1, 2, 3, 4]), 10);
}

#[rstest]
fn foldr_of_empty_is_initial() {
    assert_eq!(foldr_of(&traverse(), |x: i32, y: i32| x + y, 0, Vec::<i32>::new()), 0);
}

#[rstest]
#[case(1, Some(2))]
#[case(9, None)]
fn lookup_by_index(#[case] position: usize, #[case] expected: Option<i32>) {
    assert_eq!(lookup(&index(position), vec![1, 2, 3, 4]), expected);
}

#[rstest]
fn nested_index_get_and_set() {
    let cell = compose(index(0), index(1));
    let grid = vec![vec![1, 2], vec![3, 4]];
    assert_eq!(get(&cell, grid.clone()), 2);
    assert_eq!(set(&cell, 5, grid), vec![vec![1, 5], vec![3, 4]]);
}

#[rstest]
fn over_filtered_evens() {
    let evens = compose(traverse(), filtering(|x: &i32| x % 2 == 0));
    assert_eq!(over(&evens, |x: i32| x * 2, vec![1, 2, 3, 4]), vec![1, 4, 3, 8]);
}

// =============================================================================
// Nested Data
// =============================================================================

#[rstest]
fn every_stock_count_through_composition() {
    let counts = compose(
        field!(Inventory, warehouses),
        compose(traverse(), compose(field!(Warehouse, stock), traverse())),
    );
    assert_eq!(to_array_of(&counts, inventory()), vec![40, 0, 2]);
    assert_eq!(sum_of(&counts, inventory()), 42);
    assert_eq!(length_of(&counts, inventory()), 3);
    assert!(any_of(&counts, |count: &u32| *count == 0, inventory()));
    assert!(!all_of(&counts, |count: &u32| *count > 0, inventory()));
}

#[rstest]
fn restock_one_item_everywhere_it_exists() {
    let bolts = compose(
        field!(Inventory, warehouses),
        compose(traverse(), compose(field!(Warehouse, stock), key("bolts".to_string()))),
    );
    let restocked = over(&bolts, |count: u32| count + 100, inventory());
    assert_eq!(restocked.warehouses[0].stock["bolts"], 140);
    assert_eq!(restocked.warehouses[1].stock["bolts"], 102);
    assert_eq!(restocked.warehouses[0].stock["nuts"], 0);
}

#[rstest]
fn at_inserts_where_key_is_missing() {
    let nuts = compose(
        field!(Inventory, warehouses),
        compose(index(1), compose(field!(Warehouse, stock), at("nuts".to_string()))),
    );
    assert_eq!(get(&nuts, inventory()), None);
    let updated = set(&nuts, Some(7), inventory());
    assert_eq!(updated.warehouses[1].stock.get("nuts"), Some(&7));
}

#[rstest]
fn getter_composed_with_traversal_is_a_fold() {
    let name_lengths = compose(
        field!(Inventory, warehouses),
        compose(traverse(), to(|warehouse: &Warehouse| warehouse.name.len())),
    );
    assert_eq!(to_list_of(&name_lengths, inventory()), VecDeque::from(vec![5, 5]));
}

#[rstest]
fn folding_lists_derived_values() {
    let item_names = folding(|warehouse: &Warehouse| warehouse.stock.keys().cloned().collect::<Vec<_>>());
    let names = compose(field!(Inventory, warehouses), compose(traverse(), item_names));
    assert_eq!(to_array_of(&names, inventory()), vec!["bolts", "nuts", "bolts"]);
    assert_eq!(last_of(&names, inventory()), Some("bolts".to_string()));
}

#[rstest]
fn setter_reaches_inside_a_closure_defined_structure() {
    let uppercase_names = compose(
        field!(Inventory, warehouses),
        setting(|update: &mut dyn FnMut(String) -> String, warehouses: Vec<Warehouse>| {
            warehouses
                .into_iter()
                .map(|warehouse| Warehouse {
                    name: update(warehouse.name),
                    ..warehouse
                })
                .collect::<Vec<_>>()
        }),
    );
    let shouted = over(&uppercase_names, |name: String| name.to_uppercase(), inventory());
    assert_eq!(shouted.warehouses[1].name, "SOUTH");
}

#[rstest]
fn chain_applies_updates_in_sequence() {
    let updated = chain(inventory())
        .set(
            &compose(field!(Inventory, warehouses), compose(index(0), field!(Warehouse, name))),
            "east".to_string(),
        )
        .over(
            &compose(
                field!(Inventory, warehouses),
                compose(traverse(), compose(field!(Warehouse, stock), traverse())),
            ),
            |count: u32| count * 2,
        )
        .build();
    assert_eq!(updated.warehouses[0].name, "east");
    assert_eq!(updated.warehouses[0].stock["bolts"], 80);
    assert_eq!(updated.warehouses[1].stock["bolts"], 4);
}

// =============================================================================
// Monoidal Folds
// =============================================================================

#[rstest]
fn fold_map_of_combines_left_to_right() {
    let spelled = fold_map_of(&traverse(), |c: char| c.to_string(), vec!['o', 'p', 't']);
    assert_eq!(spelled, "opt");
}

#[rstest]
fn fold_of_uses_the_focus_monoid() {
    let totals = vec![Sum::new(2), Sum::new(5)];
    assert_eq!(fold_of(&traverse(), totals).into_inner(), 7);
}

#[rstest]
fn fold_map_of_first_stops_at_first_match() {
    let first_big = fold_map_of(
        &traverse(),
        |x: i32| First::new((x > 10).then_some(x)),
        vec![3, 12, 40],
    );
    assert_eq!(first_big.into_inner(), Some(12));
}

#[rstest]
#[case(vec![], 1)]
#[case(vec![2, 3, 4], 24)]
fn product_of_traverse(#[case] numbers: Vec<i64>, #[case] expected: i64) {
    assert_eq!(product_of(&traverse(), numbers), expected);
}

#[rstest]
fn folds_over_a_hash_map_see_every_value() {
    let map = HashMap::from([("a", 1), ("b", 2), ("c", 3)]);
    let mut values = to_array_of(&traverse(), map.clone());
    values.sort_unstable();
    assert_eq!(values, vec![1, 2, 3]);
    assert_eq!(sum_of(&traverse(), map), 6);
}

// =============================================================================
// Effectful Traversal
// =============================================================================

#[rstest]
fn traverse_of_option_is_all_or_nothing() {
    let parse = |_: &OptionBrand, text: &str| text.parse::<i32>().ok();
    assert_eq!(traverse_of(&OptionBrand, &traverse(), parse, vec!["1", "2"]), Some(vec![1, 2]));
    assert_eq!(traverse_of(&OptionBrand, &traverse(), parse, vec!["1", "x"]), None);
}

#[rstest]
fn traverse_of_result_reports_first_error() {
    let brand = ResultBrand::<String>::new();
    let checked = traverse_of(
        &brand,
        &traverse(),
        |_: &ResultBrand<String>, age: i32| {
            if age >= 0 {
                Ok(age)
            } else {
                Err(format!("negative age {age}"))
            }
        },
        vec![30, -1, -2],
    );
    assert_eq!(checked, Err("negative age -1".to_string()));
}

#[rstest]
fn traverse_of_a_lens_runs_exactly_once() {
    let name = field!(Warehouse, name);
    let warehouse = inventory().warehouses[0].clone();
    let validated = traverse_of(
        &OptionBrand,
        &name,
        |_: &OptionBrand, name: String| (!name.is_empty()).then_some(name),
        warehouse.clone(),
    );
    assert_eq!(validated, Some(warehouse));
}
