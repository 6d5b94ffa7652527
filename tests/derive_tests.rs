//! Tests for `#[derive(Lenses)]`.
//!
//! Derived lens constructors are ordinary optics: they work with every
//! accessor and compose with the built-in optics.

#![cfg(feature = "derive")]

use optika::Lenses;
use optika::optics::{FieldLens, compose, get, index, over, set, sum_of, to_array_of, traverse};
use rstest::rstest;

// =============================================================================
// Test Structures
// =============================================================================

/// Simple struct with basic field types
#[derive(Clone, PartialEq, Debug, Lenses)]
struct Point {
    x: i32,
    y: i32,
}

/// Struct with String field
#[derive(Clone, PartialEq, Debug, Lenses)]
struct Person {
    name: String,
    age: u32,
}

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Address {
    street: String,
    city: String,
    zip_code: String,
}

#[derive(Clone, PartialEq, Debug, Lenses)]
struct PersonWithAddress {
    name: String,
    address: Address,
}

/// Struct with generic type parameter
#[derive(Clone, PartialEq, Debug, Lenses)]
struct Container<T> {
    value: T,
    label: String,
}

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Team {
    members: Vec<Person>,
}

/// A handle that cannot be cloned.
#[derive(Debug, PartialEq)]
struct Connection(u16);

#[derive(Debug, PartialEq, Lenses)]
struct Session {
    user: String,
    #[lens(skip)]
    connection: Connection,
}

fn alice() -> PersonWithAddress {
    PersonWithAddress {
        name: "Alice".to_string(),
        address: Address {
            street: "Main St".to_string(),
            city: "Tokyo".to_string(),
            zip_code: "100-0001".to_string(),
        },
    }
}

// =============================================================================
// Basic Tests
// =============================================================================

#[rstest]
#[case(Point::x_lens(), 10)]
#[case(Point::y_lens(), 20)]
fn derived_lens_gets_its_field(#[case] lens: FieldLens<Point, i32>, #[case] expected: i32) {
    assert_eq!(get(&lens, Point { x: 10, y: 20 }), expected);
}

#[rstest]
fn derived_lens_sets_only_its_field() {
    let updated = set(&Point::x_lens(), 100, Point { x: 10, y: 20 });
    assert_eq!(updated, Point { x: 100, y: 20 });
}

#[rstest]
fn derived_lens_over() {
    let doubled = over(&Point::x_lens(), |x: i32| x * 2, Point { x: 10, y: 20 });
    assert_eq!(doubled.x, 20);
}

#[rstest]
fn derived_lens_on_string_field() {
    let person = Person {
        name: "Alice".to_string(),
        age: 30,
    };
    assert_eq!(get(&Person::name_lens(), person.clone()), "Alice");

    let updated = set(&Person::name_lens(), "Bob".to_string(), person);
    assert_eq!(updated.name, "Bob");
    assert_eq!(updated.age, 30);
}

// =============================================================================
// Composition Tests
// =============================================================================

#[rstest]
fn derived_lenses_compose() {
    let street = compose(PersonWithAddress::address_lens(), Address::street_lens());
    assert_eq!(get(&street, alice()), "Main St");

    let updated = set(&street, "Oak Ave".to_string(), alice());
    assert_eq!(updated.address.street, "Oak Ave");
    assert_eq!(updated.address.city, "Tokyo");
    assert_eq!(updated.address.zip_code, "100-0001");
}

#[rstest]
fn derived_lens_composes_with_traversal() {
    let team = Team {
        members: vec![
            Person {
                name: "Alice".to_string(),
                age: 30,
            },
            Person {
                name: "Bob".to_string(),
                age: 41,
            },
        ],
    };
    let ages = compose(Team::members_lens(), compose(traverse(), Person::age_lens()));
    assert_eq!(to_array_of(&ages, team.clone()), vec![30, 41]);
    assert_eq!(sum_of(&ages, team.clone()), 71);

    let older = over(&ages, |age: u32| age + 1, team);
    assert_eq!(older.members[1].age, 42);
}

#[rstest]
fn derived_lens_composes_with_index() {
    let team = Team {
        members: vec![Person {
            name: "Alice".to_string(),
            age: 30,
        }],
    };
    let first_name = compose(Team::members_lens(), compose(index(0), Person::name_lens()));
    assert_eq!(get(&first_name, team), "Alice");
}

// =============================================================================
// Generic Type Tests
// =============================================================================

#[rstest]
fn derived_lens_on_generic_struct() {
    let container = Container {
        value: 42,
        label: "answer".to_string(),
    };
    assert_eq!(get(&Container::<i32>::value_lens(), container.clone()), 42);
    assert_eq!(get(&Container::<i32>::label_lens(), container.clone()), "answer");

    let updated = set(&Container::<i32>::value_lens(), 100, container);
    assert_eq!(updated.value, 100);
    assert_eq!(updated.label, "answer");
}

#[rstest]
fn derived_lens_constructors_are_copy() {
    let lens = Point::x_lens();
    let copy = lens;
    assert_eq!(get(&lens, Point { x: 1, y: 2 }), get(&copy, Point { x: 1, y: 2 }));
}

// =============================================================================
// Skipped Fields
// =============================================================================

#[rstest]
fn skipped_non_clone_field_leaves_other_lenses_usable() {
    let session = Session {
        user: "ada".to_string(),
        connection: Connection(8080),
    };
    let renamed = set(&Session::user_lens(), "alan".to_string(), session);
    assert_eq!(renamed.user, "alan");
    assert_eq!(renamed.connection, Connection(8080));
}
