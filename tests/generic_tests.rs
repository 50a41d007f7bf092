//! Tests for deriving partials of generic shapes.
//!
//! Generic parameters are carried over to the partial struct. A nested field
//! whose type is a parameter adds a `RecursivePartial` bound, so the same
//! wrapper can hold any shape.

use recursive_partial::{Complete, Overlay, RecursivePartial, combine_all};
use rstest::rstest;
use static_assertions::assert_type_eq_all;

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Clone, Debug, PartialEq, RecursivePartial)]
#[partial(derive(Clone, Debug, PartialEq))]
struct Database {
    url: String,
    pool_size: u32,
}

/// Generic wrapper with a nested parameter.
#[derive(Clone, Debug, PartialEq, RecursivePartial)]
struct Environment<T> {
    name: String,
    #[partial(nested)]
    settings: T,
}

/// Generic leaf: the parameter is not recursed into.
#[derive(Clone, Debug, PartialEq, RecursivePartial)]
#[partial(derive(Clone, Debug, PartialEq))]
struct Labeled<T> {
    label: String,
    value: T,
}

/// Lifetimes and const parameters.
#[derive(Clone, Debug, PartialEq, RecursivePartial)]
#[partial(derive(Debug, PartialEq))]
struct Window<'a, const N: usize> {
    title: &'a str,
    samples: [u8; N],
}

/// Where clauses are kept.
#[derive(Clone, Debug, PartialEq, RecursivePartial)]
#[partial(derive(Debug, PartialEq))]
struct Bounded<T>
where
    T: Copy,
{
    value: T,
}

assert_type_eq_all!(
    <Environment<Database> as RecursivePartial>::Partial,
    PartialEnvironment<Database>
);
assert_type_eq_all!(
    <PartialEnvironment<Database> as RecursivePartial>::Partial,
    PartialEnvironment<Database>
);
assert_type_eq_all!(<Labeled<Database> as RecursivePartial>::Partial, PartialLabeled<Database>);

fn production() -> Environment<Database> {
    Environment {
        name: "production".to_string(),
        settings: Database {
            url: "postgres://db".to_string(),
            pool_size: 16,
        },
    }
}

#[rstest]
fn generic_nested_field_holds_partial_of_parameter() {
    let partial = PartialEnvironment::<Database> {
        name: None,
        settings: Some(PartialDatabase {
            url: None,
            pool_size: Some(4),
        }),
    };

    let result = production().overlaid(partial);

    assert_eq!(result.settings.pool_size, 4);
    assert_eq!(result.settings.url, "postgres://db");
    assert_eq!(result.name, "production");
}

#[rstest]
fn generic_nested_partials_combine() {
    let mut base = PartialEnvironment::<Database> {
        name: Some("staging".to_string()),
        settings: Some(PartialDatabase {
            url: Some("postgres://staging".to_string()),
            pool_size: None,
        }),
    };
    base.overlay(PartialEnvironment {
        name: None,
        settings: Some(PartialDatabase {
            url: None,
            pool_size: Some(2),
        }),
    });

    assert_eq!(base.name.as_deref(), Some("staging"));
    assert_eq!(
        base.settings,
        Some(PartialDatabase {
            url: Some("postgres://staging".to_string()),
            pool_size: Some(2),
        })
    );
}

#[rstest]
fn generic_nested_completion_reports_paths() {
    let error = Environment::<Database>::try_complete(PartialEnvironment {
        name: Some("dev".to_string()),
        settings: None,
    })
    .unwrap_err();

    assert_eq!(error.missing, vec!["settings.url", "settings.pool_size"]);
}

#[rstest]
fn generic_leaf_is_replaced_wholesale() {
    let labeled = Labeled {
        label: "primary".to_string(),
        value: Database {
            url: "postgres://a".to_string(),
            pool_size: 1,
        },
    };
    let replacement = Database {
        url: "postgres://b".to_string(),
        pool_size: 8,
    };

    let result = labeled.overlaid(PartialLabeled {
        label: None,
        value: Some(replacement.clone()),
    });

    assert_eq!(result.value, replacement);
}

#[rstest]
fn generic_leaf_partials_overlay_each_other() {
    let mut partial = PartialLabeled::<u8> {
        label: Some("first".to_string()),
        value: None,
    };
    partial.overlay(PartialLabeled {
        label: None,
        value: Some(2),
    });

    assert_eq!(
        partial,
        PartialLabeled {
            label: Some("first".to_string()),
            value: Some(2),
        }
    );
}

#[rstest]
fn generic_leaf_layers_combine() {
    let combined = combine_all::<Labeled<u8>, _>([
        PartialLabeled {
            label: Some("first".to_string()),
            value: Some(1),
        },
        PartialLabeled {
            label: None,
            value: Some(2),
        },
    ]);

    let result = Labeled {
        label: "base".to_string(),
        value: 0,
    }
    .overlaid(combined);

    assert_eq!(
        result,
        Labeled {
            label: "first".to_string(),
            value: 2,
        }
    );
}

#[rstest]
fn lifetimes_and_const_generics_are_carried_over() {
    let window = Window {
        title: "main",
        samples: [1, 2, 3],
    };

    let result = window.overlaid(PartialWindow {
        title: Some("secondary"),
        samples: None,
    });

    assert_eq!(result.title, "secondary");
    assert_eq!(result.samples, [1, 2, 3]);
}

#[rstest]
fn where_clauses_are_kept() {
    let partial = Bounded { value: 7_u8 }.into_partial();

    assert_eq!(partial, PartialBounded { value: Some(7) });
}
