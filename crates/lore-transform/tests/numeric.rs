//! Properties of numeric coercion.

use proptest::prelude::*;
use serde_json::{Value, json};

use lore_transform::{parse_numeric, parse_numeric_str};

#[test]
fn coercion_is_total() {
    // Every input lands on a finite number or nothing; no value is ever
    // carried through as a non-numeric string.
    let inputs = [
        json!("1,234.5"),
        json!("unknown"),
        json!(null),
        json!(true),
        json!([1, 2]),
        json!("abc"),
        json!(3.25),
    ];
    for input in &inputs {
        if let Some(parsed) = parse_numeric(input) {
            assert!(parsed.is_finite());
        }
    }
}

#[test]
fn parse_is_idempotent_on_own_output() {
    for input in ["1980", "1,000", "9.5", "-3"] {
        let first = parse_numeric_str(input).expect("parses");
        let again = parse_numeric(&json!(first)).expect("reparses");
        assert_eq!(again, first);
    }
}

proptest! {
    #[test]
    fn idempotent_for_any_string(input in ".*") {
        // parse(parse(x)) == parse(x) whenever the first pass yields a number.
        if let Some(first) = parse_numeric_str(&input) {
            let reparsed = parse_numeric(&json!(first));
            prop_assert_eq!(reparsed, Some(first));
        }
    }

    #[test]
    fn finite_floats_round_trip(value in -1.0e12f64..1.0e12) {
        let parsed = parse_numeric(&json!(value));
        prop_assert_eq!(parsed, Some(value));
    }
}

#[test]
fn other_json_types_never_coerce() {
    assert_eq!(parse_numeric(&Value::Bool(false)), None);
    assert_eq!(parse_numeric(&json!({"length": "9.5"})), None);
}
