//! Numeric coercion for loosely-typed source values.
//!
//! Source APIs report numbers inconsistently: real JSON numbers, numeric
//! strings with thousands separators, and sentinel strings like "unknown".
//! Coercion is total: the result is either a finite number or `None`, never a
//! non-numeric string.

use serde_json::Value;

/// Sentinel strings that mean "no value", compared case-insensitively.
const MISSING_SENTINELS: [&str; 4] = ["unknown", "n/a", "none", ""];

/// Coerce a raw JSON value to a finite `f64`.
///
/// - `null` stays missing
/// - numbers pass through (non-finite values are rejected)
/// - strings are parsed after stripping thousands-separator commas; sentinel
///   strings ("unknown", "n/a", "none", "") are treated as missing
/// - any other JSON type is missing
pub fn parse_numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64().filter(|parsed| parsed.is_finite()),
        Value::String(text) => parse_numeric_str(text),
        _ => None,
    }
}

/// String half of [`parse_numeric`], usable on already-extracted text.
pub fn parse_numeric_str(value: &str) -> Option<f64> {
    if MISSING_SENTINELS.contains(&value.to_lowercase().as_str()) {
        return None;
    }
    let cleaned = value.replace(',', "");
    cleaned
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_pass_through() {
        assert_eq!(parse_numeric(&json!(1980)), Some(1980.0));
        assert_eq!(parse_numeric(&json!(-0.5)), Some(-0.5));
    }

    #[test]
    fn null_is_missing() {
        assert_eq!(parse_numeric(&Value::Null), None);
    }

    #[test]
    fn numeric_strings_parse() {
        assert_eq!(parse_numeric(&json!("1980")), Some(1980.0));
        assert_eq!(parse_numeric(&json!("9.5")), Some(9.5));
        assert_eq!(parse_numeric(&json!("-12.75")), Some(-12.75));
    }

    #[test]
    fn thousands_separators_are_stripped() {
        assert_eq!(parse_numeric(&json!("1,234,567")), Some(1_234_567.0));
        assert_eq!(parse_numeric(&json!("1,000")), Some(1000.0));
    }

    #[test]
    fn sentinel_strings_are_missing() {
        assert_eq!(parse_numeric(&json!("unknown")), None);
        assert_eq!(parse_numeric(&json!("UNKNOWN")), None);
        assert_eq!(parse_numeric(&json!("n/a")), None);
        assert_eq!(parse_numeric(&json!("none")), None);
        assert_eq!(parse_numeric(&json!("")), None);
    }

    #[test]
    fn garbage_strings_are_missing() {
        assert_eq!(parse_numeric(&json!("1-3")), None);
        assert_eq!(parse_numeric(&json!("19BBY")), None);
        assert_eq!(parse_numeric(&json!("12.34.56")), None);
    }

    #[test]
    fn non_scalar_types_are_missing() {
        assert_eq!(parse_numeric(&json!(true)), None);
        assert_eq!(parse_numeric(&json!(["10"])), None);
        assert_eq!(parse_numeric(&json!({"value": 10})), None);
    }

    #[test]
    fn non_finite_values_are_missing() {
        assert_eq!(parse_numeric(&json!("inf")), None);
        assert_eq!(parse_numeric(&json!("NaN")), None);
    }
}
