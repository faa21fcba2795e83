//! Numeric column discovery.

use std::collections::BTreeSet;

use lore_model::{FieldValue, ID_FIELD, Row};

/// Discover the numeric fields of a record batch.
///
/// A field qualifies when at least one record carries a `Number`-tagged value
/// for it. Booleans never qualify (they carry their own tag), and the
/// identifier field is always excluded. The result is lexicographically
/// sorted so downstream ordering is deterministic.
pub fn discover_numeric_fields(records: &[Row]) -> Vec<String> {
    let mut fields = BTreeSet::new();
    for row in records {
        for (name, value) in row {
            if name == ID_FIELD {
                continue;
            }
            if matches!(value, FieldValue::Number(_)) {
                fields.insert(name.clone());
            }
        }
    }
    fields.into_iter().collect()
}

/// Collect the non-null numeric observations of one field, in record order.
pub(crate) fn numeric_observations(records: &[Row], field: &str) -> Vec<f64> {
    records
        .iter()
        .filter_map(|row| row.get(field).and_then(FieldValue::as_number))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(entries: &[(&str, FieldValue)]) -> Row {
        entries
            .iter()
            .map(|(name, value)| ((*name).to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn identifier_is_never_discovered() {
        let records = vec![row(&[
            ("id", FieldValue::Number(1.0)),
            ("height", FieldValue::Number(172.0)),
        ])];
        assert_eq!(discover_numeric_fields(&records), vec!["height"]);
    }

    #[test]
    fn booleans_are_never_discovered() {
        let records = vec![row(&[
            ("wizard", FieldValue::Bool(true)),
            ("year_of_birth", FieldValue::Number(1980.0)),
        ])];
        assert_eq!(discover_numeric_fields(&records), vec!["year_of_birth"]);
    }

    #[test]
    fn one_numeric_observation_is_enough() {
        let records = vec![
            row(&[("mass", FieldValue::Null)]),
            row(&[("mass", FieldValue::Number(77.0))]),
        ];
        assert_eq!(discover_numeric_fields(&records), vec!["mass"]);
    }

    #[test]
    fn result_is_sorted() {
        let records = vec![row(&[
            ("mass", FieldValue::Number(77.0)),
            ("height", FieldValue::Number(172.0)),
        ])];
        assert_eq!(discover_numeric_fields(&records), vec!["height", "mass"]);
    }
}
