//! Feature ranking against a categorical target.

use std::cmp::Ordering;

use lore_model::{FieldValue, Row};

use crate::columns::discover_numeric_fields;
use crate::correlation::pearson;

/// Rank numeric fields by absolute correlation with an encoded categorical
/// target.
///
/// The target's distinct values are label-encoded in first-seen record order.
/// The encoding order is arbitrary but deterministic for a fixed input, and
/// only the magnitude of the correlation is used. Records with a null target
/// are excluded from every field's pairing. Fields with fewer than two valid
/// pairs are omitted, not zero-filled. The result is sorted by absolute
/// correlation descending (stable, so ties keep the sorted discovery order)
/// and truncated to `top_n`.
pub fn rank_features(records: &[Row], target_field: &str, top_n: usize) -> Vec<(String, f64)> {
    let encoded = encode_target(records, target_field);

    let mut ranked = Vec::new();
    for field in discover_numeric_fields(records) {
        let mut x = Vec::new();
        let mut y = Vec::new();
        for (row, code) in records.iter().zip(&encoded) {
            let value = row.get(&field).and_then(FieldValue::as_number);
            if let (Some(value), Some(code)) = (value, code) {
                x.push(value);
                y.push(*code);
            }
        }
        if x.len() < 2 {
            continue;
        }
        ranked.push((field, pearson(&x, &y).abs()));
    }

    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    ranked.truncate(top_n);
    ranked
}

/// Label-encode the target field: one code per distinct value, assigned in
/// first-seen order. Null targets stay `None`.
fn encode_target(records: &[Row], target_field: &str) -> Vec<Option<f64>> {
    let mut classes: Vec<&FieldValue> = Vec::new();
    let mut encoded = Vec::with_capacity(records.len());
    for row in records {
        let value = row.get(target_field).filter(|value| !value.is_null());
        let code = value.map(|value| {
            let position = classes
                .iter()
                .position(|class| *class == value)
                .unwrap_or_else(|| {
                    classes.push(value);
                    classes.len() - 1
                });
            position as f64
        });
        encoded.push(code);
    }
    encoded
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

    fn house(name: &str) -> FieldValue {
        FieldValue::Text(name.to_string())
    }

    #[test]
    fn encoding_is_first_seen_order() {
        let records = vec![
            row(&[("house", house("Gryffindor"))]),
            row(&[("house", house("Slytherin"))]),
            row(&[("house", house("Gryffindor"))]),
            row(&[("house", FieldValue::Null)]),
        ];
        let encoded = encode_target(&records, "house");
        assert_eq!(encoded, vec![Some(0.0), Some(1.0), Some(0.0), None]);
    }

    #[test]
    fn perfectly_separating_field_ranks_first() {
        // year separates the two houses exactly; length is noise.
        let records = vec![
            row(&[
                ("house", house("Gryffindor")),
                ("year", FieldValue::Number(1.0)),
                ("length", FieldValue::Number(9.0)),
            ]),
            row(&[
                ("house", house("Gryffindor")),
                ("year", FieldValue::Number(1.0)),
                ("length", FieldValue::Number(14.0)),
            ]),
            row(&[
                ("house", house("Slytherin")),
                ("year", FieldValue::Number(2.0)),
                ("length", FieldValue::Number(9.0)),
            ]),
            row(&[
                ("house", house("Slytherin")),
                ("year", FieldValue::Number(2.0)),
                ("length", FieldValue::Number(14.0)),
            ]),
        ];
        let ranked = rank_features(&records, "house", 5);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].0, "year");
        assert!((ranked[0].1 - 1.0).abs() < 1e-12);
        assert!(ranked[1].1 < 1e-12);
    }

    #[test]
    fn output_length_is_bounded_by_top_n_and_eligibility() {
        let records = vec![
            row(&[
                ("house", house("A")),
                ("year", FieldValue::Number(1.0)),
                ("sparse", FieldValue::Number(5.0)),
            ]),
            row(&[
                ("house", house("B")),
                ("year", FieldValue::Number(2.0)),
                ("sparse", FieldValue::Null),
            ]),
        ];
        // "sparse" has a single valid pair and is omitted entirely.
        let ranked = rank_features(&records, "house", 5);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].0, "year");

        let truncated = rank_features(&records, "house", 0);
        assert!(truncated.is_empty());
    }

    #[test]
    fn null_targets_are_excluded_from_pairings() {
        let records = vec![
            row(&[("house", house("A")), ("year", FieldValue::Number(1.0))]),
            row(&[("house", FieldValue::Null), ("year", FieldValue::Number(2.0))]),
            row(&[("house", house("B")), ("year", FieldValue::Number(3.0))]),
        ];
        let ranked = rank_features(&records, "house", 5);
        // Two valid pairs remain: (1, A) and (3, B).
        assert_eq!(ranked.len(), 1);
        assert!((ranked[0].1 - 1.0).abs() < 1e-12);
    }
}
