//! Pearson correlation and the pairwise correlation matrix.

use std::collections::BTreeMap;

use lore_model::{CorrelationMatrix, FieldValue, Row};

use crate::columns::discover_numeric_fields;

/// Pearson correlation coefficient of two equal-length sequences.
///
/// Returns 0.0 when fewer than two observations are available, when the
/// lengths differ, or when either sequence has zero variance (the
/// denominator would be zero) — a defined default, not "no correlation
/// computed".
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.len() < 2 {
        return 0.0;
    }
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut numerator = 0.0;
    let mut sum_sq_x = 0.0;
    let mut sum_sq_y = 0.0;
    for (value_x, value_y) in x.iter().zip(y) {
        let dx = value_x - mean_x;
        let dy = value_y - mean_y;
        numerator += dx * dy;
        sum_sq_x += dx * dx;
        sum_sq_y += dy * dy;
    }

    let denominator = (sum_sq_x * sum_sq_y).sqrt();
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Pairwise correlation matrix over all discovered numeric fields.
pub fn correlation_matrix(records: &[Row]) -> CorrelationMatrix {
    correlation_matrix_over(records, &discover_numeric_fields(records))
}

/// Pairwise correlation matrix over an explicit field list.
///
/// Each pair is joined independently: a record contributes to the (a, b)
/// entry only when both fields are non-null numeric in that record. This is
/// deliberately more permissive than one global complete-case join. The
/// diagonal is pinned to 1.0 regardless of data availability.
pub fn correlation_matrix_over(records: &[Row], fields: &[String]) -> CorrelationMatrix {
    let mut matrix = CorrelationMatrix::new();
    for field_a in fields {
        let mut row = BTreeMap::new();
        for field_b in fields {
            let coefficient = if field_a == field_b {
                1.0
            } else {
                let (x, y) = joint_observations(records, field_a, field_b);
                pearson(&x, &y)
            };
            row.insert(field_b.clone(), coefficient);
        }
        matrix.insert(field_a.clone(), row);
    }
    matrix
}

/// Collect the jointly non-null numeric observations of two fields.
pub(crate) fn joint_observations(
    records: &[Row],
    field_a: &str,
    field_b: &str,
) -> (Vec<f64>, Vec<f64>) {
    let mut x = Vec::new();
    let mut y = Vec::new();
    for row in records {
        let value_a = row.get(field_a).and_then(FieldValue::as_number);
        let value_b = row.get(field_b).and_then(FieldValue::as_number);
        if let (Some(value_a), Some(value_b)) = (value_a, value_b) {
            x.push(value_a);
            y.push(value_b);
        }
    }
    (x, y)
}
