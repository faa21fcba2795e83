//! Per-field descriptive statistics.

use std::collections::BTreeMap;

use lore_model::{Row, StatSummary};

use crate::columns::{discover_numeric_fields, numeric_observations};

/// Compute a [`StatSummary`] for every discovered numeric field.
///
/// Fields with zero non-null observations are omitted entirely; a summary
/// with `count: 0` is never emitted.
pub fn summarize_fields(records: &[Row]) -> BTreeMap<String, StatSummary> {
    let mut summaries = BTreeMap::new();
    for field in discover_numeric_fields(records) {
        let mut values = numeric_observations(records, &field);
        if values.is_empty() {
            continue;
        }
        values.sort_by(f64::total_cmp);
        summaries.insert(field, summarize_sorted(&values));
    }
    summaries
}

/// Summary of one ascending-sorted, non-empty observation sequence.
///
/// Quartiles use index truncation (`sorted[n / 4]`, `sorted[3 * n / 4]`)
/// rather than interpolation; existing report consumers depend on the exact
/// values this produces.
fn summarize_sorted(sorted: &[f64]) -> StatSummary {
    let n = sorted.len();
    let mean = sorted.iter().sum::<f64>() / n as f64;
    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };
    let std = if n <= 1 {
        0.0
    } else {
        let variance = sorted
            .iter()
            .map(|value| (value - mean).powi(2))
            .sum::<f64>()
            / (n as f64 - 1.0);
        variance.sqrt()
    };
    StatSummary {
        mean,
        median,
        q1: sorted[n / 4],
        q3: sorted[(3 * n) / 4],
        std,
        min: sorted[0],
        max: sorted[n - 1],
        count: n,
    }
}
