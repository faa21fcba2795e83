//! Analysis report types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Descriptive statistics for one numeric field.
///
/// `count` is the number of non-null numeric observations. `std` is the
/// sample standard deviation and is fixed at 0.0 when `count <= 1`.
/// Quartiles use truncating indexes (`sorted[n / 4]`, `sorted[3 * n / 4]`),
/// not interpolation; downstream consumers depend on that exact formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatSummary {
    pub mean: f64,
    pub median: f64,
    pub q1: f64,
    pub q3: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

/// Full correlation matrix: field -> field -> Pearson coefficient.
///
/// The diagonal is always exactly 1.0. Pairs with fewer than two valid joint
/// observations, or with zero variance on either side, carry 0.0.
pub type CorrelationMatrix = BTreeMap<String, BTreeMap<String, f64>>;

/// Descriptive-statistics report over one normalized collection.
///
/// `total_columns` is the field count of the first record (0 for an empty
/// batch), not a union over all records. `best_features` holds
/// `(field, |correlation|)` pairs sorted descending, truncated to the
/// requested top-N.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub total_records: usize,
    pub total_columns: usize,
    pub statistical_summary: BTreeMap<String, StatSummary>,
    pub best_features: Vec<(String, f64)>,
    pub correlation_matrix: CorrelationMatrix,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_round_trips_through_json() {
        let mut summary = BTreeMap::new();
        summary.insert(
            "year_of_birth".to_string(),
            StatSummary {
                mean: 1975.0,
                median: 1976.0,
                q1: 1960.0,
                q3: 1989.0,
                std: 12.5,
                min: 1881.0,
                max: 1998.0,
                count: 24,
            },
        );
        let report = AnalysisReport {
            total_records: 24,
            total_columns: 18,
            statistical_summary: summary,
            best_features: vec![("year_of_birth".to_string(), 0.41)],
            correlation_matrix: CorrelationMatrix::new(),
        };
        let json = serde_json::to_string(&report).expect("serialize report");
        let round: AnalysisReport = serde_json::from_str(&json).expect("deserialize report");
        assert_eq!(round, report);
    }

    #[test]
    fn best_features_serialize_as_pairs() {
        let report = AnalysisReport {
            best_features: vec![("wand_length".to_string(), 0.73)],
            ..AnalysisReport::default()
        };
        let json = serde_json::to_value(&report).expect("serialize report");
        assert_eq!(
            json["best_features"],
            serde_json::json!([["wand_length", 0.73]])
        );
    }
}
