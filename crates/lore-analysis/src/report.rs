//! Report assembly.

use tracing::debug;

use lore_model::{AnalysisReport, Row};

use crate::correlation::correlation_matrix;
use crate::ranking::rank_features;
use crate::summary::summarize_fields;

/// Assemble the full analysis report for one record batch.
///
/// Pure composition of the statistics engine outputs. `total_columns` is the
/// field count of the first record — not a union across records — and 0 for
/// an empty batch. An empty batch produces a structurally complete report
/// with empty summary, ranking, and matrix rather than an error.
pub fn build_report(records: &[Row], target_field: &str, top_n: usize) -> AnalysisReport {
    let report = AnalysisReport {
        total_records: records.len(),
        total_columns: records.first().map_or(0, Row::len),
        statistical_summary: summarize_fields(records),
        best_features: rank_features(records, target_field, top_n),
        correlation_matrix: correlation_matrix(records),
    };
    debug!(
        total_records = report.total_records,
        total_columns = report.total_columns,
        summarized_fields = report.statistical_summary.len(),
        ranked_features = report.best_features.len(),
        "report assembled"
    );
    report
}
