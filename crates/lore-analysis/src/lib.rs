//! Descriptive statistics over normalized flat records.
//!
//! This crate is the analysis stage of the pipeline, four pure operations
//! over in-memory rows plus a report assembler:
//!
//! - **columns**: numeric column discovery via tag matching
//! - **summary**: per-field mean / median / quartiles / std / min / max
//! - **correlation**: the Pearson primitive and the pairwise matrix
//! - **ranking**: label encoding and top-N feature ranking against a
//!   categorical target
//! - **report**: composition into an [`lore_model::AnalysisReport`]

mod columns;
mod correlation;
mod ranking;
mod report;
mod summary;

pub use columns::discover_numeric_fields;
pub use correlation::{correlation_matrix, correlation_matrix_over, pearson};
pub use ranking::rank_features;
pub use report::build_report;
pub use summary::summarize_fields;
