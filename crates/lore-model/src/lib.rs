//! Flat record types shared across the lore-etl pipeline.
//!
//! This crate defines the typed schema everything downstream of the raw JSON
//! boundary works with:
//!
//! - **character**: the wizarding-world character record with its nested wand
//! - **galaxy**: person, planet, and starship records with url-derived
//!   foreign keys
//! - **value**: the tagged `FieldValue` variant and the generic `Row` the
//!   statistics engine consumes
//! - **report**: per-field statistics, correlation matrix, and the final
//!   analysis report

pub mod character;
pub mod galaxy;
pub mod report;
pub mod value;

// === Records ===
pub use character::{Character, Wand};
pub use galaxy::{Person, Planet, Starship};

// === Analysis ===
pub use report::{AnalysisReport, CorrelationMatrix, StatSummary};
pub use value::{FieldValue, Row, ToRow};

/// Name of the identifier field, excluded from numeric column discovery.
pub const ID_FIELD: &str = "id";
