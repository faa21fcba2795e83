//! Normalization of raw API records into typed flat records.
//!
//! This crate is the transform stage of the pipeline:
//!
//! - **numeric**: total coercion of loosely-typed values to finite numbers
//! - **refs**: foreign-key extraction from resource URLs
//! - **character**: wizarding-domain normalization with the wizard-only gate
//! - **galaxy**: person / planet / starship normalization
//!
//! All normalizers are pure over already-materialized raw batches: one
//! output record per retained input record, input order preserved, malformed
//! records skipped with a log line rather than aborting the batch.

mod character;
mod galaxy;
mod numeric;
mod options;
mod refs;

// === Coercion primitives ===
pub use numeric::{parse_numeric, parse_numeric_str};
pub use refs::{id_from_url, id_list};

// === Normalizers ===
pub use character::normalize_characters;
pub use galaxy::{normalize_people, normalize_planets, normalize_starships};
pub use options::NormalizeOptions;
