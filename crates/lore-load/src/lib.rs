//! Document-store sink for normalized records.
//!
//! This crate is the load stage of the pipeline: idempotent upserts of flat
//! records into MongoDB keyed by the external identifier, plus collection and
//! index setup. Sink connectivity problems are surfaced as errors for the
//! caller to log and degrade on — the pipeline never requires the sink to be
//! reachable unless persistence was requested.

mod error;
mod indexes;
mod sink;

pub use error::{LoadError, Result};
pub use indexes::{COLLECTIONS, index_models_for};
pub use sink::{LoadSummary, MongoSink, SinkConfig};
