//! HTTP extraction from the source REST APIs.
//!
//! This crate is the extract stage of the pipeline: sequential GET requests
//! against a source API, pagination following, and a fixed inter-request
//! delay. Failures are never fatal — extraction keeps whatever was already
//! fetched and moves on (the pipeline treats a short batch as valid input).

mod client;
mod error;
mod source;

pub use client::{ApiClient, DEFAULT_TIMEOUT, ExtractorConfig, Page};
pub use error::{ExtractError, Result};
pub use source::Source;
