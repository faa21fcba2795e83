//! Error types for the document-store sink.

use thiserror::Error;

/// Errors that can occur while loading records into the sink.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The sink's private async runtime could not be started.
    #[error("failed to start sink runtime: {0}")]
    Runtime(#[source] std::io::Error),

    /// A driver-level database operation failed (connect, write, index).
    #[error("database operation failed: {0}")]
    Database(#[from] mongodb::error::Error),

    /// A record could not be encoded as a BSON document.
    #[error("failed to encode record: {0}")]
    Encode(#[from] mongodb::bson::ser::Error),
}

/// Result type for sink operations.
pub type Result<T> = std::result::Result<T, LoadError>;
