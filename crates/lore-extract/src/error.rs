//! Error types for HTTP extraction.

use thiserror::Error;

/// Errors that can occur while talking to a source API.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The HTTP client could not be constructed.
    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// A request failed: network error, timeout, or non-2xx status.
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not the expected JSON shape.
    #[error("unexpected response shape from {url}: {reason}")]
    UnexpectedShape { url: String, reason: String },
}

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_error_display() {
        let error = ExtractError::UnexpectedShape {
            url: "https://example.test/api/people/".to_string(),
            reason: "expected array or results envelope".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "unexpected response shape from https://example.test/api/people/: \
             expected array or results envelope"
        );
    }
}
