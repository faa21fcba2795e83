//! Blocking HTTP client for the source APIs.
//!
//! Extraction is strictly sequential: one request at a time, a fixed sleep
//! before each request to respect remote rate limits, and no retries. A
//! failed request ends pagination for that collection and whatever was
//! already accumulated is returned (partial-success policy).

use core::time::Duration;
use std::collections::BTreeMap;
use std::thread;

use serde_json::Value;
use tracing::{debug, error, info};

use crate::error::{ExtractError, Result};
use crate::source::Source;

/// User agent sent with every request.
const USER_AGENT_VALUE: &str = concat!("lore-etl/", env!("CARGO_PKG_VERSION"));

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Extraction configuration, passed in explicitly.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Base URL of the remote API, without a trailing slash.
    pub base_url: String,
    /// Fixed pause before each request.
    pub delay: Duration,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ExtractorConfig {
    /// Configuration for a source with its default base URL and delay.
    pub fn for_source(source: Source) -> Self {
        Self {
            base_url: source.default_base_url().to_string(),
            delay: source.default_delay(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// One page of a collection response.
#[derive(Debug)]
pub struct Page {
    /// Raw records carried by this page.
    pub records: Vec<Value>,
    /// URL of the next page, when the response is a paginated envelope.
    pub next: Option<String>,
}

/// Client for fetching raw JSON collections.
#[derive(Debug)]
pub struct ApiClient {
    client: reqwest::blocking::Client,
    config: ExtractorConfig,
}

impl ApiClient {
    /// Build a client for the given configuration.
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT_VALUE)
            .timeout(config.timeout)
            .build()
            .map_err(ExtractError::Client)?;
        Ok(Self { client, config })
    }

    /// Fetch every record of one collection, following pagination.
    ///
    /// Handles both response shapes: a bare JSON array (single page) and the
    /// `{results, next}` envelope (followed until `next` is null). On a
    /// request failure the error is logged and the records accumulated so
    /// far are returned.
    pub fn fetch_collection(&self, endpoint: &str) -> Vec<Value> {
        let mut records = Vec::new();
        let mut url = Some(format!("{}/{endpoint}/", self.config.base_url));

        while let Some(page_url) = url.take() {
            let page = match self.fetch_page(&page_url) {
                Ok(page) => page,
                Err(err) => {
                    error!(endpoint, url = %page_url, error = %err, "request failed, keeping partial results");
                    break;
                }
            };
            debug!(endpoint, url = %page_url, records = page.records.len(), "page fetched");
            records.extend(page.records);
            url = page.next;
        }

        info!(endpoint, records = records.len(), "collection extracted");
        records
    }

    /// Fetch all collections of a source, keyed by collection name.
    pub fn extract_all(&self, source: Source) -> BTreeMap<String, Vec<Value>> {
        info!(source = %source, base_url = %self.config.base_url, "starting extraction");
        let mut collections = BTreeMap::new();
        for endpoint in source.collections() {
            collections.insert((*endpoint).to_string(), self.fetch_collection(endpoint));
        }
        collections
    }

    /// Issue a single GET after the configured delay. No retries.
    fn fetch_page(&self, url: &str) -> Result<Page> {
        thread::sleep(self.config.delay);
        let response = self
            .client
            .get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|source| ExtractError::Request {
                url: url.to_string(),
                source,
            })?;
        let body: Value = response.json().map_err(|source| ExtractError::Request {
            url: url.to_string(),
            source,
        })?;
        page_from_body(body, url)
    }
}

/// Interpret a response body as a page of records.
fn page_from_body(body: Value, url: &str) -> Result<Page> {
    match body {
        Value::Array(records) => Ok(Page {
            records,
            next: None,
        }),
        Value::Object(mut envelope) => {
            let records = match envelope.remove("results") {
                Some(Value::Array(records)) => records,
                _ => {
                    return Err(ExtractError::UnexpectedShape {
                        url: url.to_string(),
                        reason: "expected array or results envelope".to_string(),
                    });
                }
            };
            let next = envelope
                .get("next")
                .and_then(Value::as_str)
                .map(ToString::to_string);
            Ok(Page { records, next })
        }
        _ => Err(ExtractError::UnexpectedShape {
            url: url.to_string(),
            reason: "expected array or results envelope".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_array_is_a_single_page() {
        let page = page_from_body(json!([{"name": "a"}, {"name": "b"}]), "u").expect("page");
        assert_eq!(page.records.len(), 2);
        assert_eq!(page.next, None);
    }

    #[test]
    fn envelope_carries_next_url() {
        let body = json!({
            "count": 82,
            "next": "https://swapi.dev/api/people/?page=2",
            "results": [{"name": "Luke Skywalker"}]
        });
        let page = page_from_body(body, "u").expect("page");
        assert_eq!(page.records.len(), 1);
        assert_eq!(
            page.next.as_deref(),
            Some("https://swapi.dev/api/people/?page=2")
        );
    }

    #[test]
    fn envelope_null_next_ends_pagination() {
        let body = json!({"next": null, "results": []});
        let page = page_from_body(body, "u").expect("page");
        assert!(page.records.is_empty());
        assert_eq!(page.next, None);
    }

    #[test]
    fn scalar_body_is_rejected() {
        let error = page_from_body(json!(42), "u").unwrap_err();
        assert!(matches!(error, ExtractError::UnexpectedShape { .. }));
    }

    #[test]
    fn envelope_without_results_is_rejected() {
        let error = page_from_body(json!({"detail": "not found"}), "u").unwrap_err();
        assert!(matches!(error, ExtractError::UnexpectedShape { .. }));
    }
}
