//! Foreign-key extraction from resource URLs.
//!
//! The galactic API encodes relations as absolute resource locators ending in
//! a numeric path segment (`https://.../people/1/`). The trailing integer is
//! the stable identifier.

use serde_json::Value;

/// Extract the trailing integer path segment from a resource URL.
///
/// Returns `None` for empty, malformed, or non-numeric-trailing URLs.
pub fn id_from_url(url: &str) -> Option<i64> {
    let trimmed = url.trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    trimmed.rsplit('/').next()?.parse().ok()
}

/// Extract the trailing integer segment from a raw JSON value, when it is a
/// string URL.
pub fn id_from_value(value: &Value) -> Option<i64> {
    value.as_str().and_then(id_from_url)
}

/// Map a list-valued relation to foreign keys, preserving order.
///
/// Unparseable entries keep a `None` placeholder rather than being dropped:
/// position and count may matter to callers.
pub fn id_list(values: &[Value]) -> Vec<Option<i64>> {
    values.iter().map(id_from_value).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn trailing_segment_parses() {
        assert_eq!(id_from_url("https://swapi.dev/api/people/1/"), Some(1));
        assert_eq!(id_from_url("https://swapi.dev/api/planets/42"), Some(42));
    }

    #[test]
    fn malformed_urls_yield_none() {
        assert_eq!(id_from_url(""), None);
        assert_eq!(id_from_url("https://swapi.dev/api/people/"), None);
        assert_eq!(id_from_url("not-a-url"), None);
        assert_eq!(id_from_url("///"), None);
    }

    #[test]
    fn list_preserves_order_and_placeholders() {
        let values = vec![
            json!("https://swapi.dev/api/films/1/"),
            json!("https://swapi.dev/api/films/bad/"),
            json!(7),
            json!("https://swapi.dev/api/films/3/"),
        ];
        assert_eq!(id_list(&values), vec![Some(1), None, None, Some(3)]);
    }
}
