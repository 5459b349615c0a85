//! The JSON envelope returned by `/` and `/db-check`.

use std::collections::BTreeMap;

use chrono::{SecondsFormat, Utc};
use http::HeaderMap;
use serde::{Deserialize, Serialize};

/// Response body shared by the JSON endpoints.
///
/// Built fresh for each request. `headers` is only filled by the root handler
/// and is left out of the JSON entirely when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub version: String,
    /// RFC3339 time at which the envelope was built
    pub timestamp: String,
    pub hostname: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    pub db_status: String,
}

impl ResponseEnvelope {
    /// Creates an envelope stamped with the current time, with no hostname or headers.
    pub fn new(
        version: impl Into<String>,
        message: impl Into<String>,
        db_status: impl Into<String>,
    ) -> Self {
        Self {
            version: version.into(),
            timestamp: current_timestamp(),
            hostname: String::new(),
            message: message.into(),
            headers: BTreeMap::new(),
            db_status: db_status.into(),
        }
    }

    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = hostname.into();
        self
    }

    pub fn with_headers(mut self, headers: BTreeMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}

/// Current time as an RFC3339 string with second precision.
pub fn current_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Local host name, or an empty string if it cannot be resolved.
pub fn resolve_hostname() -> String {
    match hostname::get() {
        Ok(name) => name.to_string_lossy().into_owned(),
        Err(e) => {
            tracing::debug!(error = %e, "Could not resolve hostname");
            String::new()
        }
    }
}

/// Flatten request headers to canonical name -> first value.
pub fn first_header_values(headers: &HeaderMap) -> BTreeMap<String, String> {
    headers
        .keys()
        .filter_map(|name| {
            headers.get(name).map(|value| {
                (
                    canonical_header_name(name.as_str()),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
        })
        .collect()
}

/// Canonical header casing: `x-forwarded-for` becomes `X-Forwarded-For`.
///
/// The first letter and every letter following a `-` are uppercased, all
/// others lowercased.
pub fn canonical_header_name(name: &str) -> String {
    let mut upper = true;
    name.chars()
        .map(|c| {
            let mapped = if upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            };
            upper = c == '-';
            mapped
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn test_headers_omitted_when_empty() {
        let envelope = ResponseEnvelope::new("v1", "hello", "not checked");
        let json = serde_json::to_value(&envelope).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("headers"));
        for field in ["version", "timestamp", "hostname", "message", "db_status"] {
            assert!(object.contains_key(field), "missing field {field}");
        }
    }

    #[test]
    fn test_headers_serialized_when_present() {
        let mut headers = BTreeMap::new();
        headers.insert("Accept".to_string(), "*/*".to_string());
        let envelope = ResponseEnvelope::new("v1", "hello", "not checked").with_headers(headers);
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["headers"]["Accept"], "*/*");
    }

    #[test]
    fn test_timestamp_is_rfc3339() {
        let timestamp = current_timestamp();
        assert!(chrono::DateTime::parse_from_rfc3339(&timestamp).is_ok());
    }

    #[test]
    fn test_first_header_values_keeps_first() {
        let mut headers = HeaderMap::new();
        headers.append("x-forwarded-for", HeaderValue::from_static("10.0.0.1"));
        headers.append("x-forwarded-for", HeaderValue::from_static("10.0.0.2"));
        headers.insert("user-agent", HeaderValue::from_static("curl/8.0"));

        let flat = first_header_values(&headers);
        assert_eq!(flat.len(), 2);
        assert_eq!(flat["X-Forwarded-For"], "10.0.0.1");
        assert_eq!(flat["User-Agent"], "curl/8.0");
    }

    #[test]
    fn test_canonical_header_name() {
        assert_eq!(canonical_header_name("user-agent"), "User-Agent");
        assert_eq!(canonical_header_name("x-forwarded-for"), "X-Forwarded-For");
        assert_eq!(canonical_header_name("ACCEPT"), "Accept");
        assert_eq!(canonical_header_name("x-b3-traceid"), "X-B3-Traceid");
        assert_eq!(canonical_header_name("dnt"), "Dnt");
    }

    #[test]
    fn test_first_header_values_empty() {
        assert!(first_header_values(&HeaderMap::new()).is_empty());
    }
}
