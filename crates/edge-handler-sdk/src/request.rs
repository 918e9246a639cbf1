//! HTTP Request representation for handlers

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An inbound HTTP request as dispatched by the gateway.
///
/// The gateway serializes the request to JSON and frames it over the IPC
/// channel; `#[serde(default)]` on the optional fields keeps older gateways
/// compatible with newer handlers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    /// HTTP method (GET, POST, PUT, DELETE, etc.)
    pub method: String,

    /// Request path (e.g., "/probe")
    pub path: String,

    /// Query parameters
    #[serde(default)]
    pub query: HashMap<String, String>,

    /// HTTP headers
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Path parameters extracted from the route
    #[serde(default)]
    pub params: HashMap<String, String>,

    /// Client IP address
    #[serde(default)]
    pub client_ip: Option<String>,

    /// Request ID for tracing
    #[serde(default)]
    pub request_id: String,
}

impl Request {
    /// Get a header value (case-insensitive lookup).
    pub fn header(&self, key: &str) -> Option<&String> {
        let key_lower = key.to_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| k.to_lowercase() == key_lower)
            .map(|(_, v)| v)
    }

    /// Get a query parameter as a string reference.
    pub fn query_param(&self, key: &str) -> Option<&String> {
        self.query.get(key)
    }

    /// Check if the request method matches (case-insensitive).
    pub fn is_method(&self, method: &str) -> bool {
        self.method.eq_ignore_ascii_case(method)
    }
}

impl Default for Request {
    fn default() -> Self {
        Self {
            method: "GET".to_string(),
            path: "/".to_string(),
            query: HashMap::new(),
            headers: HashMap::new(),
            params: HashMap::new(),
            client_ip: None,
            request_id: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lookup_is_case_insensitive() {
        let mut req = Request::default();
        req.headers
            .insert("Content-Type".to_string(), "application/json".to_string());

        assert_eq!(
            req.header("content-type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(
            req.header("CONTENT-TYPE").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(req.header("accept"), None);
    }

    #[test]
    fn missing_optional_fields_deserialize_to_defaults() {
        let req: Request =
            serde_json::from_str(r#"{"method":"GET","path":"/"}"#).expect("minimal request");

        assert!(req.is_method("get"));
        assert!(req.query.is_empty());
        assert!(req.headers.is_empty());
        assert_eq!(req.client_ip, None);
        assert_eq!(req.request_id, "");
    }
}
