//! The single outbound call to the upstream endpoint.

use crate::config::ProbeConfig;
use serde_json::Value;
use thiserror::Error;

/// Unified upstream failure carrying only the human-readable message.
///
/// Every way the outbound call can go wrong — DNS, connect, TLS, timeout,
/// non-2xx status, JSON decode — collapses into this one kind. The caller
/// gets no finer classification than the message text.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct UpstreamError(pub String);

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        Self(e.to_string())
    }
}

/// HTTP client bound to the configured upstream endpoint.
pub struct UpstreamClient {
    http: reqwest::Client,
    url: String,
}

impl UpstreamClient {
    /// Build a client with the configured timeout.
    ///
    /// The timeout covers the whole call, connect through body; there is no
    /// separate outer deadline and no retry.
    pub fn new(config: &ProbeConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            url: config.upstream_url.clone(),
        })
    }

    /// Issue one GET to the upstream and parse the body as JSON.
    ///
    /// Non-2xx statuses are failures, same as network-level errors.
    pub async fn fetch(&self) -> Result<Value, UpstreamError> {
        let response = self.http.get(&self.url).send().await?;
        let response = response.error_for_status()?;
        let value = response.json().await?;
        Ok(value)
    }

    /// The endpoint this client probes.
    pub fn url(&self) -> &str {
        &self.url
    }
}
