//! Probe configuration.
//!
//! The upstream URL and timeout have fixed defaults; the environment can
//! override them per deployment without a rebuild, the same way other
//! handlers pick up their service endpoints.

use std::time::Duration;

/// Default upstream endpoint: returns a JSON description of the request.
pub const DEFAULT_UPSTREAM_URL: &str = "https://httpbin.org/get";

/// Default timeout for the single outbound call, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Configuration for the outbound probe call.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// URL the probe GETs on every invocation.
    pub upstream_url: String,

    /// Hard bound on the whole outbound call (connect + response body).
    pub timeout: Duration,
}

impl ProbeConfig {
    /// Load configuration from the environment, falling back to defaults.
    ///
    /// `UPSTREAM_URL` replaces the endpoint; `UPSTREAM_TIMEOUT_SECS` must be
    /// a positive integer or it is ignored.
    pub fn from_env() -> Self {
        Self::resolve(
            std::env::var("UPSTREAM_URL").ok(),
            std::env::var("UPSTREAM_TIMEOUT_SECS").ok(),
        )
    }

    fn resolve(url: Option<String>, timeout_secs: Option<String>) -> Self {
        let upstream_url = url.unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string());

        let timeout_secs = timeout_secs
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|&s| s > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            upstream_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_endpoint_and_timeout() {
        let config = ProbeConfig::default();
        assert_eq!(config.upstream_url, "https://httpbin.org/get");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn env_values_override_defaults() {
        let config = ProbeConfig::resolve(
            Some("http://10.0.0.1:8282/get".to_string()),
            Some("7".to_string()),
        );
        assert_eq!(config.upstream_url, "http://10.0.0.1:8282/get");
        assert_eq!(config.timeout, Duration::from_secs(7));
    }

    #[test]
    fn absent_values_fall_back_to_defaults() {
        let config = ProbeConfig::resolve(None, None);
        assert_eq!(config.upstream_url, DEFAULT_UPSTREAM_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn non_numeric_timeout_falls_back_to_default() {
        let config = ProbeConfig::resolve(None, Some("soon".to_string()));
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn zero_timeout_falls_back_to_default() {
        let config = ProbeConfig::resolve(None, Some("0".to_string()));
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }
}
