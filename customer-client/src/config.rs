//! Client configuration

use crate::error::{ClientError, ClientResult};

/// Environment variable holding the backend base URL
pub const ENV_API_URL: &str = "CUSTOMER_API_URL";
/// Environment variable holding the request timeout in seconds
pub const ENV_API_TIMEOUT: &str = "CUSTOMER_API_TIMEOUT";
/// Environment variable enabling the activate/deactivate/search controls
pub const ENV_SUPPORTS_ACTIVATION: &str = "CUSTOMER_SUPPORTS_ACTIVATION";

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the customer form controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Backend exposes activate/deactivate sub-resources and name search.
    ///
    /// Also switches Delete to the soft-delete (`/deactivate`) endpoint.
    pub supports_activation: bool,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT_SECS,
            supports_activation: false,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Enable or disable the activation controls
    pub fn with_activation(mut self, supports_activation: bool) -> Self {
        self.supports_activation = supports_activation;
        self
    }

    /// Load configuration from the environment (and a `.env` file if present)
    pub fn from_env() -> ClientResult<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> ClientResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new(
            lookup(ENV_API_URL)
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        );

        if let Some(raw) = lookup(ENV_API_TIMEOUT) {
            config.timeout = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    ClientError::Config(format!(
                        "{ENV_API_TIMEOUT} must be a positive number of seconds, got '{raw}'"
                    ))
                })?;
        }

        if let Some(raw) = lookup(ENV_SUPPORTS_ACTIVATION) {
            config.supports_activation = parse_flag(&raw).ok_or_else(|| {
                ClientError::Config(format!("{ENV_SUPPORTS_ACTIVATION} must be true or false, got '{raw}'"))
            })?;
        }

        Ok(config)
    }

    /// Create a network HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<crate::NetworkHttpClient> {
        crate::NetworkHttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.timeout, 30);
        assert!(!config.supports_activation);
    }

    #[test]
    fn test_reads_all_keys() {
        let config = ClientConfig::from_lookup(lookup(&[
            (ENV_API_URL, "http://api:9000"),
            (ENV_API_TIMEOUT, "5"),
            (ENV_SUPPORTS_ACTIVATION, "TRUE"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://api:9000");
        assert_eq!(config.timeout, 5);
        assert!(config.supports_activation);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = ClientConfig::from_lookup(lookup(&[(ENV_API_TIMEOUT, "soon")])).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));

        let err =
            ClientConfig::from_lookup(lookup(&[(ENV_SUPPORTS_ACTIVATION, "maybe")])).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let err = ClientConfig::from_lookup(lookup(&[(ENV_API_TIMEOUT, "0")])).unwrap_err();
        assert!(matches!(err, ClientError::Config(msg) if msg.contains(ENV_API_TIMEOUT)));
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::new("http://x").with_timeout(3).with_activation(true);
        assert_eq!(config.timeout, 3);
        assert!(config.supports_activation);
    }
}
