//! Client configuration shared by all vendor clients

use crate::error::SouthboundError;
use reqwest::Client;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Connection settings for a single vendor API endpoint
#[derive(Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ClientConfig {
    /// Base URL of the vendor API (e.g., "https://api.meraki.com/api/v1")
    pub base_url: String,
    /// API token or key
    pub token: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Skip TLS certificate verification (on-prem appliances with self-signed certs)
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

impl ClientConfig {
    /// Create a configuration with default timeout and TLS verification on
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            accept_invalid_certs: false,
        }
    }

    /// Base URL with any trailing slash removed
    #[must_use]
    pub fn normalized_base_url(&self) -> String {
        self.base_url.trim_end_matches('/').to_string()
    }

    /// Check the configuration before building a client
    pub fn validate(&self) -> Result<(), SouthboundError> {
        if self.base_url.trim().is_empty() {
            return Err(SouthboundError::Configuration("base_url must not be empty".to_string()));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(SouthboundError::Configuration(format!(
                "base_url must start with http:// or https://, got {}",
                self.base_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(SouthboundError::Configuration("timeout_secs must be greater than zero".to_string()));
        }
        Ok(())
    }

    /// Build the underlying reqwest client
    pub fn build_http_client(&self) -> Result<Client, SouthboundError> {
        self.validate()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .build()?;
        Ok(client)
    }
}

// Token is redacted from debug output.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_json() {
        let cfg: ClientConfig = serde_json::from_str(
            r#"{"base_url": "https://vco.example.net/", "token": "abc"}"#,
        )
        .unwrap();
        assert_eq!(cfg.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(!cfg.accept_invalid_certs);
        assert_eq!(cfg.normalized_base_url(), "https://vco.example.net");
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        assert!(ClientConfig::new("", "t").validate().is_err());
        assert!(ClientConfig::new("ftp://host", "t").validate().is_err());
        assert!(ClientConfig::new("https://host", "t").validate().is_ok());

        let mut cfg = ClientConfig::new("https://host", "t");
        cfg.timeout_secs = 0;
        assert!(matches!(cfg.validate(), Err(SouthboundError::Configuration(_))));
    }

    #[test]
    fn test_debug_redacts_token() {
        let cfg = ClientConfig::new("https://host", "super-secret");
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
