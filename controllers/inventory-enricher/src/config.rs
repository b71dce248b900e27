//! Enricher YAML configuration
//!
//! ```yaml
//! sources:
//!   - name: vco-prod
//!     vendor: velocloud
//!     api_version: v1
//!     base_url: https://vco.example.net
//!     token_env: VCO_TOKEN
//!     targets:
//!       - kind: enterprise
//!         id: "42"
//!       - kind: edge
//!         enterprise_id: "42"
//!         edge_id: "7"
//!   - vendor: fortimanager
//!     base_url: https://fmg.example.net
//!     username: api-user
//!     password_env: FMG_PASSWORD
//!     accept_invalid_certs: true
//!     targets:
//!       - kind: enterprise
//!         id: root
//! ```

use crate::error::ConfigError;
use enrichment::{EnrichmentTarget, Vendor};
use serde::Deserialize;
use southbound_common::DEFAULT_TIMEOUT_SECS;
use std::path::Path;
use velocloud_client::ApiVersion;

/// Config file read when `ENRICHER_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "enricher.yaml";

/// In-flight enrichment calls per source when `ENRICHER_CONCURRENCY` is unset
pub const DEFAULT_CONCURRENCY: usize = 4;

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Root configuration structure
#[derive(Debug, Deserialize)]
pub struct EnricherConfig {
    pub sources: Vec<SourceConfig>,
}

/// One vendor endpoint and the objects to enrich from it
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Label used in logs and failure records (default: `<vendor>-<index>`)
    pub name: Option<String>,
    pub vendor: Vendor,
    /// Velocloud only (default: v2)
    pub api_version: Option<ApiVersion>,
    /// Required for Velocloud and FortiManager; Meraki and Mist default to their public clouds
    pub base_url: Option<String>,
    /// Environment variable holding the API token or key
    pub token_env: Option<String>,
    /// FortiManager session login instead of an API key
    pub username: Option<String>,
    pub password_env: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub accept_invalid_certs: bool,
    #[serde(default)]
    pub targets: Vec<EnrichmentTarget>,
}

impl EnricherConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yaml::from_str(text)?;
        config.assign_names();
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text)
    }

    fn assign_names(&mut self) {
        for (index, source) in self.sources.iter_mut().enumerate() {
            if source.name.is_none() {
                source.name = Some(format!("{}-{}", source.vendor, index));
            }
        }
    }

    /// Check vendor/version combinations and required settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sources.is_empty() {
            return Err(ConfigError::Invalid("at least one source is required".to_string()));
        }
        for source in &self.sources {
            source.validate()?;
        }
        Ok(())
    }
}

impl SourceConfig {
    /// Source label
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| self.vendor.as_str())
    }

    fn invalid(&self, message: &str) -> ConfigError {
        ConfigError::Invalid(format!("source {}: {}", self.name(), message))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.api_version.is_some() && self.vendor != Vendor::Velocloud {
            return Err(self.invalid("api_version is only supported for velocloud"));
        }
        if self.base_url.is_none() && matches!(self.vendor, Vendor::Velocloud | Vendor::FortiManager) {
            return Err(self.invalid("base_url is required"));
        }
        match (&self.vendor, &self.username, &self.password_env, &self.token_env) {
            (Vendor::FortiManager, Some(_), Some(_), None) | (_, None, None, Some(_)) => Ok(()),
            (Vendor::FortiManager, Some(_), None, _) => Err(self.invalid("username requires password_env")),
            (Vendor::FortiManager, None, Some(_), _) => Err(self.invalid("password_env requires username")),
            (Vendor::FortiManager, Some(_), Some(_), Some(_)) => {
                Err(self.invalid("use either token_env or username/password_env, not both"))
            }
            (_, None, None, None) => Err(self.invalid("token_env is required")),
            _ => Err(self.invalid("username/password_env are only supported for fortimanager")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = r#"
sources:
  - name: vco-prod
    vendor: velocloud
    api_version: v1
    base_url: https://vco.example.net
    token_env: VCO_TOKEN
    targets:
      - kind: enterprise
        id: "42"
      - kind: edge
        enterprise_id: "42"
        edge_id: "7"
  - vendor: meraki
    token_env: MERAKI_API_KEY
  - vendor: fortimanager
    base_url: https://fmg.example.net
    username: api-user
    password_env: FMG_PASSWORD
    timeout_secs: 10
    accept_invalid_certs: true
"#;

    #[test]
    fn test_parse_example() {
        let config = EnricherConfig::from_yaml(EXAMPLE).unwrap();
        assert_eq!(config.sources.len(), 3);

        let vco = &config.sources[0];
        assert_eq!(vco.name(), "vco-prod");
        assert_eq!(vco.api_version, Some(ApiVersion::V1));
        assert_eq!(vco.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(
            vco.targets[1],
            EnrichmentTarget::Edge {
                enterprise_id: "42".to_string(),
                edge_id: "7".to_string(),
            }
        );

        assert_eq!(config.sources[1].name(), "meraki-1");
        assert!(config.sources[1].targets.is_empty());
        assert!(config.sources[2].accept_invalid_certs);
    }

    #[test]
    fn test_rejects_empty_sources() {
        let err = EnricherConfig::from_yaml("sources: []").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_version_on_other_vendor() {
        let err = EnricherConfig::from_yaml(
            "sources:\n  - vendor: mist\n    api_version: v2\n    token_env: MIST_TOKEN\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("api_version"));
    }

    #[test]
    fn test_rejects_missing_base_url_and_token() {
        let err = EnricherConfig::from_yaml("sources:\n  - vendor: velocloud\n    token_env: T\n").unwrap_err();
        assert!(err.to_string().contains("base_url"));

        let err = EnricherConfig::from_yaml("sources:\n  - vendor: meraki\n").unwrap_err();
        assert!(err.to_string().contains("token_env"));

        let err = EnricherConfig::from_yaml(
            "sources:\n  - vendor: mist\n    username: u\n    password_env: P\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("only supported for fortimanager"));
    }

    #[test]
    fn test_rejects_unknown_vendor() {
        let err = EnricherConfig::from_yaml("sources:\n  - vendor: cisco-sdwan\n    token_env: T\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
