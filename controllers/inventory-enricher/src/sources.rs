//! Builds one enricher per configured source

use crate::config::SourceConfig;
use crate::error::ConfigError;
use enrichment::{Enricher, FortiManagerEnricher, MerakiEnricher, MistEnricher, Vendor, VelocloudHandle};
use fortimanager_client::{FortiManagerAuth, FortiManagerClient};
use meraki_client::MerakiClient;
use mist_client::MistClient;
use southbound_common::{ClientConfig, SouthboundError};
use std::sync::Arc;
use tracing::{info, warn};
use velocloud_client::{ApiVersion, VersionedVelocloudClient};

/// Enricher for one source
#[derive(Debug)]
pub enum SourceEnricher {
    Velocloud(VelocloudHandle),
    Meraki(MerakiEnricher),
    FortiManager(FortiManagerEnricher),
    Mist(MistEnricher),
}

impl SourceEnricher {
    pub fn as_enricher(&self) -> &dyn Enricher {
        match self {
            Self::Velocloud(e) => e,
            Self::Meraki(e) => e,
            Self::FortiManager(e) => e,
            Self::Mist(e) => e,
        }
    }

    /// Release vendor sessions
    pub async fn close(&self) {
        if let Self::FortiManager(e) = self {
            if let Err(err) = e.close().await {
                warn!("Failed to close FortiManager session: {}", err);
            }
        }
    }
}

fn secret(source: &SourceConfig, var: &str, lookup: &dyn Fn(&str) -> Option<String>) -> Result<String, ConfigError> {
    lookup(var)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ConfigError::MissingSecret {
            source_name: source.name().to_string(),
            var: var.to_string(),
        })
}

/// Build the client and enricher for `source`
///
/// `lookup` resolves the environment variables named in the config.
pub fn build_source(source: &SourceConfig, lookup: &dyn Fn(&str) -> Option<String>) -> Result<SourceEnricher, ConfigError> {
    let client_error = |error: SouthboundError| ConfigError::Client {
        source_name: source.name().to_string(),
        error,
    };

    let token = match &source.token_env {
        Some(var) => secret(source, var, lookup)?,
        None => String::new(),
    };
    let default_url = match source.vendor {
        Vendor::Meraki => meraki_client::DEFAULT_BASE_URL,
        Vendor::Mist => mist_client::DEFAULT_BASE_URL,
        Vendor::Velocloud | Vendor::FortiManager => "",
    };
    let mut config = ClientConfig::new(source.base_url.as_deref().unwrap_or(default_url), token);
    config.timeout_secs = source.timeout_secs;
    config.accept_invalid_certs = source.accept_invalid_certs;

    let enricher = match source.vendor {
        Vendor::Velocloud => {
            let version = source.api_version.unwrap_or(ApiVersion::V2);
            let client = VersionedVelocloudClient::new(version, &config).map_err(client_error)?;
            SourceEnricher::Velocloud(VelocloudHandle::Versioned(client))
        }
        Vendor::Meraki => {
            let client = MerakiClient::from_config(&config).map_err(client_error)?;
            SourceEnricher::Meraki(MerakiEnricher::new(Arc::new(client)))
        }
        Vendor::FortiManager => {
            let auth = match (&source.username, &source.password_env) {
                (Some(user), Some(var)) => FortiManagerAuth::Credentials {
                    user: user.clone(),
                    password: secret(source, var, lookup)?,
                },
                _ => FortiManagerAuth::ApiKey(config.token.clone()),
            };
            let client = FortiManagerClient::from_config(&config, auth).map_err(client_error)?;
            SourceEnricher::FortiManager(FortiManagerEnricher::new(Arc::new(client)))
        }
        Vendor::Mist => {
            let client = MistClient::from_config(&config).map_err(client_error)?;
            SourceEnricher::Mist(MistEnricher::new(Arc::new(client)))
        }
    };

    info!("Source {}: {} at {} ({} targets)", source.name(), source.vendor, config.normalized_base_url(), source.targets.len());
    Ok(enricher)
}
