//! Enricher-specific error types.

use southbound_common::SouthboundError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the configuration or building clients
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid YAML for the expected schema
    #[error("Invalid YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Config parsed but describes an unusable setup
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// Environment variable holding a secret is not set
    #[error("Source {source_name}: environment variable {var} is not set")]
    MissingSecret { source_name: String, var: String },

    /// Client construction failed
    #[error("Source {source_name}: {error}")]
    Client {
        source_name: String,
        #[source]
        error: SouthboundError,
    },
}
