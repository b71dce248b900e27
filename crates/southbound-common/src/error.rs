//! Southbound client errors

use thiserror::Error;

/// Errors that can occur when talking to a vendor management API
#[derive(Debug, Error)]
pub enum SouthboundError {
    /// HTTP request/response error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Vendor API returned a non-success status
    #[error("API error: {0}")]
    Api(String),

    /// JSON serialization error while encoding a request
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Response body did not match the expected schema
    #[error("Validation error: {0}")]
    Validation(String),

    /// Authentication failed (invalid token, expired session, etc.)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request (e.g., malformed identifier)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// JSON-RPC call completed at the HTTP level but reported a failure
    #[error("RPC error {code}: {message}")]
    Rpc {
        /// Vendor status code
        code: i64,
        /// Vendor status message
        message: String,
    },

    /// Client configuration is unusable
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl SouthboundError {
    /// True when the response could not be parsed into its schema
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// True when the vendor reported the resource as missing
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
