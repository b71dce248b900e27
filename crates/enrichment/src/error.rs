//! Enrichment error types

use southbound_common::SouthboundError;
use thiserror::Error;

/// Errors that can occur while building an enrichment record
#[derive(Debug, Error)]
pub enum EnrichmentError {
    /// The vendor API call failed (transport, status, schema validation, ...)
    #[error("Southbound API error: {0}")]
    Southbound(#[from] SouthboundError),

    /// The vendor answered successfully but returned no object
    #[error("Empty {kind} response for {id}")]
    EmptyResponse { kind: &'static str, id: String },

    /// The identifier cannot address an object of this kind
    #[error("Invalid {kind} identifier: {id:?}")]
    InvalidIdentifier { kind: &'static str, id: String },
}

impl EnrichmentError {
    /// Whether the vendor response failed schema validation
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Southbound(e) if e.is_validation())
    }

    /// Whether the object does not exist (404, vendor "not found" or an empty response)
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Southbound(e) => e.is_not_found(),
            Self::EmptyResponse { .. } => true,
            Self::InvalidIdentifier { .. } => false,
        }
    }
}

/// Trim an identifier and reject empty ones
pub(crate) fn require_id<'a>(kind: &'static str, raw: &'a str) -> Result<&'a str, EnrichmentError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EnrichmentError::InvalidIdentifier {
            kind,
            id: raw.to_string(),
        });
    }
    Ok(trimmed)
}
