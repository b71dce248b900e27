//! Types shared by both Velocloud API generations

use serde::{Deserialize, Serialize};
use std::fmt;

/// Velocloud Orchestrator API generation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    /// Portal API (`/portal/rest/...`), numeric ids
    V1,
    /// REST API (`/api/sdwan/v2/...`), logical ids
    V2,
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V1 => f.write_str("v1"),
            Self::V2 => f.write_str("v2"),
        }
    }
}

/// Edge connectivity state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EdgeState {
    Connected,
    Offline,
    Degraded,
    NeverActivated,
    Reactivation,
    #[serde(other)]
    Unknown,
}

impl EdgeState {
    /// Wire representation of the state
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Connected => "CONNECTED",
            Self::Offline => "OFFLINE",
            Self::Degraded => "DEGRADED",
            Self::NeverActivated => "NEVER_ACTIVATED",
            Self::Reactivation => "REACTIVATION",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// Edge activation state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivationState {
    Activated,
    Pending,
    Unassigned,
    ReactivationPending,
    #[serde(other)]
    Unknown,
}
