//! Velocloud portal (V1) API models
//!
//! Only the fields the inventory pipeline consumes are modelled; the portal
//! returns many more.

use crate::models::{ActivationState, EdgeState};
use serde::{Deserialize, Serialize};
use southbound_common::SouthboundError;
use std::fmt;
use std::str::FromStr;

/// Identifier accepted by the portal API
///
/// Numeric strings address objects by their legacy integer id; anything else
/// is sent as an opaque logical id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LegacyId {
    Numeric(i64),
    Opaque(String),
}

impl LegacyId {
    /// Parse an identifier string
    pub fn parse(raw: &str) -> Result<Self, SouthboundError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(SouthboundError::InvalidRequest("identifier must not be empty".to_string()));
        }
        if raw.bytes().all(|b| b.is_ascii_digit()) {
            return raw
                .parse::<i64>()
                .map(Self::Numeric)
                .map_err(|e| SouthboundError::InvalidRequest(format!("identifier {raw} out of range: {e}")));
        }
        Ok(Self::Opaque(raw.to_string()))
    }

    /// Numeric id, if this is one
    #[must_use]
    pub fn as_numeric(&self) -> Option<i64> {
        match self {
            Self::Numeric(id) => Some(*id),
            Self::Opaque(_) => None,
        }
    }
}

impl FromStr for LegacyId {
    type Err = SouthboundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LegacyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{id}"),
            Self::Opaque(id) => f.write_str(id),
        }
    }
}

/// Parameters for `enterprise/getEnterprise`
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetEnterpriseParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logical_id: Option<String>,
}

impl From<&LegacyId> for GetEnterpriseParams {
    fn from(id: &LegacyId) -> Self {
        match id {
            LegacyId::Numeric(n) => Self {
                enterprise_id: Some(*n),
                logical_id: None,
            },
            LegacyId::Opaque(s) => Self {
                enterprise_id: None,
                logical_id: Some(s.clone()),
            },
        }
    }
}

/// Parameters for `edge/getEdge`
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetEdgeParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logical_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_id: Option<i64>,
}

impl GetEdgeParams {
    /// Build parameters for an edge, optionally scoped to an enterprise
    #[must_use]
    pub fn new(enterprise_id: Option<i64>, id: &LegacyId) -> Self {
        let (id, logical_id) = match id {
            LegacyId::Numeric(n) => (Some(*n), None),
            LegacyId::Opaque(s) => (None, Some(s.clone())),
        };
        Self {
            id,
            logical_id,
            enterprise_id,
        }
    }
}

/// Parameters for `enterprise/getEnterpriseEdges`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetEnterpriseEdgesParams {
    pub enterprise_id: i64,
}

/// Enterprise as returned by `enterprise/getEnterprise`
///
/// The portal API has no account number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct V1Enterprise {
    pub id: i64,
    pub logical_id: Option<String>,
    pub name: Option<String>,
    pub domain: Option<String>,
    pub description: Option<String>,
    pub network_id: Option<i64>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub modified: Option<String>,
}

/// Edge as returned by `edge/getEdge` and `enterprise/getEnterpriseEdges`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct V1Edge {
    pub id: i64,
    pub logical_id: Option<String>,
    pub enterprise_id: Option<i64>,
    pub site_id: Option<i64>,
    pub name: Option<String>,
    pub serial_number: Option<String>,
    pub model_number: Option<String>,
    pub software_version: Option<String>,
    pub edge_state: Option<EdgeState>,
    pub activation_state: Option<ActivationState>,
    pub custom_info: Option<String>,
    pub description: Option<String>,
    pub modified: Option<String>,
}

/// Error object the portal returns in place of a result
#[derive(Debug, Clone, Deserialize)]
pub struct PortalError {
    pub code: i64,
    pub message: String,
}
