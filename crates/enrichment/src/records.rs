//! Vendor-independent enrichment records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use velocloud_client::ApiVersion;

/// Placeholder for fields the source API cannot supply
pub const NOT_AVAILABLE: &str = "N/A";

/// Vendor a record was sourced from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Vendor {
    Velocloud,
    Meraki,
    FortiManager,
    Mist,
}

impl Vendor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Velocloud => "velocloud",
            Self::Meraki => "meraki",
            Self::FortiManager => "fortimanager",
            Self::Mist => "mist",
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized summary of an enterprise (organization, ADOM, ...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnterpriseRecord {
    pub vendor: Vendor,
    /// Set for vendors with more than one API generation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<ApiVersion>,
    pub id: String,
    pub name: String,
    pub account_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_info: Option<String>,
    pub enriched_at: DateTime<Utc>,
}

/// Normalized summary of an edge device
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EdgeRecord {
    pub vendor: Vendor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<ApiVersion>,
    pub id: String,
    pub enterprise_id: String,
    pub name: String,
    pub serial_number: String,
    pub model: String,
    pub software_version: String,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_info: Option<String>,
    pub enriched_at: DateTime<Utc>,
}

/// Either kind of record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EnrichedRecord {
    Enterprise(EnterpriseRecord),
    Edge(EdgeRecord),
}

/// `value`, or [`NOT_AVAILABLE`] when the source left it out
pub(crate) fn or_not_available(value: Option<String>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
