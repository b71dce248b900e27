//! Meraki Dashboard API models
//!
//! These models match the Dashboard API v1 response shapes for the
//! organization, network and device endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Organization (`GET /organizations/{organizationId}`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub url: Option<String>,
    pub api: Option<OrganizationApi>,
    pub licensing: Option<Licensing>,
    pub cloud: Option<Cloud>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrganizationApi {
    pub enabled: bool,
}

/// Licensing model: `co-term`, `per-device` or `subscription`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Licensing {
    pub model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cloud {
    pub region: Option<CloudRegion>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CloudRegion {
    pub name: String,
}

/// Network (`GET /organizations/{organizationId}/networks`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    pub id: String,
    pub organization_id: String,
    pub name: String,
    #[serde(default)]
    pub product_types: Vec<String>,
    pub time_zone: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub notes: Option<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub is_bound_to_config_template: bool,
}

/// Device inventory entry (`GET /devices/{serial}`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub serial: String,
    pub name: Option<String>,
    pub mac: Option<String>,
    pub model: String,
    pub network_id: Option<String>,
    pub firmware: Option<String>,
    pub lan_ip: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub product_type: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// Device status (`GET /organizations/{organizationId}/devices/statuses`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceStatus {
    pub serial: String,
    pub name: Option<String>,
    pub mac: Option<String>,
    pub network_id: Option<String>,
    pub status: DeviceStatusValue,
    pub last_reported_at: Option<DateTime<Utc>>,
    pub public_ip: Option<String>,
    pub lan_ip: Option<String>,
    pub model: Option<String>,
    pub product_type: Option<String>,
}

/// Reported device status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatusValue {
    Online,
    Alerting,
    Offline,
    Dormant,
    #[serde(other)]
    Unknown,
}

impl DeviceStatusValue {
    /// Wire representation of the status
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Alerting => "alerting",
            Self::Offline => "offline",
            Self::Dormant => "dormant",
            Self::Unknown => "unknown",
        }
    }
}
