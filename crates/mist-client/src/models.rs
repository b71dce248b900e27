//! Mist API models
//!
//! Mist uses snake_case keys throughout; timestamps are epoch seconds.

use serde::{Deserialize, Serialize};

/// Caller identity (`GET /api/v1/self`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelfInfo {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Set for org API tokens instead of user names
    pub name: Option<String>,
    #[serde(default)]
    pub privileges: Vec<Privilege>,
}

impl SelfInfo {
    /// Organization ids the caller holds a privilege on
    pub fn org_ids(&self) -> impl Iterator<Item = &str> {
        self.privileges
            .iter()
            .filter(|p| p.scope == "org")
            .filter_map(|p| p.org_id.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Privilege {
    /// `msp`, `org` or `site`
    pub scope: String,
    /// `admin`, `write`, `read`, `helpdesk` or `installer`
    pub role: String,
    pub name: Option<String>,
    pub org_id: Option<String>,
    pub site_id: Option<String>,
    pub msp_id: Option<String>,
}

/// Organization (`GET /api/v1/orgs/{org_id}`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Org {
    pub id: String,
    pub name: String,
    pub msp_id: Option<String>,
    pub orggroup_ids: Option<Vec<String>>,
    pub created_time: Option<f64>,
    pub modified_time: Option<f64>,
}

/// Site (`GET /api/v1/orgs/{org_id}/sites`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Site {
    pub id: String,
    pub org_id: String,
    pub name: String,
    pub address: Option<String>,
    pub country_code: Option<String>,
    pub timezone: Option<String>,
    pub notes: Option<String>,
}

/// Device category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Ap,
    Switch,
    Gateway,
    #[serde(other)]
    Unknown,
}

/// Claimed device (`GET /api/v1/orgs/{org_id}/inventory`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryDevice {
    pub mac: String,
    pub serial: Option<String>,
    pub model: Option<String>,
    pub sku: Option<String>,
    #[serde(rename = "type")]
    pub device_type: Option<DeviceType>,
    pub name: Option<String>,
    pub org_id: Option<String>,
    /// Unset while the device is unassigned
    pub site_id: Option<String>,
    pub connected: Option<bool>,
    pub deviceprofile_id: Option<String>,
}

/// Runtime device statistics (`GET /api/v1/sites/{site_id}/stats/devices`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeviceStats {
    pub mac: String,
    pub name: Option<String>,
    pub serial: Option<String>,
    pub model: Option<String>,
    #[serde(rename = "type")]
    pub device_type: Option<DeviceType>,
    /// Firmware version
    pub version: Option<String>,
    /// `connected`, `disconnected`, `restarting`, `upgrading`, ...
    pub status: Option<String>,
    pub ip: Option<String>,
    pub uptime: Option<f64>,
    pub last_seen: Option<f64>,
    pub site_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_self_org_ids() {
        let me: SelfInfo = serde_json::from_value(json!({
            "email": "netops@example.com",
            "privileges": [
                {"scope": "org", "role": "admin", "name": "Acme", "org_id": "0fa1c0a4-7a6e-4e2f-9c2b-3e8f8d1b2c11"},
                {"scope": "site", "role": "read", "org_id": "ignored", "site_id": "s-1"},
                {"scope": "msp", "role": "admin", "msp_id": "m-1"}
            ]
        }))
        .unwrap();
        let ids: Vec<&str> = me.org_ids().collect();
        assert_eq!(ids, vec!["0fa1c0a4-7a6e-4e2f-9c2b-3e8f8d1b2c11"]);
    }

    #[test]
    fn test_inventory_device_type() {
        let device: InventoryDevice = serde_json::from_value(json!({
            "mac": "5c5b35000001",
            "serial": "A0710190400D5",
            "model": "AP43",
            "type": "ap",
            "connected": true
        }))
        .unwrap();
        assert_eq!(device.device_type, Some(DeviceType::Ap));
        assert_eq!(device.site_id, None);

        let other: InventoryDevice = serde_json::from_value(json!({"mac": "aa", "type": "mxedge"})).unwrap();
        assert_eq!(other.device_type, Some(DeviceType::Unknown));
    }
}
