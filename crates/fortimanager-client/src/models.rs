//! FortiManager object models
//!
//! Shapes returned by `/dvmdb/adom`, `/dvmdb/adom/{adom}/device` and
//! `/sys/status` with the default (non-verbose) encoding, where enumerations
//! are reported as integers.

use serde::{Deserialize, Serialize};

/// Administrative domain
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Adom {
    pub name: String,
    pub oid: u64,
    pub desc: Option<String>,
    pub state: Option<i64>,
    pub os_ver: Option<i64>,
    pub mr: Option<i64>,
}

/// Device connection state (`conn_status`)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "i64", into = "i64")]
pub enum ConnStatus {
    Unknown,
    Up,
    Down,
}

impl From<i64> for ConnStatus {
    fn from(value: i64) -> Self {
        match value {
            1 => Self::Up,
            2 => Self::Down,
            _ => Self::Unknown,
        }
    }
}

impl From<ConnStatus> for i64 {
    fn from(value: ConnStatus) -> Self {
        match value {
            ConnStatus::Unknown => 0,
            ConnStatus::Up => 1,
            ConnStatus::Down => 2,
        }
    }
}

impl ConnStatus {
    /// Human readable state
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

/// Attributes requested when listing devices
pub const DEVICE_FIELDS: &[&str] = &[
    "name",
    "oid",
    "sn",
    "platform_str",
    "hostname",
    "ip",
    "desc",
    "os_ver",
    "mr",
    "patch",
    "build",
    "conn_status",
    "conf_status",
];

/// Device managed by FortiManager
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManagedDevice {
    pub name: String,
    pub oid: u64,
    pub sn: Option<String>,
    pub platform_str: Option<String>,
    pub hostname: Option<String>,
    pub ip: Option<String>,
    pub desc: Option<String>,
    pub os_ver: Option<i64>,
    pub mr: Option<i64>,
    pub patch: Option<i64>,
    pub build: Option<i64>,
    pub conn_status: Option<ConnStatus>,
    pub conf_status: Option<i64>,
}

impl ManagedDevice {
    /// Firmware version as `major.minor.patch`
    ///
    /// The build number stays in [`ManagedDevice::build`].
    #[must_use]
    pub fn firmware_version(&self) -> Option<String> {
        let major = self.os_ver?;
        let minor = self.mr?;
        let patch = self.patch.unwrap_or(0);
        Some(format!("{major}.{minor}.{patch}"))
    }
}

/// Appliance status (`/sys/status`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemStatus {
    #[serde(rename = "Hostname")]
    pub hostname: Option<String>,
    #[serde(rename = "Version")]
    pub version: Option<String>,
    #[serde(rename = "Serial Number")]
    pub serial_number: Option<String>,
    #[serde(rename = "Platform Type")]
    pub platform_type: Option<String>,
    #[serde(rename = "Admin Domain Configuration")]
    pub admin_domain_configuration: Option<String>,
}
