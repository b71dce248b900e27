//! Mock MerakiClient for unit testing
//!
//! Stores organizations, networks and devices in memory. Only the
//! `serials[]` filter is honoured; other filters are accepted and ignored.

use crate::meraki_trait::MerakiApi;
use crate::models::*;
use southbound_common::SouthboundError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn serial_filter<'a>(filters: &[(&str, &'a str)]) -> Vec<&'a str> {
    filters
        .iter()
        .filter(|(key, _)| *key == "serials[]")
        .map(|(_, value)| *value)
        .collect()
}

/// Mock MerakiClient for testing
#[derive(Debug, Clone)]
pub struct MockMerakiClient {
    base_url: String,
    organizations: Arc<Mutex<HashMap<String, Organization>>>,
    networks: Arc<Mutex<Vec<Network>>>,
    devices: Arc<Mutex<HashMap<String, (String, Device)>>>,
    statuses: Arc<Mutex<Vec<(String, DeviceStatus)>>>,
    validation_failure: Arc<Mutex<Option<String>>>,
}

impl MockMerakiClient {
    /// Create a new mock client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            organizations: Arc::new(Mutex::new(HashMap::new())),
            networks: Arc::new(Mutex::new(Vec::new())),
            devices: Arc::new(Mutex::new(HashMap::new())),
            statuses: Arc::new(Mutex::new(Vec::new())),
            validation_failure: Arc::new(Mutex::new(None)),
        }
    }

    /// Add an organization to the mock store (for test setup)
    pub fn add_organization(&self, org: Organization) {
        lock(&self.organizations).insert(org.id.clone(), org);
    }

    /// Add a network to the mock store (for test setup)
    pub fn add_network(&self, network: Network) {
        lock(&self.networks).push(network);
    }

    /// Add a device claimed into `org_id` (for test setup)
    pub fn add_device(&self, org_id: impl Into<String>, device: Device) {
        lock(&self.devices).insert(device.serial.clone(), (org_id.into(), device));
    }

    /// Add a device status reported by `org_id` (for test setup)
    pub fn add_status(&self, org_id: impl Into<String>, status: DeviceStatus) {
        lock(&self.statuses).push((org_id.into(), status));
    }

    /// Make every subsequent call fail schema validation
    pub fn fail_validation(&self, message: impl Into<String>) {
        *lock(&self.validation_failure) = Some(message.into());
    }

    fn check(&self) -> Result<(), SouthboundError> {
        match lock(&self.validation_failure).as_ref() {
            Some(message) => Err(SouthboundError::Validation(message.clone())),
            None => Ok(()),
        }
    }

    /// Build a minimal organization fixture
    pub fn organization(id: &str, name: &str) -> Organization {
        Organization {
            id: id.to_string(),
            name: name.to_string(),
            url: None,
            api: Some(OrganizationApi { enabled: true }),
            licensing: Some(Licensing {
                model: "co-term".to_string(),
            }),
            cloud: None,
        }
    }

    /// Build a minimal device fixture
    pub fn device(serial: &str, name: Option<&str>, model: &str) -> Device {
        Device {
            serial: serial.to_string(),
            name: name.map(str::to_string),
            mac: Some("e0:55:3d:10:56:8a".to_string()),
            model: model.to_string(),
            network_id: Some("L_1".to_string()),
            firmware: Some("wired-18-107-2".to_string()),
            lan_ip: None,
            address: None,
            tags: Vec::new(),
            product_type: Some("appliance".to_string()),
            lat: None,
            lng: None,
        }
    }

    /// Build a minimal status fixture
    pub fn status(serial: &str, status: DeviceStatusValue) -> DeviceStatus {
        DeviceStatus {
            serial: serial.to_string(),
            name: None,
            mac: None,
            network_id: Some("L_1".to_string()),
            status,
            last_reported_at: None,
            public_ip: None,
            lan_ip: None,
            model: None,
            product_type: None,
        }
    }
}

#[async_trait::async_trait]
impl MerakiApi for MockMerakiClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_organizations(&self) -> Result<Vec<Organization>, SouthboundError> {
        self.check()?;
        Ok(lock(&self.organizations).values().cloned().collect())
    }

    async fn get_organization(&self, org_id: &str) -> Result<Organization, SouthboundError> {
        self.check()?;
        lock(&self.organizations)
            .get(org_id)
            .cloned()
            .ok_or_else(|| SouthboundError::NotFound(format!("Organization {org_id} not found")))
    }

    async fn get_organization_networks(&self, org_id: &str, _fetch_all: bool) -> Result<Vec<Network>, SouthboundError> {
        self.check()?;
        Ok(lock(&self.networks)
            .iter()
            .filter(|n| n.organization_id == org_id)
            .cloned()
            .collect())
    }

    async fn get_organization_devices(&self, org_id: &str, filters: &[(&str, &str)], _fetch_all: bool) -> Result<Vec<Device>, SouthboundError> {
        self.check()?;
        let serials = serial_filter(filters);
        Ok(lock(&self.devices)
            .values()
            .filter(|(owner, d)| owner == org_id && (serials.is_empty() || serials.contains(&d.serial.as_str())))
            .map(|(_, d)| d.clone())
            .collect())
    }

    async fn get_organization_devices_statuses(&self, org_id: &str, filters: &[(&str, &str)], _fetch_all: bool) -> Result<Vec<DeviceStatus>, SouthboundError> {
        self.check()?;
        let serials = serial_filter(filters);
        Ok(lock(&self.statuses)
            .iter()
            .filter(|(owner, s)| owner == org_id && (serials.is_empty() || serials.contains(&s.serial.as_str())))
            .map(|(_, s)| s.clone())
            .collect())
    }

    async fn get_device(&self, serial: &str) -> Result<Device, SouthboundError> {
        self.check()?;
        lock(&self.devices)
            .get(serial)
            .map(|(_, d)| d.clone())
            .ok_or_else(|| SouthboundError::NotFound(format!("Device {serial} not found")))
    }
}
