//! Mock MistClient for unit testing
//!
//! Inventory honours the `serial`, `mac` and `site_id` filters; stats honour
//! `mac`. Other filters are accepted and ignored.

use crate::mist_trait::MistApi;
use crate::models::*;
use southbound_common::SouthboundError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn filter_value<'a>(filters: &[(&str, &'a str)], key: &str) -> Option<&'a str> {
    filters.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Mock MistClient for testing
#[derive(Debug, Clone)]
pub struct MockMistClient {
    base_url: String,
    identity: Arc<Mutex<Option<SelfInfo>>>,
    orgs: Arc<Mutex<HashMap<String, Org>>>,
    sites: Arc<Mutex<Vec<Site>>>,
    inventory: Arc<Mutex<Vec<(String, InventoryDevice)>>>,
    stats: Arc<Mutex<Vec<(String, DeviceStats)>>>,
    validation_failure: Arc<Mutex<Option<String>>>,
}

impl MockMistClient {
    /// Create a new mock client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            identity: Arc::new(Mutex::new(None)),
            orgs: Arc::new(Mutex::new(HashMap::new())),
            sites: Arc::new(Mutex::new(Vec::new())),
            inventory: Arc::new(Mutex::new(Vec::new())),
            stats: Arc::new(Mutex::new(Vec::new())),
            validation_failure: Arc::new(Mutex::new(None)),
        }
    }

    /// Set the identity returned by `get_self`
    pub fn set_identity(&self, identity: SelfInfo) {
        *lock(&self.identity) = Some(identity);
    }

    /// Add an organization to the mock store (for test setup)
    pub fn add_org(&self, org: Org) {
        lock(&self.orgs).insert(org.id.clone(), org);
    }

    /// Add a site to the mock store (for test setup)
    pub fn add_site(&self, site: Site) {
        lock(&self.sites).push(site);
    }

    /// Add a device claimed into `org_id` (for test setup)
    pub fn add_inventory(&self, org_id: impl Into<String>, device: InventoryDevice) {
        lock(&self.inventory).push((org_id.into(), device));
    }

    /// Add device statistics reported by `site_id` (for test setup)
    pub fn add_stats(&self, site_id: impl Into<String>, stats: DeviceStats) {
        lock(&self.stats).push((site_id.into(), stats));
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

    /// Build a minimal org fixture
    pub fn org(id: &str, name: &str) -> Org {
        Org {
            id: id.to_string(),
            name: name.to_string(),
            msp_id: None,
            orggroup_ids: None,
            created_time: Some(1_700_000_000.0),
            modified_time: None,
        }
    }

    /// Build a minimal inventory fixture
    pub fn device(mac: &str, serial: &str, model: &str, site_id: Option<&str>) -> InventoryDevice {
        InventoryDevice {
            mac: mac.to_string(),
            serial: Some(serial.to_string()),
            model: Some(model.to_string()),
            sku: None,
            device_type: Some(DeviceType::Ap),
            name: None,
            org_id: None,
            site_id: site_id.map(str::to_string),
            connected: Some(site_id.is_some()),
            deviceprofile_id: None,
        }
    }

    /// Build a minimal stats fixture
    pub fn stats(mac: &str, name: &str, version: &str, status: &str) -> DeviceStats {
        DeviceStats {
            mac: mac.to_string(),
            name: Some(name.to_string()),
            serial: None,
            model: None,
            device_type: Some(DeviceType::Ap),
            version: Some(version.to_string()),
            status: Some(status.to_string()),
            ip: Some("10.1.0.20".to_string()),
            uptime: Some(86_400.0),
            last_seen: None,
            site_id: None,
        }
    }
}

#[async_trait::async_trait]
impl MistApi for MockMistClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_self(&self) -> Result<SelfInfo, SouthboundError> {
        self.check()?;
        lock(&self.identity)
            .clone()
            .ok_or_else(|| SouthboundError::Authentication("token has no identity".to_string()))
    }

    async fn get_org(&self, org_id: &str) -> Result<Org, SouthboundError> {
        self.check()?;
        lock(&self.orgs)
            .get(org_id)
            .cloned()
            .ok_or_else(|| SouthboundError::NotFound(format!("Org {org_id} not found")))
    }

    async fn get_org_sites(&self, org_id: &str) -> Result<Vec<Site>, SouthboundError> {
        self.check()?;
        Ok(lock(&self.sites)
            .iter()
            .filter(|s| s.org_id == org_id)
            .cloned()
            .collect())
    }

    async fn get_org_inventory(&self, org_id: &str, filters: &[(&str, &str)], _fetch_all: bool) -> Result<Vec<InventoryDevice>, SouthboundError> {
        self.check()?;
        let serial = filter_value(filters, "serial");
        let mac = filter_value(filters, "mac");
        let site_id = filter_value(filters, "site_id");
        Ok(lock(&self.inventory)
            .iter()
            .filter(|(owner, _)| owner == org_id)
            .map(|(_, d)| d)
            .filter(|d| serial.is_none_or(|s| d.serial.as_deref() == Some(s)))
            .filter(|d| mac.is_none_or(|m| d.mac == m))
            .filter(|d| site_id.is_none_or(|s| d.site_id.as_deref() == Some(s)))
            .cloned()
            .collect())
    }

    async fn get_site_device_stats(&self, site_id: &str, filters: &[(&str, &str)]) -> Result<Vec<DeviceStats>, SouthboundError> {
        self.check()?;
        let mac = filter_value(filters, "mac");
        Ok(lock(&self.stats)
            .iter()
            .filter(|(owner, s)| owner == site_id && mac.is_none_or(|m| s.mac == m))
            .map(|(_, s)| s.clone())
            .collect())
    }
}
