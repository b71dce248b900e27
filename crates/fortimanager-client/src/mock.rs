//! Mock FortiManagerClient for unit testing

use crate::fortimanager_trait::FortiManagerApi;
use crate::models::*;
use southbound_common::SouthboundError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Mock FortiManagerClient for testing
///
/// ADOMs are keyed by name; devices by (ADOM, device name).
#[derive(Debug, Clone)]
pub struct MockFortiManagerClient {
    base_url: String,
    adoms: Arc<Mutex<HashMap<String, Adom>>>,
    devices: Arc<Mutex<HashMap<(String, String), ManagedDevice>>>,
    logged_in: Arc<Mutex<bool>>,
    validation_failure: Arc<Mutex<Option<String>>>,
}

impl MockFortiManagerClient {
    /// Create a new mock client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            adoms: Arc::new(Mutex::new(HashMap::new())),
            devices: Arc::new(Mutex::new(HashMap::new())),
            logged_in: Arc::new(Mutex::new(false)),
            validation_failure: Arc::new(Mutex::new(None)),
        }
    }

    /// Add an ADOM to the mock store (for test setup)
    pub fn add_adom(&self, adom: Adom) {
        lock(&self.adoms).insert(adom.name.clone(), adom);
    }

    /// Add a device to an ADOM (for test setup)
    pub fn add_device(&self, adom: impl Into<String>, device: ManagedDevice) {
        lock(&self.devices).insert((adom.into(), device.name.clone()), device);
    }

    /// Make every subsequent call fail schema validation
    pub fn fail_validation(&self, message: impl Into<String>) {
        *lock(&self.validation_failure) = Some(message.into());
    }

    /// Whether a session is currently open
    pub fn is_logged_in(&self) -> bool {
        *lock(&self.logged_in)
    }

    fn check(&self) -> Result<(), SouthboundError> {
        match lock(&self.validation_failure).as_ref() {
            Some(message) => Err(SouthboundError::Validation(message.clone())),
            None => Ok(()),
        }
    }

    /// Build a minimal ADOM fixture
    pub fn adom(name: &str, oid: u64, desc: Option<&str>) -> Adom {
        Adom {
            name: name.to_string(),
            oid,
            desc: desc.map(str::to_string),
            state: Some(1),
            os_ver: Some(7),
            mr: Some(2),
        }
    }

    /// Build a minimal device fixture
    pub fn device(name: &str, oid: u64, conn_status: ConnStatus) -> ManagedDevice {
        ManagedDevice {
            name: name.to_string(),
            oid,
            sn: Some(format!("FGT60F{oid:010}")),
            platform_str: Some("FortiGate-60F".to_string()),
            hostname: Some(name.to_lowercase()),
            ip: Some("10.0.0.1".to_string()),
            desc: None,
            os_ver: Some(7),
            mr: Some(2),
            patch: Some(5),
            build: Some(1517),
            conn_status: Some(conn_status),
            conf_status: Some(1),
        }
    }
}

#[async_trait::async_trait]
impl FortiManagerApi for MockFortiManagerClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn login(&self) -> Result<(), SouthboundError> {
        *lock(&self.logged_in) = true;
        Ok(())
    }

    async fn logout(&self) -> Result<(), SouthboundError> {
        *lock(&self.logged_in) = false;
        Ok(())
    }

    async fn get_system_status(&self) -> Result<SystemStatus, SouthboundError> {
        self.check()?;
        Ok(SystemStatus {
            hostname: Some("fmg-mock".to_string()),
            version: Some("v7.4.2-build2397".to_string()),
            serial_number: Some("FMG-VM0000000001".to_string()),
            platform_type: Some("FMG-VM64".to_string()),
            admin_domain_configuration: Some("Enabled".to_string()),
        })
    }

    async fn get_adoms(&self) -> Result<Vec<Adom>, SouthboundError> {
        self.check()?;
        Ok(lock(&self.adoms).values().cloned().collect())
    }

    async fn get_adom(&self, name: &str) -> Result<Adom, SouthboundError> {
        self.check()?;
        lock(&self.adoms)
            .get(name)
            .cloned()
            .ok_or_else(|| SouthboundError::NotFound(format!("ADOM {name} not found")))
    }

    async fn get_devices(&self, adom: &str) -> Result<Vec<ManagedDevice>, SouthboundError> {
        self.check()?;
        Ok(lock(&self.devices)
            .iter()
            .filter(|((owner, _), _)| owner == adom)
            .map(|(_, device)| device.clone())
            .collect())
    }

    async fn get_device(&self, adom: &str, name: &str) -> Result<ManagedDevice, SouthboundError> {
        self.check()?;
        lock(&self.devices)
            .get(&(adom.to_string(), name.to_string()))
            .cloned()
            .ok_or_else(|| SouthboundError::NotFound(format!("Device {name} not found in ADOM {adom}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_devices_scoped_to_adom() {
        let mock = MockFortiManagerClient::new("https://fmg.test");
        mock.add_adom(MockFortiManagerClient::adom("root", 3, None));
        mock.add_device("root", MockFortiManagerClient::device("FGT-A", 101, ConnStatus::Up));
        mock.add_device("branch", MockFortiManagerClient::device("FGT-B", 102, ConnStatus::Down));

        assert_eq!(mock.get_devices("root").await.unwrap().len(), 1);
        assert!(mock.get_device("root", "FGT-B").await.unwrap_err().is_not_found());

        mock.login().await.unwrap();
        assert!(mock.is_logged_in());
        mock.logout().await.unwrap();
        assert!(!mock.is_logged_in());
    }
}
