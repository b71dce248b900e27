//! MerakiApi trait for mocking
//!
//! The concrete MerakiClient implements this trait, and tests can use mock implementations.

use crate::models::*;
use southbound_common::SouthboundError;

/// Trait for Meraki Dashboard API operations
///
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait MerakiApi: Send + Sync {
    /// Get the base URL
    fn base_url(&self) -> &str;

    // Organizations
    async fn get_organizations(&self) -> Result<Vec<Organization>, SouthboundError>;
    async fn get_organization(&self, org_id: &str) -> Result<Organization, SouthboundError>;
    async fn get_organization_networks(&self, org_id: &str, fetch_all: bool) -> Result<Vec<Network>, SouthboundError>;

    // Devices
    async fn get_organization_devices(&self, org_id: &str, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Device>, SouthboundError>;
    async fn get_organization_devices_statuses(&self, org_id: &str, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<DeviceStatus>, SouthboundError>;
    async fn get_device(&self, serial: &str) -> Result<Device, SouthboundError>;
}
