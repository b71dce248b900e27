//! MistApi trait for mocking
//!
//! The concrete MistClient implements this trait, and tests can use mock implementations.

use crate::models::*;
use southbound_common::SouthboundError;

/// Trait for Mist API operations
///
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait MistApi: Send + Sync {
    /// Get the base URL
    fn base_url(&self) -> &str;

    async fn get_self(&self) -> Result<SelfInfo, SouthboundError>;

    // Organizations
    async fn get_org(&self, org_id: &str) -> Result<Org, SouthboundError>;
    async fn get_org_sites(&self, org_id: &str) -> Result<Vec<Site>, SouthboundError>;
    async fn get_org_inventory(&self, org_id: &str, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<InventoryDevice>, SouthboundError>;

    // Sites
    async fn get_site_device_stats(&self, site_id: &str, filters: &[(&str, &str)]) -> Result<Vec<DeviceStats>, SouthboundError>;
}
