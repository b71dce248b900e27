//! FortiManagerApi trait for mocking

use crate::models::*;
use southbound_common::SouthboundError;

/// Trait for FortiManager JSON-RPC operations
///
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait FortiManagerApi: Send + Sync {
    /// Get the base URL
    fn base_url(&self) -> &str;

    // Session
    async fn login(&self) -> Result<(), SouthboundError>;
    async fn logout(&self) -> Result<(), SouthboundError>;

    // System
    async fn get_system_status(&self) -> Result<SystemStatus, SouthboundError>;

    // Device manager database
    async fn get_adoms(&self) -> Result<Vec<Adom>, SouthboundError>;
    async fn get_adom(&self, name: &str) -> Result<Adom, SouthboundError>;
    async fn get_devices(&self, adom: &str) -> Result<Vec<ManagedDevice>, SouthboundError>;
    async fn get_device(&self, adom: &str, name: &str) -> Result<ManagedDevice, SouthboundError>;
}
