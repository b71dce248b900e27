//! Velocloud client traits for mocking
//!
//! These traits abstract the portal (V1) and REST (V2) clients so that the
//! enrichment dispatcher can be unit tested against in-memory mocks.

use crate::v1::models::{LegacyId, V1Edge, V1Enterprise};
use crate::v2::models::{V2Edge, V2Enterprise};
use southbound_common::SouthboundError;

/// Portal (V1) API operations
///
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait VelocloudV1Api: Send + Sync {
    /// Get the base URL
    fn base_url(&self) -> &str;

    async fn get_enterprise(&self, id: &LegacyId) -> Result<Option<V1Enterprise>, SouthboundError>;
    async fn get_edge(&self, enterprise_id: Option<i64>, id: &LegacyId) -> Result<Option<V1Edge>, SouthboundError>;
    async fn get_enterprise_edges(&self, enterprise_id: i64) -> Result<Vec<V1Edge>, SouthboundError>;
}

/// REST (V2) API operations
#[async_trait::async_trait]
pub trait VelocloudV2Api: Send + Sync {
    /// Get the base URL
    fn base_url(&self) -> &str;

    async fn get_enterprise(&self, logical_id: &str) -> Result<V2Enterprise, SouthboundError>;
    async fn get_edge(&self, enterprise_logical_id: &str, edge_logical_id: &str) -> Result<V2Edge, SouthboundError>;
    async fn list_edges(&self, enterprise_logical_id: &str, fetch_all: bool) -> Result<Vec<V2Edge>, SouthboundError>;
}
