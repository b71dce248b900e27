//! FortiManager enrichment
//!
//! ADOMs map onto enterprises and managed FortiGates onto edges. Session
//! clients log in lazily on the first call.

use crate::enricher_trait::Enricher;
use crate::error::{EnrichmentError, require_id};
use crate::records::{EdgeRecord, EnterpriseRecord, NOT_AVAILABLE, Vendor, or_not_available};
use chrono::Utc;
use fortimanager_client::FortiManagerApi;
use std::sync::Arc;

/// Enricher backed by the FortiManager JSON-RPC API
#[derive(Clone)]
pub struct FortiManagerEnricher {
    client: Arc<dyn FortiManagerApi>,
}

impl std::fmt::Debug for FortiManagerEnricher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FortiManagerEnricher")
            .field("base_url", &self.client.base_url())
            .finish()
    }
}

impl FortiManagerEnricher {
    pub fn new(client: Arc<dyn FortiManagerApi>) -> Self {
        Self { client }
    }

    /// Close the client session, if any
    pub async fn close(&self) -> Result<(), EnrichmentError> {
        Ok(self.client.logout().await?)
    }
}

#[async_trait::async_trait]
impl Enricher for FortiManagerEnricher {
    fn vendor(&self) -> Vendor {
        Vendor::FortiManager
    }

    async fn enrich_enterprise(&self, enterprise_id: &str) -> Result<EnterpriseRecord, EnrichmentError> {
        let name = require_id("ADOM", enterprise_id)?;
        let adom = self.client.get_adom(name).await?;
        Ok(EnterpriseRecord {
            vendor: Vendor::FortiManager,
            api_version: None,
            id: adom.oid.to_string(),
            name: adom.name,
            account_number: NOT_AVAILABLE.to_string(),
            custom_info: adom.desc.filter(|d| !d.is_empty()),
            enriched_at: Utc::now(),
        })
    }

    async fn enrich_edge(&self, enterprise_id: &str, edge_id: &str) -> Result<EdgeRecord, EnrichmentError> {
        let adom = require_id("ADOM", enterprise_id)?;
        let name = require_id("device", edge_id)?;
        let device = self.client.get_device(adom, name).await?;
        let software_version = or_not_available(device.firmware_version());
        Ok(EdgeRecord {
            vendor: Vendor::FortiManager,
            api_version: None,
            id: device.oid.to_string(),
            enterprise_id: adom.to_string(),
            name: device.name,
            serial_number: or_not_available(device.sn),
            model: or_not_available(device.platform_str),
            software_version,
            state: device
                .conn_status
                .map_or_else(|| NOT_AVAILABLE.to_string(), |s| s.as_str().to_string()),
            custom_info: device.desc.filter(|d| !d.is_empty()),
            enriched_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fortimanager_client::{ConnStatus, MockFortiManagerClient};

    fn enricher() -> (MockFortiManagerClient, FortiManagerEnricher) {
        let mock = MockFortiManagerClient::new("https://fmg.test");
        mock.add_adom(MockFortiManagerClient::adom("retail", 171, Some("Retail stores")));
        mock.add_device("retail", MockFortiManagerClient::device("FGT-STORE-12", 3012, ConnStatus::Down));
        let enricher = FortiManagerEnricher::new(Arc::new(mock.clone()));
        (mock, enricher)
    }

    #[tokio::test]
    async fn test_adom_record() {
        let (_, enricher) = enricher();
        let record = enricher.enrich_enterprise("retail").await.unwrap();
        assert_eq!(record.id, "171");
        assert_eq!(record.name, "retail");
        assert_eq!(record.custom_info.as_deref(), Some("Retail stores"));
    }

    #[tokio::test]
    async fn test_device_record() {
        let (_, enricher) = enricher();
        let edge = enricher.enrich_edge("retail", "FGT-STORE-12").await.unwrap();
        assert_eq!(edge.id, "3012");
        assert_eq!(edge.enterprise_id, "retail");
        assert_eq!(edge.model, "FortiGate-60F");
        assert_eq!(edge.software_version, "7.2.5");
        assert_eq!(edge.state, "down");
    }

    #[tokio::test]
    async fn test_device_in_other_adom_not_found() {
        let (_, enricher) = enricher();
        let err = enricher.enrich_edge("root", "FGT-STORE-12").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_close_logs_out() {
        let (mock, enricher) = enricher();
        mock.login().await.unwrap();
        enricher.close().await.unwrap();
        assert!(!mock.is_logged_in());
    }
}
