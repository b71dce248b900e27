//! Meraki enrichment
//!
//! Organizations map onto enterprises; devices, looked up by serial within
//! an organization, map onto edges with their reported status.

use crate::enricher_trait::Enricher;
use crate::error::{EnrichmentError, require_id};
use crate::records::{EdgeRecord, EnterpriseRecord, NOT_AVAILABLE, Vendor, or_not_available};
use chrono::Utc;
use meraki_client::MerakiApi;
use std::sync::Arc;
use tracing::debug;

/// Enricher backed by the Meraki Dashboard API
#[derive(Clone)]
pub struct MerakiEnricher {
    client: Arc<dyn MerakiApi>,
}

impl std::fmt::Debug for MerakiEnricher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MerakiEnricher")
            .field("base_url", &self.client.base_url())
            .finish()
    }
}

impl MerakiEnricher {
    pub fn new(client: Arc<dyn MerakiApi>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Enricher for MerakiEnricher {
    fn vendor(&self) -> Vendor {
        Vendor::Meraki
    }

    async fn enrich_enterprise(&self, enterprise_id: &str) -> Result<EnterpriseRecord, EnrichmentError> {
        let org_id = require_id("organization", enterprise_id)?;
        let org = self.client.get_organization(org_id).await?;
        Ok(EnterpriseRecord {
            vendor: Vendor::Meraki,
            api_version: None,
            id: org.id,
            name: org.name,
            account_number: NOT_AVAILABLE.to_string(),
            custom_info: org.licensing.map(|l| l.model),
            enriched_at: Utc::now(),
        })
    }

    async fn enrich_edge(&self, enterprise_id: &str, edge_id: &str) -> Result<EdgeRecord, EnrichmentError> {
        let org_id = require_id("organization", enterprise_id)?;
        let serial = require_id("device", edge_id)?;
        let filters = [("serials[]", serial)];

        let device = self
            .client
            .get_organization_devices(org_id, &filters, false)
            .await?
            .into_iter()
            .find(|d| d.serial == serial)
            .ok_or_else(|| EnrichmentError::EmptyResponse {
                kind: "device",
                id: serial.to_string(),
            })?;
        let status = self
            .client
            .get_organization_devices_statuses(org_id, &filters, false)
            .await?
            .into_iter()
            .find(|s| s.serial == serial);
        debug!("Device {} status: {:?}", serial, status.as_ref().map(|s| s.status.as_str()));

        Ok(EdgeRecord {
            vendor: Vendor::Meraki,
            api_version: None,
            id: device.serial.clone(),
            enterprise_id: org_id.to_string(),
            name: device.name.unwrap_or_default(),
            serial_number: device.serial,
            model: device.model,
            software_version: or_not_available(device.firmware),
            state: status.map_or_else(|| NOT_AVAILABLE.to_string(), |s| s.status.as_str().to_string()),
            custom_info: (!device.tags.is_empty()).then(|| device.tags.join(" ")),
            enriched_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meraki_client::{DeviceStatusValue, MockMerakiClient};

    fn enricher() -> MerakiEnricher {
        let mock = MockMerakiClient::new("https://api.meraki.test");
        mock.add_organization(MockMerakiClient::organization("549236", "Acme Retail"));
        mock.add_device("549236", MockMerakiClient::device("Q2QN-9J8L-SLPD", Some("branch-mx"), "MX68"));
        mock.add_device("549236", MockMerakiClient::device("Q2QN-0000-0001", None, "MR36"));
        mock.add_status("549236", MockMerakiClient::status("Q2QN-9J8L-SLPD", DeviceStatusValue::Alerting));
        MerakiEnricher::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn test_organization_record() {
        let record = enricher().enrich_enterprise("549236").await.unwrap();
        assert_eq!(record.vendor, Vendor::Meraki);
        assert_eq!(record.name, "Acme Retail");
        assert_eq!(record.account_number, NOT_AVAILABLE);
        assert_eq!(record.custom_info.as_deref(), Some("co-term"));
    }

    #[tokio::test]
    async fn test_device_record_with_status() {
        let edge = enricher().enrich_edge("549236", "Q2QN-9J8L-SLPD").await.unwrap();
        assert_eq!(edge.name, "branch-mx");
        assert_eq!(edge.model, "MX68");
        assert_eq!(edge.software_version, "wired-18-107-2");
        assert_eq!(edge.state, "alerting");
    }

    #[tokio::test]
    async fn test_device_without_status() {
        let edge = enricher().enrich_edge("549236", "Q2QN-0000-0001").await.unwrap();
        assert_eq!(edge.name, "");
        assert_eq!(edge.state, NOT_AVAILABLE);
    }

    #[tokio::test]
    async fn test_unknown_device_and_org() {
        let enricher = enricher();
        let err = enricher.enrich_edge("549236", "Q2QN-FFFF-FFFF").await.unwrap_err();
        assert!(matches!(err, EnrichmentError::EmptyResponse { kind: "device", .. }));

        let err = enricher.enrich_enterprise("1").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
