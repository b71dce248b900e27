//! Mist enrichment
//!
//! Organizations map onto enterprises. Devices are looked up in the org
//! inventory by serial; when assigned to a site, the site's device
//! statistics supply the running firmware and connection state.

use crate::enricher_trait::Enricher;
use crate::error::{EnrichmentError, require_id};
use crate::records::{EdgeRecord, EnterpriseRecord, NOT_AVAILABLE, Vendor, or_not_available};
use chrono::Utc;
use mist_client::{DeviceStats, InventoryDevice, MistApi};
use std::sync::Arc;
use tracing::debug;

/// Enricher backed by the Mist cloud API
#[derive(Clone)]
pub struct MistEnricher {
    client: Arc<dyn MistApi>,
}

impl std::fmt::Debug for MistEnricher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MistEnricher")
            .field("base_url", &self.client.base_url())
            .finish()
    }
}

impl MistEnricher {
    pub fn new(client: Arc<dyn MistApi>) -> Self {
        Self { client }
    }

    async fn site_stats(&self, device: &InventoryDevice) -> Result<Option<DeviceStats>, EnrichmentError> {
        let Some(site_id) = device.site_id.as_deref() else {
            debug!("Device {} is not assigned to a site", device.mac);
            return Ok(None);
        };
        let stats = self
            .client
            .get_site_device_stats(site_id, &[("mac", device.mac.as_str())])
            .await?;
        Ok(stats.into_iter().find(|s| s.mac == device.mac))
    }
}

fn inventory_state(device: &InventoryDevice) -> String {
    match device.connected {
        Some(true) => "connected".to_string(),
        Some(false) => "disconnected".to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

#[async_trait::async_trait]
impl Enricher for MistEnricher {
    fn vendor(&self) -> Vendor {
        Vendor::Mist
    }

    async fn enrich_enterprise(&self, enterprise_id: &str) -> Result<EnterpriseRecord, EnrichmentError> {
        let org_id = require_id("org", enterprise_id)?;
        let org = self.client.get_org(org_id).await?;
        Ok(EnterpriseRecord {
            vendor: Vendor::Mist,
            api_version: None,
            id: org.id,
            name: org.name,
            account_number: NOT_AVAILABLE.to_string(),
            custom_info: org.msp_id,
            enriched_at: Utc::now(),
        })
    }

    async fn enrich_edge(&self, enterprise_id: &str, edge_id: &str) -> Result<EdgeRecord, EnrichmentError> {
        let org_id = require_id("org", enterprise_id)?;
        let serial = require_id("device", edge_id)?;

        let device = self
            .client
            .get_org_inventory(org_id, &[("serial", serial)], false)
            .await?
            .into_iter()
            .find(|d| d.serial.as_deref() == Some(serial))
            .ok_or_else(|| EnrichmentError::EmptyResponse {
                kind: "device",
                id: serial.to_string(),
            })?;
        let stats = self.site_stats(&device).await?;

        let state = stats
            .as_ref()
            .and_then(|s| s.status.clone())
            .unwrap_or_else(|| inventory_state(&device));
        let name = stats
            .as_ref()
            .and_then(|s| s.name.clone())
            .or_else(|| device.name.clone())
            .unwrap_or_default();
        Ok(EdgeRecord {
            vendor: Vendor::Mist,
            api_version: None,
            id: device.mac.clone(),
            enterprise_id: org_id.to_string(),
            name,
            serial_number: serial.to_string(),
            model: or_not_available(device.model),
            software_version: or_not_available(stats.and_then(|s| s.version)),
            state,
            custom_info: device.site_id,
            enriched_at: Utc::now(),
        })
    }
}
