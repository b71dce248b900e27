//! Velocloud enrichment and API version dispatch
//!
//! A [`VelocloudHandle`] holds one of three client shapes:
//!
//! - a REST (V2) client, addressed by logical ids
//! - a portal (V1) client, addressed by legacy numeric or opaque ids
//! - a [`VersionedVelocloudClient`], which wraps either one behind a version tag
//!
//! All three shapes produce the same records and report failures the same
//! way: schema validation errors propagate as
//! [`EnrichmentError::Southbound`], and a V1 call that answers with no object
//! is an [`EnrichmentError::EmptyResponse`].

use crate::enricher_trait::Enricher;
use crate::error::{EnrichmentError, require_id};
use crate::records::{EdgeRecord, EnterpriseRecord, NOT_AVAILABLE, Vendor, or_not_available};
use chrono::Utc;
use std::sync::Arc;
use tracing::debug;
use velocloud_client::{
    ApiVersion, LegacyId, V1Edge, V1Enterprise, V2Edge, V2Enterprise, VelocloudV1Api, VelocloudV2Api,
    VersionedBackend, VersionedVelocloudClient,
};

/// Velocloud client of any supported shape
#[derive(Clone)]
pub enum VelocloudHandle {
    V1(Arc<dyn VelocloudV1Api>),
    V2(Arc<dyn VelocloudV2Api>),
    Versioned(VersionedVelocloudClient),
}

impl std::fmt::Debug for VelocloudHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::V1(client) => f.debug_tuple("V1").field(&client.base_url()).finish(),
            Self::V2(client) => f.debug_tuple("V2").field(&client.base_url()).finish(),
            Self::Versioned(client) => f.debug_tuple("Versioned").field(client).finish(),
        }
    }
}

impl VelocloudHandle {
    /// API generation the handle talks to
    pub fn version(&self) -> ApiVersion {
        match self {
            Self::V1(_) => ApiVersion::V1,
            Self::V2(_) => ApiVersion::V2,
            Self::Versioned(client) => client.version(),
        }
    }

    /// Summarize an enterprise
    ///
    /// V2 treats `enterprise_id` as a logical id; V1 parses it as a
    /// [`LegacyId`] (all digits is a numeric id, anything else a logical id).
    pub async fn enrich_enterprise(&self, enterprise_id: &str) -> Result<EnterpriseRecord, EnrichmentError> {
        let enterprise_id = require_id("enterprise", enterprise_id)?;
        match self {
            Self::V2(client) => v2_enterprise(client.as_ref(), enterprise_id).await,
            Self::V1(client) => v1_enterprise(client.as_ref(), enterprise_id).await,
            Self::Versioned(client) => {
                debug!("Dispatching enterprise {} to the {} backend", enterprise_id, client.version());
                match client.backend() {
                    VersionedBackend::V1(inner) => v1_enterprise(inner.as_ref(), enterprise_id).await,
                    VersionedBackend::V2(inner) => v2_enterprise(inner.as_ref(), enterprise_id).await,
                }
            }
        }
    }

    /// Summarize an edge of an enterprise
    pub async fn enrich_edge(&self, enterprise_id: &str, edge_id: &str) -> Result<EdgeRecord, EnrichmentError> {
        let enterprise_id = require_id("enterprise", enterprise_id)?;
        let edge_id = require_id("edge", edge_id)?;
        match self {
            Self::V2(client) => v2_edge(client.as_ref(), enterprise_id, edge_id).await,
            Self::V1(client) => v1_edge(client.as_ref(), enterprise_id, edge_id).await,
            Self::Versioned(client) => {
                debug!("Dispatching edge {} to the {} backend", edge_id, client.version());
                match client.backend() {
                    VersionedBackend::V1(inner) => v1_edge(inner.as_ref(), enterprise_id, edge_id).await,
                    VersionedBackend::V2(inner) => v2_edge(inner.as_ref(), enterprise_id, edge_id).await,
                }
            }
        }
    }

    /// Summarize every edge of an enterprise
    ///
    /// V1 lists by numeric enterprise id only, so an opaque id is first
    /// resolved through `getEnterprise`.
    pub async fn enrich_enterprise_edges(&self, enterprise_id: &str) -> Result<Vec<EdgeRecord>, EnrichmentError> {
        let enterprise_id = require_id("enterprise", enterprise_id)?;
        match self {
            Self::V2(client) => v2_enterprise_edges(client.as_ref(), enterprise_id).await,
            Self::V1(client) => v1_enterprise_edges(client.as_ref(), enterprise_id).await,
            Self::Versioned(client) => {
                debug!("Dispatching edges of enterprise {} to the {} backend", enterprise_id, client.version());
                match client.backend() {
                    VersionedBackend::V1(inner) => v1_enterprise_edges(inner.as_ref(), enterprise_id).await,
                    VersionedBackend::V2(inner) => v2_enterprise_edges(inner.as_ref(), enterprise_id).await,
                }
            }
        }
    }
}

#[async_trait::async_trait]
impl Enricher for VelocloudHandle {
    fn vendor(&self) -> Vendor {
        Vendor::Velocloud
    }

    async fn enrich_enterprise(&self, enterprise_id: &str) -> Result<EnterpriseRecord, EnrichmentError> {
        self.enrich_enterprise(enterprise_id).await
    }

    async fn enrich_edge(&self, enterprise_id: &str, edge_id: &str) -> Result<EdgeRecord, EnrichmentError> {
        self.enrich_edge(enterprise_id, edge_id).await
    }
}

fn legacy_id(kind: &'static str, raw: &str) -> Result<LegacyId, EnrichmentError> {
    LegacyId::parse(raw).map_err(|_| EnrichmentError::InvalidIdentifier {
        kind,
        id: raw.to_string(),
    })
}

// V2

async fn v2_enterprise(client: &dyn VelocloudV2Api, logical_id: &str) -> Result<EnterpriseRecord, EnrichmentError> {
    let enterprise = client.get_enterprise(logical_id).await?;
    Ok(enterprise_from_v2(enterprise))
}

async fn v2_edge(client: &dyn VelocloudV2Api, enterprise_id: &str, edge_id: &str) -> Result<EdgeRecord, EnrichmentError> {
    let edge = client.get_edge(enterprise_id, edge_id).await?;
    Ok(edge_from_v2(enterprise_id, edge))
}

async fn v2_enterprise_edges(client: &dyn VelocloudV2Api, enterprise_id: &str) -> Result<Vec<EdgeRecord>, EnrichmentError> {
    let edges = client.list_edges(enterprise_id, true).await?;
    Ok(edges.into_iter().map(|edge| edge_from_v2(enterprise_id, edge)).collect())
}

/// Map a REST enterprise; missing id and name become empty strings
pub fn enterprise_from_v2(enterprise: V2Enterprise) -> EnterpriseRecord {
    EnterpriseRecord {
        vendor: Vendor::Velocloud,
        api_version: Some(ApiVersion::V2),
        id: enterprise.logical_id.unwrap_or_default(),
        name: enterprise.name.unwrap_or_default(),
        account_number: or_not_available(enterprise.account_number),
        custom_info: enterprise.description,
        enriched_at: Utc::now(),
    }
}

/// Map a REST edge; missing id and name become empty strings
pub fn edge_from_v2(enterprise_id: &str, edge: V2Edge) -> EdgeRecord {
    EdgeRecord {
        vendor: Vendor::Velocloud,
        api_version: Some(ApiVersion::V2),
        id: edge.logical_id.unwrap_or_default(),
        enterprise_id: enterprise_id.to_string(),
        name: edge.name.unwrap_or_default(),
        serial_number: or_not_available(edge.serial_number),
        model: or_not_available(edge.model_number),
        software_version: or_not_available(edge.software_version),
        state: edge
            .edge_state
            .map_or_else(|| NOT_AVAILABLE.to_string(), |s| s.as_str().to_string()),
        custom_info: edge.custom_info,
        enriched_at: Utc::now(),
    }
}

// V1

async fn v1_enterprise(client: &dyn VelocloudV1Api, raw_id: &str) -> Result<EnterpriseRecord, EnrichmentError> {
    let id = legacy_id("enterprise", raw_id)?;
    let enterprise = client
        .get_enterprise(&id)
        .await?
        .ok_or_else(|| EnrichmentError::EmptyResponse {
            kind: "enterprise",
            id: raw_id.to_string(),
        })?;
    Ok(enterprise_from_v1(enterprise))
}

async fn v1_edge(client: &dyn VelocloudV1Api, enterprise_id: &str, raw_id: &str) -> Result<EdgeRecord, EnrichmentError> {
    let owner = legacy_id("enterprise", enterprise_id)?;
    let id = legacy_id("edge", raw_id)?;
    let edge = client
        .get_edge(owner.as_numeric(), &id)
        .await?
        .ok_or_else(|| EnrichmentError::EmptyResponse {
            kind: "edge",
            id: raw_id.to_string(),
        })?;
    Ok(edge_from_v1(enterprise_id, edge))
}

async fn v1_enterprise_edges(client: &dyn VelocloudV1Api, raw_id: &str) -> Result<Vec<EdgeRecord>, EnrichmentError> {
    let numeric = match legacy_id("enterprise", raw_id)? {
        LegacyId::Numeric(n) => n,
        opaque @ LegacyId::Opaque(_) => {
            client
                .get_enterprise(&opaque)
                .await?
                .ok_or_else(|| EnrichmentError::EmptyResponse {
                    kind: "enterprise",
                    id: raw_id.to_string(),
                })?
                .id
        }
    };
    let edges = client.get_enterprise_edges(numeric).await?;
    Ok(edges.into_iter().map(|edge| edge_from_v1(raw_id, edge)).collect())
}

/// Map a portal enterprise; the portal API has no account number
pub fn enterprise_from_v1(enterprise: V1Enterprise) -> EnterpriseRecord {
    EnterpriseRecord {
        vendor: Vendor::Velocloud,
        api_version: Some(ApiVersion::V1),
        id: enterprise.id.to_string(),
        name: enterprise.name.unwrap_or_default(),
        account_number: NOT_AVAILABLE.to_string(),
        custom_info: enterprise.description,
        enriched_at: Utc::now(),
    }
}

/// Map a portal edge
///
/// The owning enterprise comes from the edge itself when reported, otherwise
/// from the id the caller asked with.
pub fn edge_from_v1(enterprise_id: &str, edge: V1Edge) -> EdgeRecord {
    EdgeRecord {
        vendor: Vendor::Velocloud,
        api_version: Some(ApiVersion::V1),
        id: edge.id.to_string(),
        enterprise_id: edge
            .enterprise_id
            .map_or_else(|| enterprise_id.to_string(), |id| id.to_string()),
        name: edge.name.unwrap_or_default(),
        serial_number: or_not_available(edge.serial_number),
        model: or_not_available(edge.model_number),
        software_version: or_not_available(edge.software_version),
        state: edge
            .edge_state
            .map_or_else(|| NOT_AVAILABLE.to_string(), |s| s.as_str().to_string()),
        custom_info: edge.custom_info,
        enriched_at: Utc::now(),
    }
}
