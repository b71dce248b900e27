//! Enricher trait
//!
//! Each vendor source implements this trait so the batch runner can enrich
//! targets without knowing which API it talks to.

use crate::error::EnrichmentError;
use crate::records::{EdgeRecord, EnterpriseRecord, Vendor};

/// Builds enrichment records from one vendor source
#[async_trait::async_trait]
pub trait Enricher: Send + Sync {
    /// Vendor the records come from
    fn vendor(&self) -> Vendor;

    /// Summarize an enterprise (organization, ADOM, ...)
    async fn enrich_enterprise(&self, enterprise_id: &str) -> Result<EnterpriseRecord, EnrichmentError>;

    /// Summarize an edge device belonging to `enterprise_id`
    async fn enrich_edge(&self, enterprise_id: &str, edge_id: &str) -> Result<EdgeRecord, EnrichmentError>;
}
