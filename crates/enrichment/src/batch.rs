//! Batch inventory enrichment
//!
//! Runs a list of targets through one [`Enricher`] with a bound on in-flight
//! calls. Results come back in target order; a failing target is logged and
//! recorded without stopping the rest of the batch.

use crate::enricher_trait::Enricher;
use crate::error::EnrichmentError;
use crate::records::EnrichedRecord;
use futures::StreamExt;
use futures::stream;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Concurrency used when the caller asks for zero
pub const MIN_CONCURRENCY: usize = 1;

/// Object to enrich
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EnrichmentTarget {
    Enterprise { id: String },
    Edge { enterprise_id: String, edge_id: String },
}

impl std::fmt::Display for EnrichmentTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Enterprise { id } => write!(f, "enterprise {id}"),
            Self::Edge { enterprise_id, edge_id } => write!(f, "edge {edge_id} of {enterprise_id}"),
        }
    }
}

/// Result of enriching one target
#[derive(Debug)]
pub struct EnrichmentOutcome {
    pub target: EnrichmentTarget,
    pub result: Result<EnrichedRecord, EnrichmentError>,
}

impl EnrichmentOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Enrich a single target
pub async fn enrich_target(enricher: &dyn Enricher, target: &EnrichmentTarget) -> Result<EnrichedRecord, EnrichmentError> {
    match target {
        EnrichmentTarget::Enterprise { id } => enricher.enrich_enterprise(id).await.map(EnrichedRecord::Enterprise),
        EnrichmentTarget::Edge { enterprise_id, edge_id } => enricher
            .enrich_edge(enterprise_id, edge_id)
            .await
            .map(EnrichedRecord::Edge),
    }
}

/// Enrich `targets` with at most `concurrency` calls in flight
///
/// The returned outcomes are in the same order as `targets`.
pub async fn enrich_inventory(
    enricher: &dyn Enricher,
    targets: &[EnrichmentTarget],
    concurrency: usize,
) -> Vec<EnrichmentOutcome> {
    let vendor = enricher.vendor();
    info!("Enriching {} {} targets (concurrency {})", targets.len(), vendor, concurrency.max(MIN_CONCURRENCY));

    let outcomes: Vec<EnrichmentOutcome> = stream::iter(targets.iter().cloned())
        .map(|target| async move {
            let result = enrich_target(enricher, &target).await;
            if let Err(e) = &result {
                warn!("Failed to enrich {} {}: {}", vendor, target, e);
            }
            EnrichmentOutcome { target, result }
        })
        .buffered(concurrency.max(MIN_CONCURRENCY))
        .collect()
        .await;

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    info!("Enriched {} {} targets, {} failed", outcomes.len() - failed, vendor, failed);
    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{EdgeRecord, EnterpriseRecord, NOT_AVAILABLE, Vendor};
    use crate::velocloud::VelocloudHandle;
    use chrono::Utc;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use velocloud_client::MockVelocloudV2Client;

    fn enterprise(id: &str) -> EnrichmentTarget {
        EnrichmentTarget::Enterprise { id: id.to_string() }
    }

    /// Enricher that sleeps longer for earlier targets and tracks concurrency
    #[derive(Debug, Default)]
    struct SlowEnricher {
        in_flight: AtomicUsize,
        peak: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl Enricher for SlowEnricher {
        fn vendor(&self) -> Vendor {
            Vendor::Meraki
        }

        async fn enrich_enterprise(&self, enterprise_id: &str) -> Result<EnterpriseRecord, EnrichmentError> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            let delay: u64 = enterprise_id.parse().unwrap_or(0);
            tokio::time::sleep(Duration::from_millis(50 - delay * 10)).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            Ok(EnterpriseRecord {
                vendor: Vendor::Meraki,
                api_version: None,
                id: enterprise_id.to_string(),
                name: String::new(),
                account_number: NOT_AVAILABLE.to_string(),
                custom_info: None,
                enriched_at: Utc::now(),
            })
        }

        async fn enrich_edge(&self, _enterprise_id: &str, edge_id: &str) -> Result<EdgeRecord, EnrichmentError> {
            Err(EnrichmentError::EmptyResponse {
                kind: "edge",
                id: edge_id.to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_order_preserved_and_concurrency_bounded() {
        let enricher = SlowEnricher::default();
        let targets: Vec<_> = (0..5).map(|i| enterprise(&i.to_string())).collect();

        let outcomes = enrich_inventory(&enricher, &targets, 2).await;
        let ids: Vec<String> = outcomes
            .iter()
            .map(|o| match &o.result {
                Ok(EnrichedRecord::Enterprise(r)) => r.id.clone(),
                other => panic!("unexpected outcome {other:?}"),
            })
            .collect();
        assert_eq!(ids, vec!["0", "1", "2", "3", "4"]);
        assert!(enricher.peak.load(Ordering::SeqCst) <= 2);
    }

    #[tokio::test]
    async fn test_failures_recorded_and_batch_continues() {
        let mock = MockVelocloudV2Client::new("https://vco.test");
        mock.add_enterprise(MockVelocloudV2Client::enterprise(Some("ent-a"), Some("Acme"), None));
        mock.add_edge("ent-a", MockVelocloudV2Client::edge(Some("edge-1"), Some("hq"), None));
        let handle = VelocloudHandle::V2(Arc::new(mock));

        let targets = vec![
            enterprise("missing"),
            enterprise("ent-a"),
            EnrichmentTarget::Edge {
                enterprise_id: "ent-a".to_string(),
                edge_id: "edge-1".to_string(),
            },
            enterprise(""),
        ];
        let outcomes = enrich_inventory(&handle, &targets, 0).await;

        assert_eq!(outcomes.len(), 4);
        assert!(outcomes[0].result.as_ref().unwrap_err().is_not_found());
        assert!(outcomes[1].is_ok());
        assert!(matches!(outcomes[2].result, Ok(EnrichedRecord::Edge(_))));
        assert!(matches!(
            outcomes[3].result,
            Err(EnrichmentError::InvalidIdentifier { .. })
        ));
        assert_eq!(outcomes[3].target, enterprise(""));
    }

    #[test]
    fn test_target_yaml_shape() {
        let target: EnrichmentTarget = serde_json::from_value(serde_json::json!({
            "kind": "edge",
            "enterprise_id": "42",
            "edge_id": "7"
        }))
        .unwrap();
        assert_eq!(target.to_string(), "edge 7 of 42");
    }
}
