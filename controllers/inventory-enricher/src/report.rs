//! JSON report written to stdout

use enrichment::{EdgeRecord, EnrichedRecord, EnrichmentOutcome, EnrichmentTarget, EnterpriseRecord, Vendor};
use serde::Serialize;

/// A target that could not be enriched
#[derive(Debug, Clone, Serialize)]
pub struct Failure {
    pub source: String,
    pub vendor: Vendor,
    pub target: EnrichmentTarget,
    pub error: String,
    pub not_found: bool,
}

/// Everything enriched in one run
#[derive(Debug, Default, Serialize)]
pub struct Report {
    pub enterprises: Vec<EnterpriseRecord>,
    pub edges: Vec<EdgeRecord>,
    pub failures: Vec<Failure>,
}

impl Report {
    /// File the outcomes of one source
    pub fn record(&mut self, source: &str, vendor: Vendor, outcomes: Vec<EnrichmentOutcome>) {
        for outcome in outcomes {
            match outcome.result {
                Ok(EnrichedRecord::Enterprise(record)) => self.enterprises.push(record),
                Ok(EnrichedRecord::Edge(record)) => self.edges.push(record),
                Err(error) => self.failures.push(Failure {
                    source: source.to_string(),
                    vendor,
                    target: outcome.target,
                    not_found: error.is_not_found(),
                    error: error.to_string(),
                }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enrichment::{MerakiEnricher, enrich_inventory};
    use meraki_client::MockMerakiClient;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_report_shape() {
        let mock = MockMerakiClient::new("https://api.meraki.test");
        mock.add_organization(MockMerakiClient::organization("549236", "Acme Retail"));
        mock.add_device("549236", MockMerakiClient::device("Q2QN-9J8L-SLPD", Some("branch-mx"), "MX68"));
        let enricher = MerakiEnricher::new(Arc::new(mock));

        let targets = vec![
            EnrichmentTarget::Enterprise { id: "549236".to_string() },
            EnrichmentTarget::Edge {
                enterprise_id: "549236".to_string(),
                edge_id: "Q2QN-9J8L-SLPD".to_string(),
            },
            EnrichmentTarget::Enterprise { id: "1".to_string() },
        ];
        let outcomes = enrich_inventory(&enricher, &targets, 2).await;

        let mut report = Report::default();
        report.record("meraki-0", Vendor::Meraki, outcomes);
        assert_eq!(report.enterprises.len(), 1);
        assert_eq!(report.edges.len(), 1);
        assert_eq!(report.failures.len(), 1);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["edges"][0]["model"], json!("MX68"));
        assert_eq!(value["failures"][0]["source"], json!("meraki-0"));
        assert_eq!(value["failures"][0]["vendor"], json!("meraki"));
        assert_eq!(value["failures"][0]["target"], json!({"kind": "enterprise", "id": "1"}));
        assert_eq!(value["failures"][0]["not_found"], json!(true));
    }
}
