//! Velocloud REST (V2) API client
//!
//! Resources are addressed by logical id under `/api/sdwan/v2/`.

use crate::v2::models::*;
use crate::velocloud_trait::VelocloudV2Api;
use southbound_common::{AuthScheme, ClientConfig, HttpClient, SouthboundError, path_segment};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Page size requested from list endpoints
pub const DEFAULT_PAGE_LIMIT: u32 = 500;

/// Velocloud REST API client
#[derive(Debug, Clone)]
pub struct VelocloudV2Client {
    http: HttpClient,
}

impl VelocloudV2Client {
    /// Create a new REST client
    ///
    /// # Arguments
    /// * `base_url` - Orchestrator URL (e.g., "https://vco.example.net")
    /// * `token` - API token for authentication
    pub fn new(base_url: String, token: String) -> Result<Self, SouthboundError> {
        Self::from_config(&ClientConfig::new(base_url, token))
    }

    /// Create a REST client from a [`ClientConfig`]
    pub fn from_config(config: &ClientConfig) -> Result<Self, SouthboundError> {
        let http = HttpClient::from_config(config, AuthScheme::Token(config.token.clone()))?;
        Ok(Self { http })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Get an enterprise by logical id
    pub async fn get_enterprise(&self, logical_id: &str) -> Result<V2Enterprise, SouthboundError> {
        let path = format!("/api/sdwan/v2/enterprises/{}", segment(logical_id)?);
        debug!("Fetching enterprise {} from orchestrator", logical_id);
        self.http.get(&path).await
    }

    /// Get an edge by logical id
    ///
    /// # Arguments
    /// * `enterprise_logical_id` - Owning enterprise
    /// * `edge_logical_id` - Edge to fetch
    pub async fn get_edge(&self, enterprise_logical_id: &str, edge_logical_id: &str) -> Result<V2Edge, SouthboundError> {
        let path = format!(
            "/api/sdwan/v2/enterprises/{}/edges/{}",
            segment(enterprise_logical_id)?,
            segment(edge_logical_id)?
        );
        debug!("Fetching edge {} of enterprise {}", edge_logical_id, enterprise_logical_id);
        self.http.get(&path).await
    }

    /// List the edges of an enterprise
    ///
    /// # Arguments
    /// * `enterprise_logical_id` - Owning enterprise
    /// * `fetch_all` - If true, follow `nextPageLink` until `more` is false
    ///
    /// Paging stops early if the server hands back a cursor it already gave.
    pub async fn list_edges(&self, enterprise_logical_id: &str, fetch_all: bool) -> Result<Vec<V2Edge>, SouthboundError> {
        let base_path = format!("/api/sdwan/v2/enterprises/{}/edges", segment(enterprise_logical_id)?);
        let limit = DEFAULT_PAGE_LIMIT.to_string();
        let mut all_results = Vec::new();
        let mut cursor: Option<String> = None;
        let mut seen_cursors = HashSet::new();

        loop {
            let path = {
                let mut filters = vec![("limit", limit.as_str())];
                if let Some(next) = cursor.as_deref() {
                    filters.push(("nextPageLink", next));
                }
                self.http.with_query(&base_path, &filters)
            };
            debug!("Fetching edge page: {}", path);

            let page: V2Page<V2Edge> = self.http.get(&path).await?;
            all_results.extend(page.data);

            match page.metadata.next_cursor() {
                Some(next) if fetch_all => {
                    if !seen_cursors.insert(next.to_string()) {
                        warn!("Edge listing of {} repeated cursor {}, stopping", enterprise_logical_id, next);
                        break;
                    }
                    cursor = Some(next.to_string());
                }
                _ => break,
            }
        }

        Ok(all_results)
    }
}

#[async_trait::async_trait]
impl VelocloudV2Api for VelocloudV2Client {
    fn base_url(&self) -> &str {
        self.base_url()
    }

    async fn get_enterprise(&self, logical_id: &str) -> Result<V2Enterprise, SouthboundError> {
        self.get_enterprise(logical_id).await
    }

    async fn get_edge(&self, enterprise_logical_id: &str, edge_logical_id: &str) -> Result<V2Edge, SouthboundError> {
        self.get_edge(enterprise_logical_id, edge_logical_id).await
    }

    async fn list_edges(&self, enterprise_logical_id: &str, fetch_all: bool) -> Result<Vec<V2Edge>, SouthboundError> {
        self.list_edges(enterprise_logical_id, fetch_all).await
    }
}

fn segment(logical_id: &str) -> Result<String, SouthboundError> {
    path_segment(logical_id, "logical id")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_logical_id_rejected_before_request() {
        let client = VelocloudV2Client::new("https://vco.invalid".to_string(), "t".to_string()).unwrap();
        let err = client.get_enterprise("  ").await.unwrap_err();
        assert!(matches!(err, SouthboundError::InvalidRequest(_)));
    }
}
