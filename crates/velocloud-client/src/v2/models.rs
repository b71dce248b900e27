//! Velocloud REST (V2) API models

use crate::models::{ActivationState, EdgeState};
use serde::{Deserialize, Serialize};

/// Paginated collection wrapper used by `/api/sdwan/v2` list endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct V2Page<T> {
    #[serde(rename = "_metadata")]
    pub metadata: V2PageMetadata,
    pub data: Vec<T>,
}

/// Paging metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct V2PageMetadata {
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub more: bool,
    #[serde(default)]
    pub next_page_link: Option<String>,
}

impl V2PageMetadata {
    /// Cursor for the next page, if the server says there is one
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str> {
        if self.more {
            self.next_page_link.as_deref().filter(|link| !link.is_empty())
        } else {
            None
        }
    }
}

/// Enterprise as returned by `/api/sdwan/v2/enterprises/{logicalId}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct V2Enterprise {
    pub logical_id: Option<String>,
    pub name: Option<String>,
    pub account_number: Option<String>,
    pub domain: Option<String>,
    pub description: Option<String>,
    pub created: Option<String>,
    pub modified: Option<String>,
}

/// Reference to the site an edge is installed at
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct V2SiteRef {
    pub name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

/// Edge as returned by `/api/sdwan/v2/enterprises/{e}/edges/{edge}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct V2Edge {
    pub logical_id: Option<String>,
    pub name: Option<String>,
    pub custom_info: Option<String>,
    pub serial_number: Option<String>,
    pub model_number: Option<String>,
    pub software_version: Option<String>,
    pub edge_state: Option<EdgeState>,
    pub activation_state: Option<ActivationState>,
    pub site: Option<V2SiteRef>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_cursor() {
        let page: V2Page<V2Edge> = serde_json::from_value(json!({
            "_metadata": {"limit": 2, "more": true, "nextPageLink": "eyJvZmZzZXQiOjJ9"},
            "data": [{"logicalId": "a"}, {"logicalId": "b"}]
        }))
        .unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.metadata.next_cursor(), Some("eyJvZmZzZXQiOjJ9"));

        let last = V2PageMetadata {
            limit: Some(2),
            more: false,
            next_page_link: Some("stale".to_string()),
        };
        assert_eq!(last.next_cursor(), None);
    }

    #[test]
    fn test_enterprise_fields() {
        let ent: V2Enterprise = serde_json::from_value(json!({
            "logicalId": "b7a4c5c2-0c7e-4b0e-9d4a-3f0b7f2e8a11",
            "name": "Acme Corp",
            "accountNumber": "ACME-001"
        }))
        .unwrap();
        assert_eq!(ent.account_number.as_deref(), Some("ACME-001"));
        assert_eq!(ent.domain, None);
    }
}
