//! Mock Velocloud clients for unit testing
//!
//! In-memory implementations of [`VelocloudV1Api`] and [`VelocloudV2Api`]
//! that can be used in unit tests without a running orchestrator. Each mock
//! records the methods called on it so tests can assert which API
//! generation a dispatcher used.

use crate::v1::models::{LegacyId, V1Edge, V1Enterprise};
use crate::v2::models::{V2Edge, V2Enterprise};
use crate::velocloud_trait::{VelocloudV1Api, VelocloudV2Api};
use southbound_common::SouthboundError;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Shared failure injection and call recording
#[derive(Debug, Clone, Default)]
struct MockState {
    calls: Arc<Mutex<Vec<String>>>,
    validation_failure: Arc<Mutex<Option<String>>>,
}

impl MockState {
    fn record(&self, method: &str) -> Result<(), SouthboundError> {
        lock(&self.calls).push(method.to_string());
        match lock(&self.validation_failure).as_ref() {
            Some(message) => Err(SouthboundError::Validation(message.clone())),
            None => Ok(()),
        }
    }
}

/// Mock portal (V1) client
#[derive(Debug, Clone)]
pub struct MockVelocloudV1Client {
    base_url: String,
    enterprises: Arc<Mutex<Vec<V1Enterprise>>>,
    edges: Arc<Mutex<Vec<V1Edge>>>,
    state: MockState,
}

impl MockVelocloudV1Client {
    /// Create a new mock client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            enterprises: Arc::new(Mutex::new(Vec::new())),
            edges: Arc::new(Mutex::new(Vec::new())),
            state: MockState::default(),
        }
    }

    /// Add an enterprise to the mock store (for test setup)
    pub fn add_enterprise(&self, enterprise: V1Enterprise) {
        lock(&self.enterprises).push(enterprise);
    }

    /// Add an edge to the mock store (for test setup)
    pub fn add_edge(&self, edge: V1Edge) {
        lock(&self.edges).push(edge);
    }

    /// Make every subsequent call fail schema validation
    pub fn fail_validation(&self, message: impl Into<String>) {
        *lock(&self.state.validation_failure) = Some(message.into());
    }

    /// Methods called so far, in order
    pub fn calls(&self) -> Vec<String> {
        lock(&self.state.calls).clone()
    }

    /// Build a minimal enterprise fixture
    pub fn enterprise(id: i64, logical_id: Option<&str>, name: Option<&str>) -> V1Enterprise {
        V1Enterprise {
            id,
            logical_id: logical_id.map(str::to_string),
            name: name.map(str::to_string),
            domain: None,
            description: None,
            network_id: Some(1),
            contact_name: None,
            contact_email: None,
            contact_phone: None,
            modified: None,
        }
    }

    /// Build a minimal edge fixture
    pub fn edge(id: i64, enterprise_id: i64, logical_id: Option<&str>, name: Option<&str>) -> V1Edge {
        V1Edge {
            id,
            logical_id: logical_id.map(str::to_string),
            enterprise_id: Some(enterprise_id),
            site_id: None,
            name: name.map(str::to_string),
            serial_number: Some(format!("VC{id:08}")),
            model_number: Some("edge840".to_string()),
            software_version: Some("4.5.1".to_string()),
            edge_state: Some(crate::models::EdgeState::Connected),
            activation_state: Some(crate::models::ActivationState::Activated),
            custom_info: None,
            description: None,
            modified: None,
        }
    }
}

fn matches_legacy(id: &LegacyId, numeric: i64, logical: Option<&String>) -> bool {
    match id {
        LegacyId::Numeric(n) => *n == numeric,
        LegacyId::Opaque(s) => logical == Some(s),
    }
}

#[async_trait::async_trait]
impl VelocloudV1Api for MockVelocloudV1Client {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_enterprise(&self, id: &LegacyId) -> Result<Option<V1Enterprise>, SouthboundError> {
        self.state.record("enterprise/getEnterprise")?;
        Ok(lock(&self.enterprises)
            .iter()
            .find(|e| matches_legacy(id, e.id, e.logical_id.as_ref()))
            .cloned())
    }

    async fn get_edge(&self, enterprise_id: Option<i64>, id: &LegacyId) -> Result<Option<V1Edge>, SouthboundError> {
        self.state.record("edge/getEdge")?;
        Ok(lock(&self.edges)
            .iter()
            .filter(|e| enterprise_id.is_none() || e.enterprise_id == enterprise_id)
            .find(|e| matches_legacy(id, e.id, e.logical_id.as_ref()))
            .cloned())
    }

    async fn get_enterprise_edges(&self, enterprise_id: i64) -> Result<Vec<V1Edge>, SouthboundError> {
        self.state.record("enterprise/getEnterpriseEdges")?;
        Ok(lock(&self.edges)
            .iter()
            .filter(|e| e.enterprise_id == Some(enterprise_id))
            .cloned()
            .collect())
    }
}

/// Mock REST (V2) client
#[derive(Debug, Clone)]
pub struct MockVelocloudV2Client {
    base_url: String,
    enterprises: Arc<Mutex<Vec<V2Enterprise>>>,
    edges: Arc<Mutex<Vec<(String, V2Edge)>>>,
    state: MockState,
}

impl MockVelocloudV2Client {
    /// Create a new mock client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            enterprises: Arc::new(Mutex::new(Vec::new())),
            edges: Arc::new(Mutex::new(Vec::new())),
            state: MockState::default(),
        }
    }

    /// Add an enterprise to the mock store (for test setup)
    pub fn add_enterprise(&self, enterprise: V2Enterprise) {
        lock(&self.enterprises).push(enterprise);
    }

    /// Add an edge owned by `enterprise_logical_id` (for test setup)
    pub fn add_edge(&self, enterprise_logical_id: impl Into<String>, edge: V2Edge) {
        lock(&self.edges).push((enterprise_logical_id.into(), edge));
    }

    /// Make every subsequent call fail schema validation
    pub fn fail_validation(&self, message: impl Into<String>) {
        *lock(&self.state.validation_failure) = Some(message.into());
    }

    /// Methods called so far, in order
    pub fn calls(&self) -> Vec<String> {
        lock(&self.state.calls).clone()
    }

    /// Build a minimal enterprise fixture
    pub fn enterprise(logical_id: Option<&str>, name: Option<&str>, account_number: Option<&str>) -> V2Enterprise {
        V2Enterprise {
            logical_id: logical_id.map(str::to_string),
            name: name.map(str::to_string),
            account_number: account_number.map(str::to_string),
            domain: None,
            description: None,
            created: None,
            modified: None,
        }
    }

    /// Build a minimal edge fixture
    pub fn edge(logical_id: Option<&str>, name: Option<&str>, custom_info: Option<&str>) -> V2Edge {
        V2Edge {
            logical_id: logical_id.map(str::to_string),
            name: name.map(str::to_string),
            custom_info: custom_info.map(str::to_string),
            serial_number: Some("VC0520000001".to_string()),
            model_number: Some("edge3400".to_string()),
            software_version: Some("5.2.0".to_string()),
            edge_state: Some(crate::models::EdgeState::Connected),
            activation_state: Some(crate::models::ActivationState::Activated),
            site: None,
            description: None,
        }
    }
}

#[async_trait::async_trait]
impl VelocloudV2Api for MockVelocloudV2Client {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_enterprise(&self, logical_id: &str) -> Result<V2Enterprise, SouthboundError> {
        self.state.record("GET enterprise")?;
        lock(&self.enterprises)
            .iter()
            .find(|e| e.logical_id.as_deref() == Some(logical_id))
            .cloned()
            .ok_or_else(|| SouthboundError::NotFound(format!("Enterprise {logical_id} not found")))
    }

    async fn get_edge(&self, enterprise_logical_id: &str, edge_logical_id: &str) -> Result<V2Edge, SouthboundError> {
        self.state.record("GET edge")?;
        lock(&self.edges)
            .iter()
            .find(|(owner, e)| owner == enterprise_logical_id && e.logical_id.as_deref() == Some(edge_logical_id))
            .map(|(_, e)| e.clone())
            .ok_or_else(|| SouthboundError::NotFound(format!("Edge {edge_logical_id} not found")))
    }

    async fn list_edges(&self, enterprise_logical_id: &str, _fetch_all: bool) -> Result<Vec<V2Edge>, SouthboundError> {
        self.state.record("GET edges")?;
        Ok(lock(&self.edges)
            .iter()
            .filter(|(owner, _)| owner == enterprise_logical_id)
            .map(|(_, e)| e.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_v1_mock_lookup_by_numeric_and_logical_id() {
        let mock = MockVelocloudV1Client::new("https://vco.test");
        mock.add_enterprise(MockVelocloudV1Client::enterprise(10, Some("ent-10"), Some("Acme")));

        let by_id = mock.get_enterprise(&LegacyId::Numeric(10)).await.unwrap();
        assert_eq!(by_id.unwrap().name.as_deref(), Some("Acme"));

        let by_logical = mock.get_enterprise(&LegacyId::Opaque("ent-10".to_string())).await.unwrap();
        assert!(by_logical.is_some());

        let missing = mock.get_enterprise(&LegacyId::Numeric(11)).await.unwrap();
        assert!(missing.is_none());
        assert_eq!(mock.calls().len(), 3);
    }

    #[tokio::test]
    async fn test_v2_mock_validation_failure() {
        let mock = MockVelocloudV2Client::new("https://vco.test");
        mock.add_enterprise(MockVelocloudV2Client::enterprise(Some("e1"), Some("Acme"), None));
        mock.fail_validation("missing field `name`");

        let err = mock.get_enterprise("e1").await.unwrap_err();
        assert!(err.is_validation());
    }
}
