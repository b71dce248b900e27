//! Velocloud portal (V1) API client
//!
//! Every portal call is `POST {base}/portal/rest/{method}` with the method's
//! parameters as the JSON body.

use crate::v1::models::*;
use crate::velocloud_trait::VelocloudV1Api;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use southbound_common::{AuthScheme, ClientConfig, HttpClient, SouthboundError};
use tracing::debug;

/// Velocloud portal API client
#[derive(Debug, Clone)]
pub struct VelocloudV1Client {
    http: HttpClient,
}

impl VelocloudV1Client {
    /// Create a new portal client
    ///
    /// # Arguments
    /// * `base_url` - Orchestrator URL (e.g., "https://vco.example.net")
    /// * `token` - API token for authentication
    pub fn new(base_url: String, token: String) -> Result<Self, SouthboundError> {
        Self::from_config(&ClientConfig::new(base_url, token))
    }

    /// Create a portal client from a [`ClientConfig`]
    pub fn from_config(config: &ClientConfig) -> Result<Self, SouthboundError> {
        let http = HttpClient::from_config(config, AuthScheme::Token(config.token.clone()))?;
        Ok(Self { http })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Invoke a portal method and return the raw result
    ///
    /// Portal errors reported in the body are mapped to
    /// [`SouthboundError::Rpc`].
    async fn call<P: Serialize + ?Sized>(&self, method: &str, params: &P) -> Result<Value, SouthboundError> {
        let path = format!("/portal/rest/{method}");
        debug!("Calling portal method {}", method);

        let value: Value = self.http.post(&path, params).await?;
        if let Some(error) = portal_error(&value) {
            return Err(SouthboundError::Rpc {
                code: error.code,
                message: error.message,
            });
        }
        Ok(value)
    }

    /// Get an enterprise by legacy id or logical id
    ///
    /// # Returns
    /// * `Ok(Some(V1Enterprise))` - The enterprise
    /// * `Ok(None)` - The portal returned an empty result
    /// * `Err(SouthboundError)` - If the request fails or the body does not match the schema
    pub async fn get_enterprise(&self, id: &LegacyId) -> Result<Option<V1Enterprise>, SouthboundError> {
        let params = GetEnterpriseParams::from(id);
        let value = self.call("enterprise/getEnterprise", &params).await?;
        decode_optional("enterprise/getEnterprise", value)
    }

    /// Get an edge by legacy id or logical id
    ///
    /// # Arguments
    /// * `enterprise_id` - Owning enterprise (required for operator-scoped tokens)
    /// * `id` - Edge identifier
    pub async fn get_edge(&self, enterprise_id: Option<i64>, id: &LegacyId) -> Result<Option<V1Edge>, SouthboundError> {
        let params = GetEdgeParams::new(enterprise_id, id);
        let value = self.call("edge/getEdge", &params).await?;
        decode_optional("edge/getEdge", value)
    }

    /// List the edges of an enterprise
    pub async fn get_enterprise_edges(&self, enterprise_id: i64) -> Result<Vec<V1Edge>, SouthboundError> {
        let params = GetEnterpriseEdgesParams { enterprise_id };
        let value = self.call("enterprise/getEnterpriseEdges", &params).await?;
        Ok(decode_optional("enterprise/getEnterpriseEdges", value)?.unwrap_or_default())
    }
}

#[async_trait::async_trait]
impl VelocloudV1Api for VelocloudV1Client {
    fn base_url(&self) -> &str {
        self.base_url()
    }

    async fn get_enterprise(&self, id: &LegacyId) -> Result<Option<V1Enterprise>, SouthboundError> {
        self.get_enterprise(id).await
    }

    async fn get_edge(&self, enterprise_id: Option<i64>, id: &LegacyId) -> Result<Option<V1Edge>, SouthboundError> {
        self.get_edge(enterprise_id, id).await
    }

    async fn get_enterprise_edges(&self, enterprise_id: i64) -> Result<Vec<V1Edge>, SouthboundError> {
        self.get_enterprise_edges(enterprise_id).await
    }
}

/// True for `null`, `{}` and `[]`
pub(crate) fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn portal_error(value: &Value) -> Option<PortalError> {
    let error = value.as_object()?.get("error")?;
    serde_json::from_value(error.clone()).ok()
}

/// Decode a portal result, treating an empty payload as absent
pub(crate) fn decode_optional<T: DeserializeOwned>(method: &str, value: Value) -> Result<Option<T>, SouthboundError> {
    if is_empty_payload(&value) {
        debug!("Portal method {} returned an empty result", method);
        return Ok(None);
    }
    serde_json::from_value(value)
        .map(Some)
        .map_err(|e| SouthboundError::Validation(format!("error decoding {method} result: {e}")))
}
