//! FortiManager JSON-RPC envelope
//!
//! Every call is a `POST /jsonrpc` carrying one [`RpcRequest`]. The response
//! wraps per-URL results, each with its own status block:
//!
//! ```json
//! {"id": 3, "result": [{"status": {"code": 0, "message": "OK"}, "url": "/dvmdb/adom", "data": [...]}]}
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use southbound_common::SouthboundError;

/// Status code for success
pub const STATUS_OK: i64 = 0;
/// Status code for "Object does not exist"
pub const STATUS_OBJECT_NOT_FOUND: i64 = -3;
/// Status code for "No permission for the resource"
pub const STATUS_NO_PERMISSION: i64 = -11;

/// JSON-RPC method
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RpcMethod {
    Get,
    Set,
    Add,
    Update,
    Delete,
    Exec,
}

/// One entry of the `params` array
#[derive(Debug, Clone, Default, Serialize)]
pub struct RpcParams {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option: Option<Vec<String>>,
}

impl RpcParams {
    /// Parameters addressing `url` with no body
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Restrict the returned attributes
    #[must_use]
    pub fn with_fields(mut self, fields: &[&str]) -> Self {
        self.fields = Some(fields.iter().map(|f| (*f).to_string()).collect());
        self
    }

    /// Attach a request body
    #[must_use]
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

/// Request envelope
#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest {
    pub id: u64,
    pub method: RpcMethod,
    pub params: Vec<RpcParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose: Option<u8>,
}

/// Response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse<T> {
    pub id: Option<u64>,
    #[serde(default = "Vec::new")]
    pub result: Vec<RpcResult<T>>,
    pub session: Option<String>,
}

/// Result for one requested URL
#[derive(Debug, Clone, Deserialize)]
pub struct RpcResult<T> {
    pub status: RpcStatus,
    pub url: Option<String>,
    pub data: Option<T>,
}

/// Status block of a result
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RpcStatus {
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

impl RpcStatus {
    /// Map a non-zero status onto an error
    pub fn check(&self, url: &str) -> Result<(), SouthboundError> {
        match self.code {
            STATUS_OK => Ok(()),
            STATUS_OBJECT_NOT_FOUND => Err(SouthboundError::NotFound(format!("{url}: {}", self.message))),
            STATUS_NO_PERMISSION => Err(SouthboundError::Authentication(format!("{url}: {}", self.message))),
            code => Err(SouthboundError::Rpc {
                code,
                message: format!("{url}: {}", self.message),
            }),
        }
    }
}

/// Check the first result of a response and decode its data
///
/// Returns `Ok(None)` when the call succeeded but carried no data.
pub fn decode_result<T: DeserializeOwned>(url: &str, response: RpcResponse<Value>) -> Result<Option<T>, SouthboundError> {
    let result = response
        .result
        .into_iter()
        .next()
        .ok_or_else(|| SouthboundError::Validation(format!("{url}: response has no result entry")))?;
    result.status.check(url)?;

    match result.data {
        None | Some(Value::Null) => Ok(None),
        Some(data) => serde_json::from_value(data)
            .map(Some)
            .map_err(|e| SouthboundError::Validation(format!("error decoding {url} data: {e}"))),
    }
}

/// Validate a name used inside an RPC URL
pub fn url_segment<'a>(raw: &'a str, what: &str) -> Result<&'a str, SouthboundError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.contains('/') {
        return Err(SouthboundError::InvalidRequest(format!("{what} must be a non-empty name without '/', got {raw:?}")));
    }
    Ok(trimmed)
}
