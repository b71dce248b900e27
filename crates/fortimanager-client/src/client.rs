//! FortiManager JSON-RPC client
//!
//! Authenticates either with an API key (sent as a bearer token) or with an
//! admin user, in which case a session is obtained from `/sys/login/user`,
//! cached and attached to every request until `logout`.

use crate::fortimanager_trait::FortiManagerApi;
use crate::models::*;
use crate::rpc::*;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use southbound_common::{AuthScheme, ClientConfig, HttpClient, SouthboundError};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;
use tracing::{debug, info};

const JSONRPC_PATH: &str = "/jsonrpc";

/// How the client authenticates
#[derive(Clone)]
pub enum FortiManagerAuth {
    /// REST API administrator key
    ApiKey(String),
    /// Interactive admin credentials (session based)
    Credentials { user: String, password: String },
}

impl fmt::Debug for FortiManagerAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiKey(_) => f.write_str("ApiKey(<redacted>)"),
            Self::Credentials { user, .. } => f
                .debug_struct("Credentials")
                .field("user", user)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}

/// FortiManager JSON-RPC client
pub struct FortiManagerClient {
    http: HttpClient,
    auth: FortiManagerAuth,
    session: Mutex<Option<String>>,
    next_id: AtomicU64,
}

impl fmt::Debug for FortiManagerClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FortiManagerClient")
            .field("base_url", &self.http.base_url())
            .field("auth", &self.auth)
            .finish_non_exhaustive()
    }
}

impl FortiManagerClient {
    /// Create a client authenticating with an API key
    ///
    /// # Arguments
    /// * `base_url` - FortiManager URL (e.g., "https://fmg.example.net")
    /// * `api_key` - REST API administrator key
    pub fn new(base_url: String, api_key: String) -> Result<Self, SouthboundError> {
        let config = ClientConfig::new(base_url, api_key.clone());
        Self::from_config(&config, FortiManagerAuth::ApiKey(api_key))
    }

    /// Create a client authenticating with admin credentials
    pub fn with_credentials(base_url: String, user: String, password: String) -> Result<Self, SouthboundError> {
        let config = ClientConfig::new(base_url, String::new());
        Self::from_config(&config, FortiManagerAuth::Credentials { user, password })
    }

    /// Create a client from a [`ClientConfig`]
    ///
    /// The config token is ignored; `auth` decides how requests authenticate.
    pub fn from_config(config: &ClientConfig, auth: FortiManagerAuth) -> Result<Self, SouthboundError> {
        let scheme = match &auth {
            FortiManagerAuth::ApiKey(key) => {
                if key.is_empty() {
                    return Err(SouthboundError::Configuration("FortiManager API key must not be empty".to_string()));
                }
                AuthScheme::Bearer(key.clone())
            }
            FortiManagerAuth::Credentials { .. } => AuthScheme::None,
        };
        let http = HttpClient::from_config(config, scheme)?;
        Ok(Self {
            http,
            auth,
            session: Mutex::new(None),
            next_id: AtomicU64::new(1),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    fn next_request_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    async fn send(&self, method: RpcMethod, params: RpcParams, session: Option<String>) -> Result<RpcResponse<Value>, SouthboundError> {
        let request = RpcRequest {
            id: self.next_request_id(),
            method,
            params: vec![params],
            session,
            verbose: None,
        };
        debug!("JSON-RPC {:?} {} (id {})", request.method, request.params[0].url, request.id);
        self.http.post(JSONRPC_PATH, &request).await
    }

    /// Exchange credentials for a session id
    async fn open_session(&self, user: &str, password: &str) -> Result<String, SouthboundError> {
        let params = RpcParams::url("/sys/login/user").with_data(json!({"user": user, "passwd": password}));
        let response = self.send(RpcMethod::Exec, params, None).await?;
        let session = response.session.clone();
        decode_result::<Value>("/sys/login/user", response).map_err(|e| match e {
            SouthboundError::Rpc { code, message } => {
                SouthboundError::Authentication(format!("login as {user} failed ({code}): {message}"))
            }
            other => other,
        })?;
        session
            .filter(|s| !s.is_empty())
            .ok_or_else(|| SouthboundError::Authentication(format!("login as {user} returned no session")))
    }

    /// Session to attach to the next request, logging in if needed
    async fn ensure_session(&self) -> Result<Option<String>, SouthboundError> {
        let FortiManagerAuth::Credentials { user, password } = &self.auth else {
            return Ok(None);
        };
        let mut session = self.session.lock().await;
        if let Some(existing) = session.as_ref() {
            return Ok(Some(existing.clone()));
        }
        let opened = self.open_session(user, password).await?;
        info!("Opened FortiManager session for {}", user);
        *session = Some(opened.clone());
        Ok(Some(opened))
    }

    /// Perform a call and decode the data of its first result
    async fn call<T: DeserializeOwned>(&self, method: RpcMethod, params: RpcParams) -> Result<Option<T>, SouthboundError> {
        let url = params.url.clone();
        let session = self.ensure_session().await?;
        let result = match self.send(method, params, session).await {
            Ok(response) => decode_result(&url, response),
            Err(e) => Err(e),
        };
        if let Err(SouthboundError::Authentication(_)) = &result {
            // Drop a rejected session so the next call logs in again.
            *self.session.lock().await = None;
        }
        result
    }

    /// Log in (no-op for API key authentication)
    pub async fn login(&self) -> Result<(), SouthboundError> {
        self.ensure_session().await.map(|_| ())
    }

    /// Close the cached session, if any
    pub async fn logout(&self) -> Result<(), SouthboundError> {
        let Some(session) = self.session.lock().await.take() else {
            return Ok(());
        };
        let response = self.send(RpcMethod::Exec, RpcParams::url("/sys/logout"), Some(session)).await?;
        decode_result::<Value>("/sys/logout", response)?;
        info!("Closed FortiManager session");
        Ok(())
    }

    /// Get appliance status
    pub async fn get_system_status(&self) -> Result<SystemStatus, SouthboundError> {
        self.call(RpcMethod::Get, RpcParams::url("/sys/status"))
            .await?
            .ok_or_else(|| SouthboundError::Validation("/sys/status returned no data".to_string()))
    }

    /// List administrative domains
    pub async fn get_adoms(&self) -> Result<Vec<Adom>, SouthboundError> {
        Ok(self
            .call(RpcMethod::Get, RpcParams::url("/dvmdb/adom"))
            .await?
            .unwrap_or_default())
    }

    /// Get an administrative domain by name
    pub async fn get_adom(&self, name: &str) -> Result<Adom, SouthboundError> {
        let url = format!("/dvmdb/adom/{}", url_segment(name, "ADOM name")?);
        self.call(RpcMethod::Get, RpcParams::url(&url))
            .await?
            .ok_or_else(|| SouthboundError::NotFound(format!("ADOM {name} not found")))
    }

    /// List devices managed in an ADOM
    pub async fn get_devices(&self, adom: &str) -> Result<Vec<ManagedDevice>, SouthboundError> {
        let url = format!("/dvmdb/adom/{}/device", url_segment(adom, "ADOM name")?);
        Ok(self
            .call(RpcMethod::Get, RpcParams::url(url).with_fields(DEVICE_FIELDS))
            .await?
            .unwrap_or_default())
    }

    /// Get a device managed in an ADOM by name
    pub async fn get_device(&self, adom: &str, name: &str) -> Result<ManagedDevice, SouthboundError> {
        let url = format!(
            "/dvmdb/adom/{}/device/{}",
            url_segment(adom, "ADOM name")?,
            url_segment(name, "device name")?
        );
        self.call(RpcMethod::Get, RpcParams::url(url).with_fields(DEVICE_FIELDS))
            .await?
            .ok_or_else(|| SouthboundError::NotFound(format!("Device {name} not found in ADOM {adom}")))
    }
}

#[async_trait::async_trait]
impl FortiManagerApi for FortiManagerClient {
    fn base_url(&self) -> &str {
        self.base_url()
    }

    async fn login(&self) -> Result<(), SouthboundError> {
        self.login().await
    }

    async fn logout(&self) -> Result<(), SouthboundError> {
        self.logout().await
    }

    async fn get_system_status(&self) -> Result<SystemStatus, SouthboundError> {
        self.get_system_status().await
    }

    async fn get_adoms(&self) -> Result<Vec<Adom>, SouthboundError> {
        self.get_adoms().await
    }

    async fn get_adom(&self, name: &str) -> Result<Adom, SouthboundError> {
        self.get_adom(name).await
    }

    async fn get_devices(&self, adom: &str) -> Result<Vec<ManagedDevice>, SouthboundError> {
        self.get_devices(adom).await
    }

    async fn get_device(&self, adom: &str, name: &str) -> Result<ManagedDevice, SouthboundError> {
        self.get_device(adom, name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ids_increase() {
        let client = FortiManagerClient::new("https://fmg.example.net".to_string(), "key".to_string()).unwrap();
        let first = client.next_request_id();
        let second = client.next_request_id();
        assert!(second > first);
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let err = FortiManagerClient::new("https://fmg.example.net".to_string(), String::new()).unwrap_err();
        assert!(matches!(err, SouthboundError::Configuration(_)));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let client = FortiManagerClient::with_credentials(
            "https://fmg.example.net".to_string(),
            "admin".to_string(),
            "hunter2".to_string(),
        )
        .unwrap();
        let rendered = format!("{client:?}");
        assert!(rendered.contains("admin"));
        assert!(!rendered.contains("hunter2"));
    }

    #[tokio::test]
    async fn test_api_key_login_is_noop_and_logout_without_session() {
        let client = FortiManagerClient::new("https://fmg.invalid".to_string(), "key".to_string()).unwrap();
        client.login().await.unwrap();
        client.logout().await.unwrap();
    }
}
