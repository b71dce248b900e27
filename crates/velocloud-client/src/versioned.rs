//! Version-tagged Velocloud client
//!
//! Wraps either a portal (V1) or a REST (V2) client behind one handle, so
//! callers configured with an API version do not need to know which concrete
//! client they hold.

use crate::models::ApiVersion;
use crate::v1::client::VelocloudV1Client;
use crate::v2::client::VelocloudV2Client;
use crate::velocloud_trait::{VelocloudV1Api, VelocloudV2Api};
use southbound_common::{ClientConfig, SouthboundError};
use std::fmt;
use std::sync::Arc;

/// The concrete client behind a [`VersionedVelocloudClient`]
#[derive(Clone)]
pub enum VersionedBackend {
    V1(Arc<dyn VelocloudV1Api>),
    V2(Arc<dyn VelocloudV2Api>),
}

impl fmt::Debug for VersionedBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V1(client) => f.debug_tuple("V1").field(&client.base_url()).finish(),
            Self::V2(client) => f.debug_tuple("V2").field(&client.base_url()).finish(),
        }
    }
}

/// Velocloud client selected by API version at construction time
#[derive(Debug, Clone)]
pub struct VersionedVelocloudClient {
    backend: VersionedBackend,
}

impl VersionedVelocloudClient {
    /// Build the concrete client for `version`
    pub fn new(version: ApiVersion, config: &ClientConfig) -> Result<Self, SouthboundError> {
        let backend = match version {
            ApiVersion::V1 => VersionedBackend::V1(Arc::new(VelocloudV1Client::from_config(config)?)),
            ApiVersion::V2 => VersionedBackend::V2(Arc::new(VelocloudV2Client::from_config(config)?)),
        };
        Ok(Self { backend })
    }

    /// Wrap an existing portal client
    pub fn from_v1(client: Arc<dyn VelocloudV1Api>) -> Self {
        Self {
            backend: VersionedBackend::V1(client),
        }
    }

    /// Wrap an existing REST client
    pub fn from_v2(client: Arc<dyn VelocloudV2Api>) -> Self {
        Self {
            backend: VersionedBackend::V2(client),
        }
    }

    /// API version of the wrapped client
    pub fn version(&self) -> ApiVersion {
        match self.backend {
            VersionedBackend::V1(_) => ApiVersion::V1,
            VersionedBackend::V2(_) => ApiVersion::V2,
        }
    }

    /// The wrapped client
    pub fn backend(&self) -> &VersionedBackend {
        &self.backend
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        match &self.backend {
            VersionedBackend::V1(client) => client.base_url(),
            VersionedBackend::V2(client) => client.base_url(),
        }
    }
}
