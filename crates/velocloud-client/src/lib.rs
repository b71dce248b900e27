//! Velocloud Orchestrator API Client
//!
//! Typed clients for both generations of the VMware Velocloud (VMware SD-WAN)
//! Orchestrator API:
//!
//! - **V1 portal API**: `POST /portal/rest/{method}`, objects addressed by
//!   legacy numeric ids ([`VelocloudV1Client`])
//! - **V2 REST API**: `GET /api/sdwan/v2/...`, objects addressed by logical
//!   ids ([`VelocloudV2Client`])
//! - **Versioned client**: [`VersionedVelocloudClient`] picks one of the two
//!   from a configured [`ApiVersion`]
//!
//! # Example
//!
//! ```no_run
//! use velocloud_client::{LegacyId, VelocloudV1Client, VelocloudV2Client};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let v2 = VelocloudV2Client::new(
//!     "https://vco.example.net".to_string(),
//!     "your-api-token".to_string(),
//! )?;
//! let enterprise = v2.get_enterprise("b7a4c5c2-0c7e-4b0e-9d4a-3f0b7f2e8a11").await?;
//!
//! let v1 = VelocloudV1Client::new(
//!     "https://vco.example.net".to_string(),
//!     "your-api-token".to_string(),
//! )?;
//! let legacy = v1.get_enterprise(&LegacyId::parse("42")?).await?;
//! # Ok(())
//! # }
//! ```

pub mod models;
pub mod v1;
pub mod v2;
pub mod versioned;
#[path = "trait.rs"]
pub mod velocloud_trait;
#[cfg(feature = "test-util")]
pub mod mock;

pub use models::{ActivationState, ApiVersion, EdgeState};
pub use southbound_common::{ClientConfig, SouthboundError};
pub use v1::client::VelocloudV1Client;
pub use v1::models::{LegacyId, V1Edge, V1Enterprise};
pub use v2::client::VelocloudV2Client;
pub use v2::models::{V2Edge, V2Enterprise, V2Page, V2PageMetadata, V2SiteRef};
pub use velocloud_trait::{VelocloudV1Api, VelocloudV2Api};
pub use versioned::{VersionedBackend, VersionedVelocloudClient};
#[cfg(feature = "test-util")]
pub use mock::{MockVelocloudV1Client, MockVelocloudV2Client};
