//! Inventory Enrichment
//!
//! Normalizes enterprise and edge data from the southbound vendor clients
//! into vendor-independent records.
//!
//! - [`VelocloudHandle`] dispatches between the Velocloud portal (V1), REST
//!   (V2) and version-tagged clients
//! - [`MerakiEnricher`], [`FortiManagerEnricher`] and [`MistEnricher`] cover
//!   the other vendors
//! - [`enrich_inventory`] runs a target list through any [`Enricher`]
//!
//! # Example
//!
//! ```no_run
//! use enrichment::{EnrichmentTarget, VelocloudHandle, enrich_inventory};
//! use velocloud_client::{ApiVersion, ClientConfig, VersionedVelocloudClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::new("https://vco.example.net", "your-api-token");
//! let handle = VelocloudHandle::Versioned(VersionedVelocloudClient::new(ApiVersion::V2, &config)?);
//!
//! let record = handle.enrich_enterprise("b7a4c5c2-0c7e-4b0e-9d4a-3f0b7f2e8a11").await?;
//! println!("{} ({})", record.name, record.account_number);
//!
//! let targets = vec![EnrichmentTarget::Enterprise { id: "b7a4c5c2-0c7e-4b0e-9d4a-3f0b7f2e8a11".to_string() }];
//! for outcome in enrich_inventory(&handle, &targets, 4).await {
//!     println!("{}: ok={}", outcome.target, outcome.is_ok());
//! }
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod error;
pub mod fortimanager;
pub mod meraki;
pub mod mist;
pub mod records;
pub mod velocloud;
#[path = "trait.rs"]
pub mod enricher_trait;

pub use batch::{EnrichmentOutcome, EnrichmentTarget, MIN_CONCURRENCY, enrich_inventory, enrich_target};
pub use enricher_trait::Enricher;
pub use error::EnrichmentError;
pub use fortimanager::FortiManagerEnricher;
pub use meraki::MerakiEnricher;
pub use mist::MistEnricher;
pub use records::{EdgeRecord, EnrichedRecord, EnterpriseRecord, NOT_AVAILABLE, Vendor};
pub use velocloud::VelocloudHandle;
