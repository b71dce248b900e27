//! Meraki Dashboard API Client
//!
//! A Rust client for the Cisco Meraki Dashboard API v1, covering the
//! organization, network and device endpoints used for inventory enrichment.
//!
//! # Example
//!
//! ```no_run
//! use meraki_client::{MerakiClient, DEFAULT_BASE_URL};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = MerakiClient::new(DEFAULT_BASE_URL.to_string(), "your-api-key".to_string())?;
//!
//! for org in client.get_organizations().await? {
//!     let statuses = client
//!         .get_organization_devices_statuses(&org.id, &[("statuses[]", "offline")], true)
//!         .await?;
//!     println!("{}: {} offline devices", org.name, statuses.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod models;
#[path = "trait.rs"]
pub mod meraki_trait;
#[cfg(feature = "test-util")]
pub mod mock;

pub use client::{DEFAULT_BASE_URL, DEFAULT_PER_PAGE, MerakiClient};
pub use meraki_trait::MerakiApi;
pub use models::*;
pub use southbound_common::{ClientConfig, SouthboundError};
#[cfg(feature = "test-util")]
pub use mock::MockMerakiClient;
