//! Mist API Client
//!
//! A Rust client for the Juniper Mist cloud API v1, covering the identity,
//! organization, inventory and device statistics endpoints used for
//! inventory enrichment.
//!
//! # Example
//!
//! ```no_run
//! use mist_client::{MistClient, DEFAULT_BASE_URL};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = MistClient::new(DEFAULT_BASE_URL.to_string(), "your-api-token".to_string())?;
//!
//! let me = client.get_self().await?;
//! for org_id in me.org_ids() {
//!     let inventory = client.get_org_inventory(org_id, &[("type", "switch")], true).await?;
//!     println!("{}: {} switches", org_id, inventory.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod models;
#[path = "trait.rs"]
pub mod mist_trait;
#[cfg(feature = "test-util")]
pub mod mock;

pub use client::{DEFAULT_BASE_URL, DEFAULT_PAGE_LIMIT, MistClient};
pub use mist_trait::MistApi;
pub use models::*;
pub use southbound_common::{ClientConfig, SouthboundError};
#[cfg(feature = "test-util")]
pub use mock::MockMistClient;
