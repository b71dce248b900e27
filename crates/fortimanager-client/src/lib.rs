//! FortiManager API Client
//!
//! A Rust client for the FortiManager JSON-RPC API (`POST /jsonrpc`).
//! Provides typed models for ADOMs and managed devices, the request/response
//! envelope codec, and session handling for credential based logins.
//!
//! # Example
//!
//! ```no_run
//! use fortimanager_client::FortiManagerClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = FortiManagerClient::with_credentials(
//!     "https://fmg.example.net".to_string(),
//!     "api-user".to_string(),
//!     "password".to_string(),
//! )?;
//!
//! for adom in client.get_adoms().await? {
//!     let devices = client.get_devices(&adom.name).await?;
//!     println!("{}: {} devices", adom.name, devices.len());
//! }
//! client.logout().await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod models;
pub mod rpc;
#[path = "trait.rs"]
pub mod fortimanager_trait;
#[cfg(feature = "test-util")]
pub mod mock;

pub use client::{FortiManagerAuth, FortiManagerClient};
pub use fortimanager_trait::FortiManagerApi;
pub use models::*;
pub use rpc::{RpcMethod, RpcParams, RpcRequest, RpcResponse, RpcResult, RpcStatus};
pub use southbound_common::{ClientConfig, SouthboundError};
#[cfg(feature = "test-util")]
pub use mock::MockFortiManagerClient;
