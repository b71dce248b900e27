//! Southbound Common
//!
//! Shared building blocks for the vendor API clients in this workspace:
//!
//! - **HTTP**: [`HttpClient`] wraps `reqwest` with a base URL and an
//!   [`AuthScheme`], maps status codes onto [`SouthboundError`] and decodes
//!   bodies into typed schemas
//! - **Configuration**: [`ClientConfig`] describes one vendor endpoint
//! - **Pagination**: `Link` header and `X-Page-*` header helpers

pub mod config;
pub mod error;
pub mod http;
pub mod pagination;

pub use config::{ClientConfig, DEFAULT_TIMEOUT_SECS};
pub use error::SouthboundError;
pub use http::{AuthScheme, HttpClient, decode_body, path_segment, status_error};
pub use pagination::{PageHeaders, parse_link_next};
