//! Meraki Dashboard API client
//!
//! Implements the subset of the Dashboard API v1 used for inventory
//! enrichment. Collections are paged with `perPage` and RFC 5988 `Link`
//! headers.

use crate::meraki_trait::MerakiApi;
use crate::models::*;
use serde::de::DeserializeOwned;
use southbound_common::{AuthScheme, ClientConfig, HttpClient, SouthboundError, path_segment};
use tracing::debug;

/// Default Dashboard API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.meraki.com/api/v1";

/// Page size requested from paged endpoints (the Dashboard maximum)
pub const DEFAULT_PER_PAGE: u32 = 1000;

/// Meraki Dashboard API client
#[derive(Debug, Clone)]
pub struct MerakiClient {
    http: HttpClient,
}

impl MerakiClient {
    /// Create a new Dashboard client
    ///
    /// # Arguments
    /// * `base_url` - Dashboard base URL (e.g., "https://api.meraki.com/api/v1")
    /// * `api_key` - Dashboard API key, sent as a bearer token
    pub fn new(base_url: String, api_key: String) -> Result<Self, SouthboundError> {
        Self::from_config(&ClientConfig::new(base_url, api_key))
    }

    /// Create a Dashboard client from a [`ClientConfig`]
    pub fn from_config(config: &ClientConfig) -> Result<Self, SouthboundError> {
        let http = HttpClient::from_config(config, AuthScheme::Bearer(config.token.clone()))?;
        Ok(Self { http })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Query a paged collection
    ///
    /// With `fetch_all` the `Link` header is followed until there is no
    /// `rel=next`; otherwise only the first page is returned.
    async fn query_paged<T: DeserializeOwned>(
        &self,
        path: &str,
        filters: &[(&str, &str)],
        fetch_all: bool,
    ) -> Result<Vec<T>, SouthboundError> {
        let per_page = DEFAULT_PER_PAGE.to_string();
        let mut query: Vec<(&str, &str)> = vec![("perPage", per_page.as_str())];
        query.extend_from_slice(filters);
        let path = self.http.with_query(path, &query);

        if fetch_all {
            self.http.fetch_all_link_pages(self.http.build_url(&path)).await
        } else {
            self.http.get(&path).await
        }
    }

    /// List the organizations the API key has access to
    pub async fn get_organizations(&self) -> Result<Vec<Organization>, SouthboundError> {
        debug!("Listing organizations");
        self.http.get("/organizations").await
    }

    /// Get an organization by id
    pub async fn get_organization(&self, org_id: &str) -> Result<Organization, SouthboundError> {
        let path = format!("/organizations/{}", path_segment(org_id, "organization id")?);
        debug!("Fetching organization {}", org_id);
        self.http.get(&path).await
    }

    /// List the networks of an organization
    ///
    /// # Arguments
    /// * `org_id` - Organization id
    /// * `fetch_all` - If true, fetch all pages (default: first page only)
    pub async fn get_organization_networks(&self, org_id: &str, fetch_all: bool) -> Result<Vec<Network>, SouthboundError> {
        let path = format!("/organizations/{}/networks", path_segment(org_id, "organization id")?);
        debug!("Listing networks of organization {}", org_id);
        self.query_paged(&path, &[], fetch_all).await
    }

    /// List the devices of an organization
    ///
    /// # Arguments
    /// * `org_id` - Organization id
    /// * `filters` - Query parameters (e.g., [("serials[]", "Q2XX-XXXX-XXXX")])
    /// * `fetch_all` - If true, fetch all pages
    pub async fn get_organization_devices(
        &self,
        org_id: &str,
        filters: &[(&str, &str)],
        fetch_all: bool,
    ) -> Result<Vec<Device>, SouthboundError> {
        let path = format!("/organizations/{}/devices", path_segment(org_id, "organization id")?);
        debug!("Querying devices of organization {} with filters: {:?}", org_id, filters);
        self.query_paged(&path, filters, fetch_all).await
    }

    /// List device statuses of an organization
    pub async fn get_organization_devices_statuses(
        &self,
        org_id: &str,
        filters: &[(&str, &str)],
        fetch_all: bool,
    ) -> Result<Vec<DeviceStatus>, SouthboundError> {
        let path = format!("/organizations/{}/devices/statuses", path_segment(org_id, "organization id")?);
        debug!("Querying device statuses of organization {} with filters: {:?}", org_id, filters);
        self.query_paged(&path, filters, fetch_all).await
    }

    /// Get a device by serial number
    pub async fn get_device(&self, serial: &str) -> Result<Device, SouthboundError> {
        let path = format!("/devices/{}", path_segment(serial, "serial")?);
        debug!("Fetching device {}", serial);
        self.http.get(&path).await
    }
}

#[async_trait::async_trait]
impl MerakiApi for MerakiClient {
    fn base_url(&self) -> &str {
        self.base_url()
    }

    async fn get_organizations(&self) -> Result<Vec<Organization>, SouthboundError> {
        self.get_organizations().await
    }

    async fn get_organization(&self, org_id: &str) -> Result<Organization, SouthboundError> {
        self.get_organization(org_id).await
    }

    async fn get_organization_networks(&self, org_id: &str, fetch_all: bool) -> Result<Vec<Network>, SouthboundError> {
        self.get_organization_networks(org_id, fetch_all).await
    }

    async fn get_organization_devices(&self, org_id: &str, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Device>, SouthboundError> {
        self.get_organization_devices(org_id, filters, fetch_all).await
    }

    async fn get_organization_devices_statuses(&self, org_id: &str, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<DeviceStatus>, SouthboundError> {
        self.get_organization_devices_statuses(org_id, filters, fetch_all).await
    }

    async fn get_device(&self, serial: &str) -> Result<Device, SouthboundError> {
        self.get_device(serial).await
    }
}
