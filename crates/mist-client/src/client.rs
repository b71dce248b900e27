//! Mist API client
//!
//! Collections are paged with `limit`/`page` query parameters; the totals
//! come back in `X-Page-*` response headers.

use crate::mist_trait::MistApi;
use crate::models::*;
use southbound_common::{AuthScheme, ClientConfig, HttpClient, PageHeaders, SouthboundError, path_segment};
use tracing::{debug, warn};

/// Default Mist cloud (global 01)
pub const DEFAULT_BASE_URL: &str = "https://api.mist.com";

/// Page size requested from paged endpoints
pub const DEFAULT_PAGE_LIMIT: u64 = 100;

const API_PREFIX: &str = "/api/v1";

/// Mist API client
#[derive(Debug, Clone)]
pub struct MistClient {
    http: HttpClient,
}

impl MistClient {
    /// Create a new Mist client
    ///
    /// # Arguments
    /// * `base_url` - Cloud base URL (e.g., "https://api.eu.mist.com")
    /// * `token` - API token
    pub fn new(base_url: String, token: String) -> Result<Self, SouthboundError> {
        Self::from_config(&ClientConfig::new(base_url, token))
    }

    /// Create a Mist client from a [`ClientConfig`]
    pub fn from_config(config: &ClientConfig) -> Result<Self, SouthboundError> {
        let http = HttpClient::from_config(config, AuthScheme::Token(config.token.clone()))?;
        Ok(Self { http })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Get the identity and privileges of the token
    pub async fn get_self(&self) -> Result<SelfInfo, SouthboundError> {
        debug!("Fetching token identity");
        self.http.get(&format!("{API_PREFIX}/self")).await
    }

    /// Get an organization by id
    pub async fn get_org(&self, org_id: &str) -> Result<Org, SouthboundError> {
        let path = format!("{API_PREFIX}/orgs/{}", path_segment(org_id, "org id")?);
        debug!("Fetching org {}", org_id);
        self.http.get(&path).await
    }

    /// List the sites of an organization
    pub async fn get_org_sites(&self, org_id: &str) -> Result<Vec<Site>, SouthboundError> {
        let path = format!("{API_PREFIX}/orgs/{}/sites", path_segment(org_id, "org id")?);
        debug!("Listing sites of org {}", org_id);
        self.fetch_pages(&path, &[], true).await
    }

    /// List devices claimed into an organization
    ///
    /// # Arguments
    /// * `org_id` - Organization id
    /// * `filters` - Query parameters (e.g., [("serial", "A0710190400D5")], [("type", "switch")])
    /// * `fetch_all` - If true, fetch all pages (default: first page only)
    pub async fn get_org_inventory(
        &self,
        org_id: &str,
        filters: &[(&str, &str)],
        fetch_all: bool,
    ) -> Result<Vec<InventoryDevice>, SouthboundError> {
        let path = format!("{API_PREFIX}/orgs/{}/inventory", path_segment(org_id, "org id")?);
        debug!("Querying inventory of org {} with filters: {:?}", org_id, filters);
        self.fetch_pages(&path, filters, fetch_all).await
    }

    /// Get runtime statistics of the devices in a site
    ///
    /// Mist only reports access points unless `type` is given; `type=all` is
    /// added when the caller does not set it.
    pub async fn get_site_device_stats(
        &self,
        site_id: &str,
        filters: &[(&str, &str)],
    ) -> Result<Vec<DeviceStats>, SouthboundError> {
        let path = format!("{API_PREFIX}/sites/{}/stats/devices", path_segment(site_id, "site id")?);
        let mut query: Vec<(&str, &str)> = filters.to_vec();
        if !query.iter().any(|(key, _)| *key == "type") {
            query.push(("type", "all"));
        }
        debug!("Querying device stats of site {} with filters: {:?}", site_id, query);
        self.http.get(&self.http.with_query(&path, &query)).await
    }

    /// Walk a `limit`/`page` paged collection
    ///
    /// Stops when the counters say the collection is exhausted, or when the
    /// server answers with a page other than the one requested (repeating the
    /// previous page or reporting another page number).
    async fn fetch_pages<T: serde::de::DeserializeOwned + PartialEq>(
        &self,
        path: &str,
        filters: &[(&str, &str)],
        fetch_all: bool,
    ) -> Result<Vec<T>, SouthboundError> {
        let limit = DEFAULT_PAGE_LIMIT.to_string();
        let mut all_results: Vec<T> = Vec::new();
        let mut page: u64 = 1;
        let mut previous_len = 0;

        loop {
            let page_number = page.to_string();
            let mut query: Vec<(&str, &str)> = vec![("limit", limit.as_str()), ("page", page_number.as_str())];
            query.extend_from_slice(filters);
            let url = self.http.with_query(path, &query);

            let (items, headers): (Vec<T>, _) = self.http.get_with_headers(&url).await?;
            let counters = PageHeaders::from_headers(&headers);

            if page > 1 && (counters.page.is_some_and(|p| p != page) || repeats_previous(&all_results, previous_len, &items)) {
                warn!("{} ignored page {}, stopping after {} items", path, page, all_results.len());
                break;
            }

            let page_len = items.len();
            previous_len = page_len;
            all_results.extend(items);

            if !fetch_all || !counters.has_more(all_results.len() as u64, page_len, DEFAULT_PAGE_LIMIT) {
                break;
            }
            page += 1;
        }

        Ok(all_results)
    }
}

/// Whether `items` is the same as the last `previous_len` items collected
fn repeats_previous<T: PartialEq>(collected: &[T], previous_len: usize, items: &[T]) -> bool {
    !items.is_empty() && items.len() == previous_len && collected[collected.len() - previous_len..] == *items
}

#[async_trait::async_trait]
impl MistApi for MistClient {
    fn base_url(&self) -> &str {
        self.base_url()
    }

    async fn get_self(&self) -> Result<SelfInfo, SouthboundError> {
        self.get_self().await
    }

    async fn get_org(&self, org_id: &str) -> Result<Org, SouthboundError> {
        self.get_org(org_id).await
    }

    async fn get_org_sites(&self, org_id: &str) -> Result<Vec<Site>, SouthboundError> {
        self.get_org_sites(org_id).await
    }

    async fn get_org_inventory(&self, org_id: &str, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<InventoryDevice>, SouthboundError> {
        self.get_org_inventory(org_id, filters, fetch_all).await
    }

    async fn get_site_device_stats(&self, site_id: &str, filters: &[(&str, &str)]) -> Result<Vec<DeviceStats>, SouthboundError> {
        self.get_site_device_stats(site_id, filters).await
    }
}
