//! HTTP client wrapper shared by the vendor clients
//!
//! Wraps `reqwest::Client` with a base URL and an authentication scheme,
//! maps HTTP status codes onto [`SouthboundError`] and decodes bodies into
//! typed schemas.

use crate::config::ClientConfig;
use crate::error::SouthboundError;
use crate::pagination::parse_link_next;
use reqwest::header::{HeaderMap, LINK};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, warn};

/// Number of body characters kept in error messages
const BODY_EXCERPT_CHARS: usize = 500;

/// How requests are authenticated
#[derive(Clone)]
pub enum AuthScheme {
    /// `Authorization: Token <secret>` (Mist, Velocloud)
    Token(String),
    /// `Authorization: Bearer <secret>` (Meraki, FortiManager API keys)
    Bearer(String),
    /// No authorization header (session carried in the request body)
    None,
}

impl AuthScheme {
    /// Value for the `Authorization` header, if any
    #[must_use]
    pub fn header_value(&self) -> Option<String> {
        match self {
            Self::Token(secret) => Some(format!("Token {secret}")),
            Self::Bearer(secret) => Some(format!("Bearer {secret}")),
            Self::None => None,
        }
    }
}

impl fmt::Debug for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(_) => f.write_str("Token(<redacted>)"),
            Self::Bearer(_) => f.write_str("Bearer(<redacted>)"),
            Self::None => f.write_str("None"),
        }
    }
}

/// HTTP client wrapper with authentication
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    auth: AuthScheme,
}

impl HttpClient {
    /// Create a new HTTP client wrapper
    pub fn new(client: Client, base_url: String, auth: AuthScheme) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
        }
    }

    /// Build a wrapper from a [`ClientConfig`]
    pub fn from_config(config: &ClientConfig, auth: AuthScheme) -> Result<Self, SouthboundError> {
        let client = config.build_http_client()?;
        Ok(Self::new(client, config.base_url.clone(), auth))
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the underlying HTTP client
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Build a full URL from a path
    pub fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path)
        }
    }

    /// Build query string from filters
    pub fn build_query_string(&self, filters: &[(&str, &str)]) -> String {
        filters
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Append filters to a path, respecting any query string already present
    pub fn with_query(&self, path: &str, filters: &[(&str, &str)]) -> String {
        if filters.is_empty() {
            return path.to_string();
        }
        let separator = if path.contains('?') { '&' } else { '?' };
        format!("{}{}{}", path, separator, self.build_query_string(filters))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header("Accept", "application/json");
        match self.auth.header_value() {
            Some(value) => request.header("Authorization", value),
            None => request,
        }
    }

    /// Send a request and map non-success statuses onto errors
    async fn execute(&self, request: RequestBuilder, method: &str, path: &str) -> Result<Response, SouthboundError> {
        let response = self.authorize(request).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(status_error(status, method, path, &body))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, SouthboundError> {
        let (value, _) = self.get_with_headers(path).await?;
        Ok(value)
    }

    /// Make a GET request and also return the response headers
    pub async fn get_with_headers<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<(T, HeaderMap), SouthboundError> {
        let url = self.build_url(path);
        debug!("GET {}", url);

        let response = self.execute(self.client.get(&url), "GET", path).await?;
        let headers = response.headers().clone();
        let text = response.text().await?;
        Ok((decode_body(path, &text)?, headers))
    }

    /// Make a POST request with a JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, SouthboundError> {
        let url = self.build_url(path);
        debug!("POST {}", url);

        let request = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .body(serde_json::to_vec(body)?);
        let response = self.execute(request, "POST", path).await?;
        let text = response.text().await?;
        decode_body(path, &text)
    }

    /// Fetch all pages by following `Link: <...>; rel=next` headers
    ///
    /// A `next` link pointing at a page already fetched ends the walk.
    pub async fn fetch_all_link_pages<T: DeserializeOwned>(
        &self,
        mut url: String,
    ) -> Result<Vec<T>, SouthboundError> {
        let mut all_results = Vec::new();
        let mut visited = HashSet::new();

        loop {
            debug!("Fetching page: {}", url);
            visited.insert(self.build_url(&url));

            let (page, headers): (Vec<T>, HeaderMap) = self.get_with_headers(&url).await?;
            all_results.extend(page);

            let next = headers
                .get_all(LINK)
                .iter()
                .filter_map(|value| value.to_str().ok())
                .find_map(parse_link_next);

            match next.map(|next_url| self.build_url(&next_url)) {
                Some(next_url) if visited.contains(&next_url) => {
                    warn!("Link header points back to {}, stopping", next_url);
                    break;
                }
                Some(next_url) => url = next_url,
                None => break,
            }
        }

        Ok(all_results)
    }
}

/// Map a non-success HTTP status onto an error
pub fn status_error(status: StatusCode, method: &str, path: &str, body: &str) -> SouthboundError {
    let body = excerpt(body);
    match status {
        StatusCode::NOT_FOUND => SouthboundError::NotFound(format!("Resource not found: {path} - {body}")),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            SouthboundError::Authentication(format!("{method} {path} rejected: {status} - {body}"))
        }
        _ => SouthboundError::Api(format!("{method} {path} failed: {status} - {body}")),
    }
}

/// Decode a response body into its schema
///
/// A mismatch is reported as [`SouthboundError::Validation`] carrying the
/// first 500 characters of the body.
pub fn decode_body<T: DeserializeOwned>(path: &str, text: &str) -> Result<T, SouthboundError> {
    serde_json::from_str(text).map_err(|e| {
        SouthboundError::Validation(format!(
            "error decoding response body from {}: {} - Response (first {} chars): {}",
            path,
            e,
            BODY_EXCERPT_CHARS,
            excerpt(text)
        ))
    })
}

/// Encode an identifier for use as a URL path segment
///
/// Empty (or all-whitespace) identifiers are rejected before any request is made.
pub fn path_segment(raw: &str, what: &str) -> Result<String, SouthboundError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SouthboundError::InvalidRequest(format!("{what} must not be empty")));
    }
    Ok(urlencoding::encode(trimmed).into_owned())
}

fn excerpt(text: &str) -> String {
    text.chars().take(BODY_EXCERPT_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn client(base: &str) -> HttpClient {
        HttpClient::new(Client::new(), base.to_string(), AuthScheme::Token("t".to_string()))
    }

    #[test]
    fn test_build_url_trims_and_passes_absolute() {
        let http = client("https://api.mist.com/");
        assert_eq!(http.base_url(), "https://api.mist.com");
        assert_eq!(http.build_url("/api/v1/self"), "https://api.mist.com/api/v1/self");
        assert_eq!(
            http.build_url("https://other.example/api?page=2"),
            "https://other.example/api?page=2"
        );
    }

    #[test]
    fn test_query_string_encoding() {
        let http = client("https://h");
        assert_eq!(
            http.build_query_string(&[("serials[]", "Q2XX-AAAA"), ("name", "edge 1")]),
            "serials%5B%5D=Q2XX-AAAA&name=edge%201"
        );
        assert_eq!(http.with_query("/a", &[]), "/a");
        assert_eq!(http.with_query("/a", &[("x", "1")]), "/a?x=1");
        assert_eq!(http.with_query("/a?y=2", &[("x", "1")]), "/a?y=2&x=1");
    }

    #[test]
    fn test_path_segment() {
        assert_eq!(path_segment(" abc-123 ", "id").unwrap(), "abc-123");
        assert_eq!(path_segment("a/b", "id").unwrap(), "a%2Fb");
        assert!(matches!(
            path_segment("  ", "organization id"),
            Err(SouthboundError::InvalidRequest(msg)) if msg == "organization id must not be empty"
        ));
    }

    #[test]
    fn test_auth_header_values() {
        assert_eq!(AuthScheme::Token("a".into()).header_value().as_deref(), Some("Token a"));
        assert_eq!(AuthScheme::Bearer("b".into()).header_value().as_deref(), Some("Bearer b"));
        assert_eq!(AuthScheme::None.header_value(), None);
        assert_eq!(format!("{:?}", AuthScheme::Bearer("secret".into())), "Bearer(<redacted>)");
    }

    #[test]
    fn test_status_error_mapping() {
        assert!(matches!(
            status_error(StatusCode::NOT_FOUND, "GET", "/x", ""),
            SouthboundError::NotFound(_)
        ));
        assert!(matches!(
            status_error(StatusCode::FORBIDDEN, "GET", "/x", ""),
            SouthboundError::Authentication(_)
        ));
        assert!(matches!(
            status_error(StatusCode::BAD_GATEWAY, "POST", "/x", "upstream"),
            SouthboundError::Api(msg) if msg.contains("upstream")
        ));
    }

    #[derive(Debug, Deserialize)]
    struct Named {
        name: String,
    }

    #[test]
    fn test_decode_body_reports_validation_with_excerpt() {
        let ok: Named = decode_body("/n", r#"{"name": "edge"}"#).unwrap();
        assert_eq!(ok.name, "edge");

        let long_body = format!(r#"{{"other": "{}"}}"#, "x".repeat(2000));
        let err = decode_body::<Named>("/n", &long_body).unwrap_err();
        match err {
            SouthboundError::Validation(msg) => {
                assert!(msg.contains("/n"));
                assert!(msg.len() < 1000);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
