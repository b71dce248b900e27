//! Pagination helpers
//!
//! Vendors page their collections differently: Meraki uses RFC 5988 `Link`
//! headers, Mist reports totals in `X-Page-*` headers, and Velocloud V2 embeds
//! a `_metadata` block in the body (handled in its own crate).

use reqwest::header::HeaderMap;

/// Extract the `rel=next` target from a `Link` header value
///
/// ```
/// use southbound_common::parse_link_next;
///
/// let header = r#"<https://api.meraki.com/api/v1/organizations?startingAfter=0>; rel=first, <https://api.meraki.com/api/v1/organizations?startingAfter=42>; rel=next"#;
/// assert_eq!(
///     parse_link_next(header).as_deref(),
///     Some("https://api.meraki.com/api/v1/organizations?startingAfter=42")
/// );
/// ```
pub fn parse_link_next(header: &str) -> Option<String> {
    header.split(',').find_map(|link| {
        let mut parts = link.split(';');
        let target = parts.next()?.trim();
        let target = target.strip_prefix('<')?.strip_suffix('>')?;
        let is_next = parts.any(|param| {
            let mut kv = param.trim().splitn(2, '=');
            let key = kv.next().unwrap_or_default().trim();
            let value = kv.next().unwrap_or_default().trim().trim_matches('"');
            key.eq_ignore_ascii_case("rel") && value.split_whitespace().any(|rel| rel == "next")
        });
        is_next.then(|| target.to_string())
    })
}

/// Page counters reported in `X-Page-Total` / `X-Page-Limit` / `X-Page-Page`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageHeaders {
    /// Total number of items across all pages
    pub total: Option<u64>,
    /// Page size the server applied
    pub limit: Option<u64>,
    /// Current page number (1-based)
    pub page: Option<u64>,
}

impl PageHeaders {
    /// Read page counters from response headers, ignoring malformed values
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let read = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok())
        };
        Self {
            total: read("x-page-total"),
            limit: read("x-page-limit"),
            page: read("x-page-page"),
        }
    }

    /// Whether another page should be requested after `fetched` items
    ///
    /// Without a total, a short page (fewer than `page_size` items) ends the
    /// sequence.
    #[must_use]
    pub fn has_more(&self, fetched: u64, last_page_len: usize, page_size: u64) -> bool {
        if last_page_len == 0 {
            return false;
        }
        match self.total {
            Some(total) => fetched < total,
            None => (last_page_len as u64) >= self.limit.unwrap_or(page_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_parse_link_next_quoted_rel() {
        let header = r#"<https://n1.meraki.com/api/v1/organizations/1/devices?perPage=2&startingAfter=Q2>; rel="next""#;
        assert_eq!(
            parse_link_next(header).as_deref(),
            Some("https://n1.meraki.com/api/v1/organizations/1/devices?perPage=2&startingAfter=Q2")
        );
    }

    #[test]
    fn test_parse_link_next_absent() {
        let header = "<https://h/a?startingAfter=0>; rel=first, <https://h/a?endingBefore=z>; rel=prev";
        assert_eq!(parse_link_next(header), None);
        assert_eq!(parse_link_next(""), None);
        assert_eq!(parse_link_next("garbage; rel=next"), None);
    }

    #[test]
    fn test_page_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("X-Page-Total", HeaderValue::from_static("250"));
        headers.insert("X-Page-Limit", HeaderValue::from_static("100"));
        headers.insert("X-Page-Page", HeaderValue::from_static("bogus"));

        let page = PageHeaders::from_headers(&headers);
        assert_eq!(page.total, Some(250));
        assert_eq!(page.limit, Some(100));
        assert_eq!(page.page, None);

        assert!(page.has_more(200, 100, 100));
        assert!(!page.has_more(250, 50, 100));
        assert!(!page.has_more(0, 0, 100));
    }

    #[test]
    fn test_has_more_without_total_uses_short_page() {
        let page = PageHeaders::default();
        assert!(page.has_more(100, 100, 100));
        assert!(!page.has_more(130, 30, 100));
    }
}
