//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and paginated paths.

use serde::Serialize;

/// Default page size for list endpoints
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Pagination window sent as `?offset=&limit=`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    pub offset: u32,
    pub limit: u32,
}

impl Page {
    pub fn new(offset: u32, limit: u32) -> Self {
        Self { offset, limit }
    }

    pub fn first(limit: u32) -> Self {
        Self::new(0, limit)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_SIZE)
    }
}

/// Join the API base URL and a path
///
/// # Arguments
/// * `base` - API base like "http://localhost:8000" (trailing slash allowed)
/// * `path` - endpoint path, should start with "/"
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Build a paginated endpoint path
///
/// ```text
/// paged_path("/inventory", Page::new(0, 20)) == "/inventory?offset=0&limit=20"
/// ```
pub fn paged_path(path: &str, page: Page) -> String {
    match serde_qs::to_string(&page) {
        Ok(query) => format!("{}?{}", path, query),
        Err(_) => format!("{}?offset={}&limit={}", path, page.offset, page.limit),
    }
}

/// Encode a single path segment (ids coming from the backend are not trusted
/// to be URL-safe)
pub fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:8000", "/collections"),
            "http://localhost:8000/collections"
        );
        assert_eq!(
            join_url("https://api.example.com/", "daily/claim"),
            "https://api.example.com/daily/claim"
        );
    }

    #[test]
    fn test_paged_path() {
        assert_eq!(
            paged_path("/inventory", Page::default()),
            "/inventory?offset=0&limit=20"
        );
        assert_eq!(
            paged_path("/leaderboard", Page::new(40, 20)),
            "/leaderboard?offset=40&limit=20"
        );
    }

    #[test]
    fn test_path_segment() {
        assert_eq!(path_segment("abc-1"), "abc-1");
        assert_eq!(path_segment("a/b c"), "a%2Fb%20c");
    }
}
