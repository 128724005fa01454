//! Page loader entry point and variant seam.
//!
//! [`PageLoader::get_page`] is the one operation tests call. The acquisition
//! strategy lives behind the [`PageSource`] trait; the loader delegates to
//! its source unchanged and adds no caching or retries of its own.

use async_trait::async_trait;
use axum::Router;

use crate::error::LoaderError;
use crate::local::LocalPageSource;
use crate::remote::RemotePageSource;
use crate::response::PageResponse;

/// Environment variable naming a deployed site to test against.
///
/// When set and non-empty, [`PageLoader::from_env`] fetches pages over HTTP
/// from that host instead of dispatching in-process.
pub const REMOTE_HOST_VAR: &str = "PAGECHECK_REMOTE_HOST";

/// A strategy for producing a page response for a logical path.
///
/// This is the only extension point: each variant supplies `fetch_page` and
/// nothing else. The stable public contract lives on [`PageLoader`].
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Produce the site's response for `path`.
    ///
    /// Implementations pass the dispatcher's outcome through unmodified;
    /// error statuses are responses, not errors.
    async fn fetch_page(&self, path: &str) -> Result<PageResponse, LoaderError>;
}

/// Stable entry point for fetching pages in tests.
///
/// Instances come only through the named factories ([`local`](Self::local),
/// [`remote`](Self::remote), [`from_env`](Self::from_env)); the loader holds
/// no mutable state and is safe to share across parallel test cases.
pub struct PageLoader {
    source: Box<dyn PageSource>,
}

impl PageLoader {
    fn new(source: Box<dyn PageSource>) -> Self {
        Self { source }
    }

    /// Load pages by dispatching into the site's router in-process.
    #[must_use]
    pub fn local(router: Router) -> Self {
        Self::new(Box::new(LocalPageSource::new(router)))
    }

    /// Load pages over HTTP from a deployed site.
    #[must_use]
    pub fn remote(base_url: impl Into<String>) -> Self {
        Self::new(Box::new(RemotePageSource::new(base_url)))
    }

    /// Select the variant from the environment.
    ///
    /// Uses the remote variant when [`REMOTE_HOST_VAR`] names a host,
    /// otherwise dispatches into `router` in-process.
    #[must_use]
    pub fn from_env(router: Router) -> Self {
        Self::select(std::env::var(REMOTE_HOST_VAR).ok(), router)
    }

    fn select(remote_host: Option<String>, router: Router) -> Self {
        match effective_host(remote_host) {
            Some(host) => Self::remote(host),
            None => Self::local(router),
        }
    }

    /// Fetch the site's response for `path`.
    ///
    /// # Errors
    ///
    /// Returns [`LoaderError`] only when the variant could not obtain a
    /// response at all; whatever the dispatcher produced, 404s and error
    /// pages included, is returned as a [`PageResponse`].
    pub async fn get_page(&self, path: &str) -> Result<PageResponse, LoaderError> {
        self.source.fetch_page(path).await
    }
}

/// Treat an unset or empty host variable as "no remote host".
fn effective_host(remote_host: Option<String>) -> Option<String> {
    remote_host.filter(|host| !host.trim().is_empty())
}

/// Convert a caller-supplied path to an absolute route.
///
/// Both variants address the site by absolute route, so `docs/intro` and
/// `/docs/intro` load the same page; an empty path means the root page.
pub(crate) fn to_route_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_site;

    #[test]
    fn test_effective_host_unset() {
        assert_eq!(effective_host(None), None);
    }

    #[test]
    fn test_effective_host_empty() {
        assert_eq!(effective_host(Some(String::new())), None);
        assert_eq!(effective_host(Some("   ".to_owned())), None);
    }

    #[test]
    fn test_effective_host_set() {
        assert_eq!(
            effective_host(Some("https://docs.example.com".to_owned())),
            Some("https://docs.example.com".to_owned())
        );
    }

    #[test]
    fn test_to_route_path_adds_leading_slash() {
        assert_eq!(to_route_path("docs/intro"), "/docs/intro");
    }

    #[test]
    fn test_to_route_path_keeps_absolute_path() {
        assert_eq!(to_route_path("/docs/intro"), "/docs/intro");
    }

    #[test]
    fn test_to_route_path_empty_is_root() {
        assert_eq!(to_route_path(""), "/");
    }

    #[tokio::test]
    async fn test_select_without_host_dispatches_in_process() {
        let loader = PageLoader::select(None, test_site::fixture_site());

        let page = loader.get_page("/docs/intro").await.unwrap();

        assert_eq!(page.status(), StatusCode::OK);
        assert!(page.text().contains("Introduction"));
    }

    #[tokio::test]
    async fn test_get_page_delegates_unchanged() {
        let loader = PageLoader::local(test_site::fixture_site());

        let page = loader.get_page("/does/not/exist").await.unwrap();

        assert_eq!(page.status(), StatusCode::NOT_FOUND);
    }
}
