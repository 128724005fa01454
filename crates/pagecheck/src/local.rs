//! In-process page source.
//!
//! Drives the site's axum router directly instead of going through a
//! network transport. Each call synthesizes a fresh GET request with no
//! headers and no body, dispatches it with `tower::ServiceExt::oneshot`,
//! and buffers whatever response the router produces.

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request};
use tower::ServiceExt;

use crate::error::LoaderError;
use crate::loader::{PageSource, to_route_path};
use crate::response::PageResponse;

/// Page source that dispatches into the site's router in-process.
///
/// Holds the router by value and clones it per dispatch (axum routers are
/// cheap reference-counted clones), so concurrent calls never share request
/// state. Created through [`PageLoader::local`](crate::PageLoader::local).
pub struct LocalPageSource {
    router: Router,
}

impl LocalPageSource {
    pub(crate) fn new(router: Router) -> Self {
        Self { router }
    }
}

#[async_trait]
impl PageSource for LocalPageSource {
    async fn fetch_page(&self, path: &str) -> Result<PageResponse, LoaderError> {
        let route = to_route_path(path);

        let request = Request::builder()
            .method(Method::GET)
            .uri(route.as_str())
            .body(Body::empty())?;

        // The router's service error is Infallible; routing failures arrive
        // as status codes in the response.
        let response = match self.router.clone().oneshot(request).await {
            Ok(response) => response,
            Err(infallible) => match infallible {},
        };

        let page = PageResponse::buffer(response).await?;
        tracing::debug!(path = %route, status = %page.status(), "Dispatched page request in-process");
        Ok(page)
    }
}
