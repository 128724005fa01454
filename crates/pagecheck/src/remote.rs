//! Remote page source.
//!
//! Fetches pages over HTTP from an already-running deployment, so the same
//! test suite that dispatches in-process can run against a staging host.

use std::time::Duration;

use async_trait::async_trait;
use axum::body::Bytes;
use ureq::Agent;

use crate::error::LoaderError;
use crate::loader::{PageSource, to_route_path};
use crate::response::PageResponse;

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Page source that fetches pages from a deployed site over HTTP.
///
/// Error statuses are carried back as responses, not transport errors, to
/// keep the pass-through contract of the in-process variant. Created through
/// [`PageLoader::remote`](crate::PageLoader::remote).
pub struct RemotePageSource {
    agent: Agent,
    base_url: String,
}

impl RemotePageSource {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    /// Absolute URL for a page path.
    fn page_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, to_route_path(path))
    }
}

#[async_trait]
impl PageSource for RemotePageSource {
    async fn fetch_page(&self, path: &str) -> Result<PageResponse, LoaderError> {
        let url = self.page_url(path);
        let agent = self.agent.clone();

        // ureq is a blocking client; keep the request off the async runtime.
        let page =
            tokio::task::spawn_blocking(move || fetch_blocking(&agent, &url)).await??;

        tracing::debug!(path = %path, status = %page.status(), "Fetched page over HTTP");
        Ok(page)
    }
}

fn fetch_blocking(agent: &Agent, url: &str) -> Result<PageResponse, LoaderError> {
    let response = agent.get(url).call()?;
    let (parts, mut body) = response.into_parts();
    let bytes = body.read_to_vec()?;

    Ok(PageResponse::new(
        parts.status,
        parts.headers,
        Bytes::from(bytes),
    ))
}
