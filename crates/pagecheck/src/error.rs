//! Error types for the page loading harness.

/// Error from the page loading machinery.
///
/// Dispatcher outcomes are never errors: an error status from the site comes
/// back to the caller as a [`PageResponse`](crate::PageResponse), untouched.
/// These variants cover only faults in acquiring a response at all.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LoaderError {
    /// Path could not be turned into a request URI.
    #[error("invalid page path")]
    InvalidPath(#[from] axum::http::Error),

    /// Response body stream failed while buffering.
    #[error("failed to read page body")]
    Body(#[from] axum::Error),

    /// HTTP transport failed (network error, timeout, etc).
    #[error("HTTP request failed")]
    Transport(#[from] ureq::Error),

    /// Remote fetch worker did not complete.
    #[error("fetch task failed")]
    Join(#[from] tokio::task::JoinError),

    /// JSON deserialization of a page body failed.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),
}
