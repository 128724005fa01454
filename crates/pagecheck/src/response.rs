//! Buffered page response.
//!
//! [`PageResponse`] is the caller-owned result of a page load. The harness
//! buffers the body once and hands the whole value over; it never inspects
//! or rewrites what the dispatcher produced.

use std::borrow::Cow;

use axum::body::{Body, Bytes, to_bytes};
use axum::http::{HeaderMap, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::LoaderError;

/// A fully buffered response for a single page request.
pub struct PageResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl PageResponse {
    /// Assemble a response from already-buffered parts.
    pub(crate) fn new(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Buffer a streaming response produced by an in-process dispatch.
    ///
    /// # Errors
    ///
    /// Returns [`LoaderError::Body`] if the body stream fails before it is
    /// fully read.
    pub(crate) async fn buffer(response: Response<Body>) -> Result<Self, LoaderError> {
        let (parts, body) = response.into_parts();
        let body = to_bytes(body, usize::MAX).await?;
        Ok(Self::new(parts.status, parts.headers, body))
    }

    /// HTTP status the dispatcher chose for the path.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Raw body bytes.
    #[must_use]
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Body as text (lossy UTF-8).
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Deserialize the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`LoaderError::Json`] if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, LoaderError> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}
