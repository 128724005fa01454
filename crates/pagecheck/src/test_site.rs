//! Deterministic fixture site for harness tests.
//!
//! A small axum router that stands in for a documentation site's dispatcher:
//! a couple of rendered HTML pages, a JSON page API endpoint, a handler that
//! fails the way a broken renderer would, and an echo route that reports
//! what the synthesized request looked like. Unmatched routes fall through
//! to the router's own 404.

use axum::Json;
use axum::Router;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use serde_json::json;

/// Build the fixture site router.
pub(crate) fn fixture_site() -> Router {
    Router::new()
        .route("/docs/intro", get(intro_page))
        .route("/docs/guide", get(guide_page))
        .route("/api/pages/intro", get(intro_page_api))
        .route("/internal/error", get(failing_page))
        .route("/echo", get(echo_request))
}

async fn intro_page() -> Html<&'static str> {
    Html("<h1>Introduction</h1><p>Welcome to the docs.</p>")
}

async fn guide_page() -> Html<&'static str> {
    Html("<h1>Guide</h1><p>How to write pages.</p>")
}

async fn intro_page_api() -> Json<serde_json::Value> {
    Json(json!({
        "meta": {
            "title": "Introduction",
            "path": "/docs/intro",
        },
        "content": "<h1>Introduction</h1><p>Welcome to the docs.</p>",
    }))
}

/// Fail the way a site maps an internal rendering error.
async fn failing_page() -> impl IntoResponse {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": "Render error: template exploded"})),
    )
}

/// Report the incoming request's shape so tests can check what the loader
/// synthesized.
async fn echo_request(request: Request) -> Json<serde_json::Value> {
    let (parts, body) = request.into_parts();
    let body = axum::body::to_bytes(body, usize::MAX).await.unwrap_or_default();

    Json(json!({
        "method": parts.method.as_str(),
        "headers": parts.headers.len(),
        "body_bytes": body.len(),
    }))
}
