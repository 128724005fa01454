//! Page loading harness for documentation site tests.
//!
//! This crate lets automated tests fetch a rendered page from a documentation
//! site without starting a real network server. Tests talk to a single entry
//! point, [`PageLoader::get_page`], and the acquisition strategy stays hidden
//! behind the [`PageSource`] seam:
//!
//! - [`LocalPageSource`] drives the site's axum router in-process via
//!   `tower::ServiceExt::oneshot` (no sockets, no separate process)
//! - [`RemotePageSource`] fetches the same pages over HTTP from an
//!   already-running deployment
//!
//! [`PageLoader::from_env`] picks between the two from the
//! [`REMOTE_HOST_VAR`] environment variable, so one test suite runs against
//! either an in-process site or a staging host.
//!
//! # Quick Start
//!
//! ```no_run
//! use axum::Router;
//! use axum::routing::get;
//! use pagecheck::PageLoader;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let site = Router::new().route("/docs/intro", get(|| async { "Introduction" }));
//!
//! let loader = PageLoader::local(site);
//! let page = loader.get_page("/docs/intro").await?;
//!
//! assert_eq!(page.status(), axum::http::StatusCode::OK);
//! assert!(page.text().contains("Introduction"));
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Test case ──get_page(path)──► PageLoader
//!                                   │
//!                                   └─► PageSource (variant seam)
//!                                           │
//!                                           ├─► LocalPageSource ──oneshot──► site Router
//!                                           │
//!                                           └─► RemotePageSource ──HTTP GET──► deployed site
//! ```
//!
//! The loader is a pass-through: whatever response the site's dispatcher
//! produces for a path, 404s and error pages included, comes back to the
//! caller as a [`PageResponse`]. Only faults in the loading machinery itself
//! (an unparsable path, a broken transport) surface as [`LoaderError`].

mod error;
mod loader;
mod local;
mod remote;
mod response;

#[cfg(test)]
mod test_site;

pub use error::LoaderError;
pub use loader::{PageLoader, PageSource, REMOTE_HOST_VAR};
pub use local::LocalPageSource;
pub use remote::RemotePageSource;
pub use response::PageResponse;
