#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings: these drive the integration
// tests under tests/
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod testkit;

// Re-export primary types
pub use bootstrap::{AppContext, bootstrap, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
pub use testkit::TestApp;
