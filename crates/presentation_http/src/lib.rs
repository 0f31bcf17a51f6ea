//! F1 proxy HTTP presentation layer
//!
//! This crate provides the public HTTP surface of the proxy: routing,
//! per-resource handlers, response envelopes, and middleware.

pub mod envelope;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use envelope::{ApiSuccess, Meta};
pub use error::{ApiError, set_expose_internal_errors};
pub use middleware::{RateLimiterConfig, RateLimiterLayer, RequestId, RequestIdLayer};
pub use routes::create_router;
pub use state::AppState;
