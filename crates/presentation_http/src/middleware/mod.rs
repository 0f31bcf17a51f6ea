//! HTTP middleware components
//!
//! Cross-cutting concerns: request correlation ids and per-IP rate limiting.

pub mod rate_limit;
pub mod request_id;

pub use rate_limit::{RateLimiter, RateLimiterConfig, RateLimiterLayer, RateLimiterState};
pub use request_id::{REQUEST_ID_HEADER, RequestId, RequestIdLayer};
