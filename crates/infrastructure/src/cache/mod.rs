//! Response cache
//!
//! In-memory cache for decoded upstream payloads, keyed by request
//! signature with an independent TTL per entry.

mod response_cache;

pub use response_cache::{CacheStats, ResponseCache, ResponseCacheConfig};
