//! Moka-backed response cache with per-entry TTL
//!
//! Each entry carries its own lifetime, assigned from the volatility class
//! of the request that produced it. Expired entries are never returned;
//! moka evicts them lazily. A configurable capacity bound with TinyLFU
//! eviction keeps memory bounded under sustained unique-signature traffic.

use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::{Duration, Instant},
};

use moka::{Expiry, future::Cache};
use serde_json::Value;
use tracing::debug;

use domain::RequestSignature;

/// A cached upstream payload with its assigned lifetime
#[derive(Debug, Clone)]
struct CachedEntry {
    payload: Arc<Value>,
    ttl: Duration,
}

/// Expiry policy reading each entry's own TTL
struct PerEntryTtl;

impl Expiry<String, CachedEntry> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        entry: &CachedEntry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        entry: &CachedEntry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        // Overwrites restart the clock with the new entry's TTL
        Some(entry.ttl)
    }
}

/// Configuration for the response cache
#[derive(Debug, Clone, Copy)]
pub struct ResponseCacheConfig {
    /// Maximum number of cached responses
    pub max_entries: u64,
}

impl Default for ResponseCacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 10_000,
        }
    }
}

/// Cache statistics snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct CacheStats {
    /// Lookups that returned a live entry
    pub hits: u64,
    /// Lookups that found nothing, or only an expired entry
    pub misses: u64,
    /// Approximate number of live entries
    pub entries: u64,
}

/// In-memory response cache keyed by request signature.
///
/// Entries are atomic payload replacements; the last writer for a signature
/// wins. Nothing is persisted, so the cache starts empty on process start.
pub struct ResponseCache {
    cache: Cache<String, CachedEntry>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl std::fmt::Debug for ResponseCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseCache")
            .field("entries", &self.cache.entry_count())
            .field("hits", &self.hits.load(Ordering::Relaxed))
            .field("misses", &self.misses.load(Ordering::Relaxed))
            .finish()
    }
}

impl ResponseCache {
    /// Create a cache with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ResponseCacheConfig::default())
    }

    /// Create a cache with custom configuration
    #[must_use]
    pub fn with_config(config: ResponseCacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_entries)
            .expire_after(PerEntryTtl)
            .build();

        Self {
            cache,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Look up a payload; absent and expired entries both miss.
    pub async fn get(&self, signature: &RequestSignature) -> Option<Arc<Value>> {
        if let Some(entry) = self.cache.get(signature.as_str()).await {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!(signature = %signature, "Cache hit");
            Some(entry.payload)
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            debug!(signature = %signature, "Cache miss");
            None
        }
    }

    /// Store a payload, unconditionally overwriting any previous entry.
    ///
    /// Returns the shared payload so callers can reply without re-cloning.
    pub async fn insert(
        &self,
        signature: &RequestSignature,
        payload: Value,
        ttl: Duration,
    ) -> Arc<Value> {
        let payload = Arc::new(payload);
        let entry = CachedEntry {
            payload: Arc::clone(&payload),
            ttl,
        };
        self.cache.insert(signature.as_str().to_string(), entry).await;
        debug!(signature = %signature, ttl_secs = ttl.as_secs(), "Cache store");
        payload
    }

    /// Drop every entry. An explicit operator action.
    pub fn clear(&self) {
        self.cache.invalidate_all();
        debug!("Cache cleared");
    }

    /// Current statistics snapshot.
    ///
    /// The entry count is approximate until pending maintenance runs.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.cache.entry_count(),
        }
    }

    /// Run moka's pending maintenance so counts and evictions settle.
    pub async fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks().await;
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new()
    }
}
