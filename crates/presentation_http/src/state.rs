//! Application state shared across handlers

use std::{sync::Arc, time::Instant};

use domain::TtlPolicy;
use infrastructure::{AppConfig, ResponseCache};
use integration_jolpica::F1Api;

/// Shared application state.
///
/// The cache and upstream client are constructed once by the composition
/// root and injected here; handlers receive them by reference.
#[derive(Clone)]
pub struct AppState {
    /// Upstream F1 data API client
    pub api: Arc<dyn F1Api>,
    /// Process-wide response cache
    pub cache: Arc<ResponseCache>,
    /// Resolved TTL per volatility class
    pub ttl: TtlPolicy,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Process start time, reported as uptime by `/health`
    pub started_at: Instant,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("cache", &self.cache)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Assemble state from its parts
    #[must_use]
    pub fn new(api: Arc<dyn F1Api>, cache: Arc<ResponseCache>, config: Arc<AppConfig>) -> Self {
        Self {
            api,
            cache,
            ttl: config.cache.ttl_policy(),
            config,
            started_at: Instant::now(),
        }
    }
}
