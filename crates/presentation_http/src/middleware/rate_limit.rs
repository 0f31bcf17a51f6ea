//! Rate limiting middleware
//!
//! Token bucket rate limiter that limits requests per IP address. The
//! bucket refills continuously at `max_requests / window` per second, so a
//! client gets at most `max_requests` within any window. Health checks are
//! excluded so orchestrators can always probe the service.

use std::{
    collections::HashMap,
    future::Future,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
    time::{Duration, Instant},
};

use axum::{
    extract::{ConnectInfo, Request},
    response::{IntoResponse, Response},
};
use tokio::sync::RwLock;
use tower::{Layer, Service};
use tracing::warn;

use crate::error::ApiError;

/// Rate limiter configuration
#[derive(Clone, Debug)]
pub struct RateLimiterConfig {
    /// Enable rate limiting
    pub enabled: bool,
    /// Window length in seconds
    pub window_secs: u64,
    /// Maximum requests per IP within one window
    pub max_requests: u32,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            window_secs: 15 * 60,
            max_requests: 100,
        }
    }
}

/// Token bucket entry for a single IP
#[derive(Debug, Clone)]
struct TokenBucket {
    tokens: f64,
    last_update: Instant,
}

impl TokenBucket {
    fn new(max_tokens: f64) -> Self {
        Self {
            tokens: max_tokens,
            last_update: Instant::now(),
        }
    }

    /// Try to consume a token, returning true if allowed
    fn try_consume(&mut self, tokens_per_second: f64, max_tokens: f64) -> bool {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_update).as_secs_f64();

        // Refill tokens based on elapsed time
        self.tokens = elapsed
            .mul_add(tokens_per_second, self.tokens)
            .min(max_tokens);
        self.last_update = now;

        if self.tokens >= 1.0 {
            self.tokens -= 1.0;
            true
        } else {
            false
        }
    }
}

/// Shared rate limiter state
#[derive(Debug)]
pub struct RateLimiterState {
    buckets: RwLock<HashMap<IpAddr, TokenBucket>>,
    tokens_per_second: f64,
    max_tokens: f64,
}

impl RateLimiterState {
    /// Create a new rate limiter state
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(window_secs: u64, max_requests: u32) -> Self {
        let max_tokens = f64::from(max_requests);
        let window_secs = window_secs.max(1);
        Self {
            buckets: RwLock::new(HashMap::new()),
            tokens_per_second: max_tokens / window_secs as f64,
            max_tokens,
        }
    }

    /// Check if a request from the given IP is allowed
    #[allow(clippy::significant_drop_tightening)]
    pub async fn check(&self, ip: IpAddr) -> bool {
        let mut buckets = self.buckets.write().await;

        let bucket = buckets
            .entry(ip)
            .or_insert_with(|| TokenBucket::new(self.max_tokens));

        let tokens_per_second = self.tokens_per_second;
        let max_tokens = self.max_tokens;
        bucket.try_consume(tokens_per_second, max_tokens)
    }

    /// Clean up stale entries older than the specified duration
    pub async fn cleanup(&self, older_than: Duration) {
        let mut buckets = self.buckets.write().await;
        let cutoff = Instant::now()
            .checked_sub(older_than)
            .unwrap_or_else(Instant::now);

        buckets.retain(|_, bucket| bucket.last_update > cutoff);
    }
}

/// Spawn a background task that periodically drops stale buckets
pub fn spawn_cleanup_task(state: Arc<RateLimiterState>, interval: Duration, max_age: Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            state.cleanup(max_age).await;
        }
    });
}

/// Layer that applies rate limiting
#[derive(Clone, Debug)]
pub struct RateLimiterLayer {
    state: Arc<RateLimiterState>,
    enabled: bool,
    excluded_paths: Vec<String>,
}

impl RateLimiterLayer {
    /// Create a new rate limiter layer
    #[must_use]
    pub fn new(config: &RateLimiterConfig) -> Self {
        Self {
            state: Arc::new(RateLimiterState::new(
                config.window_secs,
                config.max_requests,
            )),
            enabled: config.enabled,
            excluded_paths: vec!["/health".to_string()],
        }
    }

    /// Add paths that should be excluded from rate limiting
    #[must_use]
    pub fn exclude_paths(mut self, paths: Vec<String>) -> Self {
        self.excluded_paths.extend(paths);
        self
    }

    /// Get a reference to the rate limiter state for cleanup tasks
    #[must_use]
    pub fn state(&self) -> Arc<RateLimiterState> {
        Arc::clone(&self.state)
    }
}

impl<S> Layer<S> for RateLimiterLayer {
    type Service = RateLimiter<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RateLimiter {
            inner,
            state: Arc::clone(&self.state),
            enabled: self.enabled,
            excluded_paths: self.excluded_paths.clone(),
        }
    }
}

/// Middleware service for rate limiting
#[derive(Clone, Debug)]
pub struct RateLimiter<S> {
    inner: S,
    state: Arc<RateLimiterState>,
    enabled: bool,
    excluded_paths: Vec<String>,
}

impl<S> Service<Request> for RateLimiter<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let enabled = self.enabled;
        let state = Arc::clone(&self.state);
        let excluded_paths = self.excluded_paths.clone();
        let mut inner = self.inner.clone();

        Box::pin(async move {
            // If rate limiting is disabled, pass through
            if !enabled {
                return inner.call(req).await;
            }

            // Health checks bypass the limiter entirely
            let path = req.uri().path();
            if excluded_paths.iter().any(|p| path == p) {
                return inner.call(req).await;
            }

            let client_ip = extract_client_ip(&req);

            if state.check(client_ip).await {
                inner.call(req).await
            } else {
                warn!(ip = %client_ip, path = %req.uri().path(), "Rate limit exceeded");
                Ok(ApiError::rate_limited().into_response())
            }
        })
    }
}

/// Extract the client IP from X-Forwarded-For or the connection info.
///
/// The service is expected to run behind an ingress that sets the header;
/// without one, the peer address from the connection is used.
fn extract_client_ip(req: &Request) -> IpAddr {
    let forwarded = req
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .and_then(|v| v.trim().parse::<IpAddr>().ok());

    forwarded
        .or_else(|| {
            req.extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|info| info.0.ip())
        })
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(last: u8) -> IpAddr {
        IpAddr::V4(Ipv4Addr::new(10, 0, 0, last))
    }

    #[tokio::test]
    async fn allows_up_to_max_requests() {
        let state = RateLimiterState::new(60, 5);
        for _ in 0..5 {
            assert!(state.check(ip(1)).await);
        }
        assert!(!state.check(ip(1)).await);
    }

    #[tokio::test]
    async fn buckets_are_per_ip() {
        let state = RateLimiterState::new(60, 1);
        assert!(state.check(ip(1)).await);
        assert!(!state.check(ip(1)).await);
        assert!(state.check(ip(2)).await);
    }

    #[tokio::test]
    async fn tokens_refill_over_time() {
        // 60 requests per second window: refills fast enough to observe
        let state = RateLimiterState::new(1, 60);
        for _ in 0..60 {
            let _ = state.check(ip(1)).await;
        }
        assert!(!state.check(ip(1)).await);

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(state.check(ip(1)).await);
    }

    #[tokio::test]
    async fn cleanup_drops_stale_buckets() {
        let state = RateLimiterState::new(60, 5);
        let _ = state.check(ip(1)).await;

        state.cleanup(Duration::ZERO).await;
        let buckets = state.buckets.read().await;
        assert!(buckets.is_empty());
    }

    #[test]
    fn default_config_matches_original_window() {
        let config = RateLimiterConfig::default();
        assert!(config.enabled);
        assert_eq!(config.window_secs, 900);
        assert_eq!(config.max_requests, 100);
    }

    #[test]
    fn zero_window_is_clamped() {
        let state = RateLimiterState::new(0, 10);
        assert!(state.tokens_per_second.is_finite());
    }
}
