//! F1 API Proxy HTTP Server
//!
//! Main entry point for the proxy server.

use std::{net::SocketAddr, sync::Arc, time::Duration};

use infrastructure::{AppConfig, ResponseCache, ResponseCacheConfig};
use integration_jolpica::{F1Api, JolpicaClient, JolpicaConfig};
use presentation_http::{
    RateLimiterConfig, RateLimiterLayer, middleware::rate_limit::spawn_cleanup_task, routes,
    set_expose_internal_errors, state::AppState,
};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "f1_proxy_server=debug,presentation_http=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🏎️  f1-proxy v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    info!(
        host = %config.server.host,
        port = %config.server.port,
        upstream = %config.upstream.base_url,
        environment = %config.environment,
        "Configuration loaded"
    );

    set_expose_internal_errors(config.environment.exposes_internal_errors());

    // Initialize the upstream client
    let api = JolpicaClient::new(JolpicaConfig {
        base_url: config.upstream.base_url.clone(),
        timeout_secs: config.upstream.timeout_secs,
        user_agent: config.upstream.user_agent.clone(),
    })
    .map_err(|e| anyhow::anyhow!("Failed to initialize upstream client: {e}"))?;

    // Initialize the response cache
    let cache = ResponseCache::with_config(ResponseCacheConfig {
        max_entries: config.cache.max_entries,
    });

    // Create app state owned by this composition root
    let config = Arc::new(config);
    let api: Arc<dyn F1Api> = Arc::new(api);
    let state = AppState::new(api, Arc::new(cache), Arc::clone(&config));

    // Build router
    let app = routes::create_router(state);

    // Configure CORS layer
    let cors_layer = if config.server.allowed_origins.is_empty() {
        // Development mode: allow all origins
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production mode: restrict to configured origins
        use axum::http::{HeaderValue, Method};
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
            .allow_headers(Any)
    };

    // Configure rate limiter
    let rate_limiter = RateLimiterLayer::new(&RateLimiterConfig {
        enabled: config.security.rate_limit_enabled,
        window_secs: config.security.rate_limit_window_secs,
        max_requests: config.security.rate_limit_max_requests,
    });
    spawn_cleanup_task(
        rate_limiter.state(),
        Duration::from_secs(300),
        Duration::from_secs(2 * config.security.rate_limit_window_secs),
    );

    // Add middleware (order matters: first added = outermost)
    let app = app
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .layer(rate_limiter);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Server listening on http://{}", addr);

    // Graceful shutdown configuration
    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
    .await?;

    info!("👋 Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("⏳ Waiting up to {:?} for connections to close...", timeout);
    // The actual connection draining is handled by axum's graceful_shutdown
}
