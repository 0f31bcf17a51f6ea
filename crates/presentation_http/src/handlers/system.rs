//! System handlers: health check, API info, and tools discovery

use axum::{
    Extension, Json,
    extract::State,
    http::{Method, Uri},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use infrastructure::CacheStats;

use crate::{error::ApiError, middleware::RequestId, state::AppState};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
    pub uptime_secs: u64,
    pub environment: String,
    pub cache: CacheStatsBody,
}

/// Cache statistics as reported by the health endpoint
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CacheStatsBody {
    pub hits: u64,
    pub misses: u64,
    pub entries: u64,
}

impl From<CacheStats> for CacheStatsBody {
    fn from(stats: CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            entries: stats.entries,
        }
    }
}

/// Liveness check - always answers, bypassing the rate limiter
///
/// `GET /health`
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "f1-proxy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
        uptime_secs: state.started_at.elapsed().as_secs(),
        environment: state.config.environment.to_string(),
        cache: state.cache.stats().into(),
    })
}

/// API information
///
/// `GET /api/info`
pub async fn api_info() -> Json<Value> {
    Json(json!({
        "name": "F1 API Proxy",
        "description": "Formula 1 data API proxy service",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "seasons": "/seasons",
            "races": "/races/:year/:round?",
            "drivers": "/drivers/:year?/:driverId?",
            "constructors": "/constructors/:year?/:constructorId?",
            "qualifying": "/qualifying/:year/:round",
            "results": "/results/:year/:round",
            "standings": "/standings/:year/:type?",
            "lapTimes": "/laps/:year/:round/:lap?",
            "pitStops": "/pitstops/:year/:round",
        },
        "source": "Jolpica F1 API (Ergast Motor Racing Developer API)",
    }))
}

/// Tools discovery catalogue for MCP-style integrations
///
/// `GET /tools`
pub async fn tools_discovery() -> Json<Value> {
    Json(json!({
        "service": "f1-proxy",
        "version": env!("CARGO_PKG_VERSION"),
        "capabilities": [
            "seasons",
            "races",
            "drivers",
            "constructors",
            "qualifying",
            "results",
            "standings",
            "lap-times",
            "pit-stops",
        ],
        "endpoints": [
            {
                "name": "get_seasons",
                "path": "/seasons",
                "method": "GET",
                "description": "Get all F1 seasons",
                "parameters": {},
            },
            {
                "name": "get_races",
                "path": "/races/:year/:round?",
                "method": "GET",
                "description": "Get race schedules and details",
                "parameters": {
                    "year": {"type": "string", "required": true},
                    "round": {"type": "string", "required": false},
                },
            },
            {
                "name": "get_drivers",
                "path": "/drivers/:year?/:driverId?",
                "method": "GET",
                "description": "Get driver information",
                "parameters": {
                    "year": {"type": "string", "required": false, "default": "current"},
                    "driverId": {"type": "string", "required": false},
                },
            },
            {
                "name": "get_constructors",
                "path": "/constructors/:year?/:constructorId?",
                "method": "GET",
                "description": "Get constructor/team data",
                "parameters": {
                    "year": {"type": "string", "required": false, "default": "current"},
                    "constructorId": {"type": "string", "required": false},
                },
            },
            {
                "name": "get_standings",
                "path": "/standings/:year/:type?",
                "method": "GET",
                "description": "Get championship standings",
                "parameters": {
                    "year": {"type": "string", "required": true},
                    "type": {
                        "type": "string",
                        "required": false,
                        "default": "drivers",
                        "enum": ["drivers", "constructors"],
                    },
                },
            },
        ],
    }))
}

/// Fallback for unknown routes
pub async fn not_found(
    method: Method,
    uri: Uri,
    Extension(request_id): Extension<RequestId>,
) -> ApiError {
    ApiError::not_found(format!("Route not found: {method} {}", uri.path()))
        .with_request_id(request_id.as_uuid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_response_serialization() {
        let resp = HealthResponse {
            status: "healthy".to_string(),
            service: "f1-proxy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: "2026-01-01T00:00:00+00:00".to_string(),
            uptime_secs: 42,
            environment: "development".to_string(),
            cache: CacheStatsBody {
                hits: 1,
                misses: 2,
                entries: 3,
            },
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"status\":\"healthy\""));
        assert!(json.contains("\"service\":\"f1-proxy\""));
        assert!(json.contains("uptime_secs"));
        assert!(json.contains("\"hits\":1"));
    }

    #[test]
    fn health_response_deserialization() {
        let json = r#"{
            "status": "healthy",
            "service": "f1-proxy",
            "version": "0.1.0",
            "timestamp": "2026-01-01T00:00:00+00:00",
            "uptime_secs": 0,
            "environment": "development",
            "cache": {"hits": 0, "misses": 0, "entries": 0}
        }"#;
        let resp: HealthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.status, "healthy");
        assert_eq!(resp.cache.entries, 0);
    }

    #[tokio::test]
    async fn api_info_lists_all_endpoint_families() {
        let Json(info) = api_info().await;
        let endpoints = info["endpoints"].as_object().unwrap();
        for family in [
            "seasons",
            "races",
            "drivers",
            "constructors",
            "qualifying",
            "results",
            "standings",
            "lapTimes",
            "pitStops",
        ] {
            assert!(endpoints.contains_key(family), "missing {family}");
        }
    }

    #[tokio::test]
    async fn tools_discovery_lists_capabilities() {
        let Json(tools) = tools_discovery().await;
        let capabilities = tools["capabilities"].as_array().unwrap();
        assert_eq!(capabilities.len(), 9);
        assert_eq!(tools["service"], "f1-proxy");
    }
}
