//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, middleware::RequestIdLayer, state::AppState};

/// Create the main router with all routes.
///
/// The request-id layer lives here because error envelopes depend on it;
/// rate limiting, CORS, and tracing are attached by the composition root.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // System endpoints
        .route("/health", get(handlers::system::health_check))
        .route("/api/info", get(handlers::system::api_info))
        .route("/tools", get(handlers::system::tools_discovery))
        // Seasons
        .route("/seasons", get(handlers::seasons::get_seasons))
        .route("/seasons/{year}", get(handlers::seasons::get_season))
        // Races
        .route("/races/{year}", get(handlers::races::get_races))
        .route("/races/{year}/{round}", get(handlers::races::get_race))
        // Qualifying
        .route(
            "/qualifying/{year}/{round}",
            get(handlers::races::get_qualifying),
        )
        // Lap times
        .route("/laps/{year}/{round}", get(handlers::races::get_lap_times))
        .route("/laps/{year}/{round}/{lap}", get(handlers::races::get_lap))
        // Pit stops
        .route(
            "/pitstops/{year}/{round}",
            get(handlers::races::get_pit_stops),
        )
        // Drivers
        .route("/drivers", get(handlers::drivers::get_drivers))
        .route("/drivers/{year}", get(handlers::drivers::get_drivers_for_year))
        .route(
            "/drivers/{year}/{driver_id}",
            get(handlers::drivers::get_driver),
        )
        // Constructors
        .route("/constructors", get(handlers::constructors::get_constructors))
        .route(
            "/constructors/{year}",
            get(handlers::constructors::get_constructors_for_year),
        )
        .route(
            "/constructors/{year}/{constructor_id}",
            get(handlers::constructors::get_constructor),
        )
        // Standings
        .route("/standings/{year}", get(handlers::standings::get_standings))
        .route(
            "/standings/{year}/{kind}",
            get(handlers::standings::get_standings_by_type),
        )
        // Results
        .route("/results/{year}/{round}", get(handlers::results::get_results))
        // Unknown routes
        .fallback(handlers::system::not_found)
        // Request correlation ids
        .layer(RequestIdLayer::new())
        // Attach state
        .with_state(state)
}
