//! Races, qualifying, lap times, and pit stops handlers

use axum::{
    Extension,
    extract::{Path, Query, State},
    response::Response,
};
use serde::Deserialize;

use domain::{EndpointSchema, RawParams};
use integration_jolpica::Resource;

use crate::{error::ApiError, handlers::common, middleware::RequestId, state::AppState};

/// List races for a season
///
/// `GET /races/:year`
pub async fn get_races(
    State(state): State<AppState>,
    Path(year): Path<String>,
    Extension(request_id): Extension<RequestId>,
) -> Result<Response, ApiError> {
    let raw = RawParams::new().with("year", year);
    let params = common::validate(EndpointSchema::Races, &raw, request_id)?;
    let year = common::require_year(&params)?;

    common::proxy_request(
        &state,
        "/races/{year}",
        format!("/races/{year}"),
        Resource::Season { year },
        &params,
        request_id,
    )
    .await
}

/// Get a single race
///
/// `GET /races/:year/:round`
pub async fn get_race(
    State(state): State<AppState>,
    Path((year, round)): Path<(String, String)>,
    Extension(request_id): Extension<RequestId>,
) -> Result<Response, ApiError> {
    let raw = RawParams::new().with("year", year).with("round", round);
    let params = common::validate(EndpointSchema::Race, &raw, request_id)?;
    let year = common::require_year(&params)?;
    let round = common::require_round(&params)?;

    common::proxy_request(
        &state,
        "/races/{year}/{round}",
        format!("/races/{year}/{round}"),
        Resource::Race { year, round },
        &params,
        request_id,
    )
    .await
}

/// Get qualifying results for a race
///
/// `GET /qualifying/:year/:round`
pub async fn get_qualifying(
    State(state): State<AppState>,
    Path((year, round)): Path<(String, String)>,
    Extension(request_id): Extension<RequestId>,
) -> Result<Response, ApiError> {
    let raw = RawParams::new().with("year", year).with("round", round);
    let params = common::validate(EndpointSchema::Qualifying, &raw, request_id)?;
    let year = common::require_year(&params)?;
    let round = common::require_round(&params)?;

    common::proxy_request(
        &state,
        "/qualifying/{year}/{round}",
        format!("/qualifying/{year}/{round}"),
        Resource::Qualifying { year, round },
        &params,
        request_id,
    )
    .await
}

/// Optional lap selector accepted in the query string
#[derive(Debug, Deserialize)]
pub struct LapQuery {
    lap: Option<String>,
}

/// Get lap times for a race, optionally narrowed via `?lap=`
///
/// `GET /laps/:year/:round`
pub async fn get_lap_times(
    State(state): State<AppState>,
    Path((year, round)): Path<(String, String)>,
    Query(query): Query<LapQuery>,
    Extension(request_id): Extension<RequestId>,
) -> Result<Response, ApiError> {
    let mut raw = RawParams::new();
    if let Some(lap) = query.lap {
        raw = raw.with("lap", lap);
    }
    // Path parameters land last so they win on collision
    let raw = raw.with("year", year).with("round", round);
    lap_times_response(state, raw, request_id).await
}

/// Get lap times for one specific lap
///
/// `GET /laps/:year/:round/:lap`
pub async fn get_lap(
    State(state): State<AppState>,
    Path((year, round, lap)): Path<(String, String, String)>,
    Extension(request_id): Extension<RequestId>,
) -> Result<Response, ApiError> {
    let raw = RawParams::new()
        .with("year", year)
        .with("round", round)
        .with("lap", lap);
    lap_times_response(state, raw, request_id).await
}

async fn lap_times_response(
    state: AppState,
    raw: RawParams,
    request_id: RequestId,
) -> Result<Response, ApiError> {
    let params = common::validate(EndpointSchema::LapTimes, &raw, request_id)?;
    let year = common::require_year(&params)?;
    let round = common::require_round(&params)?;
    let lap = params.lap;

    let endpoint = lap.map_or_else(
        || format!("/laps/{year}/{round}"),
        |lap| format!("/laps/{year}/{round}/{lap}"),
    );

    common::proxy_request(
        &state,
        "/laps/{year}/{round}",
        endpoint,
        Resource::Laps { year, round, lap },
        &params,
        request_id,
    )
    .await
}

/// Get pit stops for a race
///
/// `GET /pitstops/:year/:round`
pub async fn get_pit_stops(
    State(state): State<AppState>,
    Path((year, round)): Path<(String, String)>,
    Extension(request_id): Extension<RequestId>,
) -> Result<Response, ApiError> {
    let raw = RawParams::new().with("year", year).with("round", round);
    let params = common::validate(EndpointSchema::PitStops, &raw, request_id)?;
    let year = common::require_year(&params)?;
    let round = common::require_round(&params)?;

    common::proxy_request(
        &state,
        "/pitstops/{year}/{round}",
        format!("/pitstops/{year}/{round}"),
        Resource::PitStops { year, round },
        &params,
        request_id,
    )
    .await
}
