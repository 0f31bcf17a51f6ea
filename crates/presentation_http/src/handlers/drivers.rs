//! Drivers handlers

use axum::{
    Extension,
    extract::{Path, State},
    response::Response,
};

use domain::{EndpointSchema, RawParams};
use integration_jolpica::Resource;

use crate::{error::ApiError, handlers::common, middleware::RequestId, state::AppState};

/// List drivers for the current season
///
/// `GET /drivers`
pub async fn get_drivers(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Result<Response, ApiError> {
    drivers_listing(state, RawParams::new(), request_id).await
}

/// List drivers for a season
///
/// `GET /drivers/:year`
pub async fn get_drivers_for_year(
    State(state): State<AppState>,
    Path(year): Path<String>,
    Extension(request_id): Extension<RequestId>,
) -> Result<Response, ApiError> {
    drivers_listing(state, RawParams::new().with("year", year), request_id).await
}

async fn drivers_listing(
    state: AppState,
    raw: RawParams,
    request_id: RequestId,
) -> Result<Response, ApiError> {
    let params = common::validate(EndpointSchema::Drivers, &raw, request_id)?;
    let year = common::require_year(&params)?;

    common::proxy_request(
        &state,
        "/drivers/{year}",
        format!("/drivers/{year}"),
        Resource::Drivers { year },
        &params,
        request_id,
    )
    .await
}

/// Get a single driver within a season
///
/// `GET /drivers/:year/:driverId`
pub async fn get_driver(
    State(state): State<AppState>,
    Path((year, driver_id)): Path<(String, String)>,
    Extension(request_id): Extension<RequestId>,
) -> Result<Response, ApiError> {
    let raw = RawParams::new()
        .with("year", year)
        .with("driverId", driver_id);
    let params = common::validate(EndpointSchema::Driver, &raw, request_id)?;
    let year = common::require_year(&params)?;
    let driver_id = common::require_driver_id(&params)?;

    common::proxy_request(
        &state,
        "/drivers/{year}/{driverId}",
        format!("/drivers/{year}/{driver_id}"),
        Resource::Driver { year, driver_id },
        &params,
        request_id,
    )
    .await
}
