//! Seasons handlers

use axum::{
    Extension,
    extract::{Path, State},
    response::Response,
};

use domain::{EndpointSchema, RawParams};
use integration_jolpica::Resource;

use crate::{error::ApiError, handlers::common, middleware::RequestId, state::AppState};

/// List all F1 seasons
///
/// `GET /seasons`
pub async fn get_seasons(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Result<Response, ApiError> {
    let params = common::validate(EndpointSchema::Seasons, &RawParams::new(), request_id)?;
    common::proxy_request(
        &state,
        "/seasons",
        "/seasons".to_string(),
        Resource::Seasons,
        &params,
        request_id,
    )
    .await
}

/// Get a single season's race table
///
/// `GET /seasons/:year`
pub async fn get_season(
    State(state): State<AppState>,
    Path(year): Path<String>,
    Extension(request_id): Extension<RequestId>,
) -> Result<Response, ApiError> {
    let raw = RawParams::new().with("year", year);
    let params = common::validate(EndpointSchema::Season, &raw, request_id)?;
    let year = common::require_year(&params)?;

    common::proxy_request(
        &state,
        "/seasons/{year}",
        format!("/seasons/{year}"),
        Resource::Season { year },
        &params,
        request_id,
    )
    .await
}
