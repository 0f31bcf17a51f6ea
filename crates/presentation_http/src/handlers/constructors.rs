//! Constructors handlers

use axum::{
    Extension,
    extract::{Path, State},
    response::Response,
};

use domain::{EndpointSchema, RawParams};
use integration_jolpica::Resource;

use crate::{error::ApiError, handlers::common, middleware::RequestId, state::AppState};

/// List constructors for the current season
///
/// `GET /constructors`
pub async fn get_constructors(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Result<Response, ApiError> {
    constructors_listing(state, RawParams::new(), request_id).await
}

/// List constructors for a season
///
/// `GET /constructors/:year`
pub async fn get_constructors_for_year(
    State(state): State<AppState>,
    Path(year): Path<String>,
    Extension(request_id): Extension<RequestId>,
) -> Result<Response, ApiError> {
    constructors_listing(state, RawParams::new().with("year", year), request_id).await
}

async fn constructors_listing(
    state: AppState,
    raw: RawParams,
    request_id: RequestId,
) -> Result<Response, ApiError> {
    let params = common::validate(EndpointSchema::Constructors, &raw, request_id)?;
    let year = common::require_year(&params)?;

    common::proxy_request(
        &state,
        "/constructors/{year}",
        format!("/constructors/{year}"),
        Resource::Constructors { year },
        &params,
        request_id,
    )
    .await
}

/// Get a single constructor within a season
///
/// `GET /constructors/:year/:constructorId`
pub async fn get_constructor(
    State(state): State<AppState>,
    Path((year, constructor_id)): Path<(String, String)>,
    Extension(request_id): Extension<RequestId>,
) -> Result<Response, ApiError> {
    let raw = RawParams::new()
        .with("year", year)
        .with("constructorId", constructor_id);
    let params = common::validate(EndpointSchema::Constructor, &raw, request_id)?;
    let year = common::require_year(&params)?;
    let constructor_id = common::require_constructor_id(&params)?;

    common::proxy_request(
        &state,
        "/constructors/{year}/{constructorId}",
        format!("/constructors/{year}/{constructor_id}"),
        Resource::Constructor {
            year,
            constructor_id,
        },
        &params,
        request_id,
    )
    .await
}
