//! Championship standings handlers

use axum::{
    Extension,
    extract::{Path, State},
    response::Response,
};

use domain::{EndpointSchema, RawParams};
use integration_jolpica::Resource;

use crate::{error::ApiError, handlers::common, middleware::RequestId, state::AppState};

/// Get drivers' standings for a season
///
/// `GET /standings/:year`
pub async fn get_standings(
    State(state): State<AppState>,
    Path(year): Path<String>,
    Extension(request_id): Extension<RequestId>,
) -> Result<Response, ApiError> {
    standings_response(state, RawParams::new().with("year", year), request_id).await
}

/// Get standings for a season by table type
///
/// `GET /standings/:year/:type`
pub async fn get_standings_by_type(
    State(state): State<AppState>,
    Path((year, kind)): Path<(String, String)>,
    Extension(request_id): Extension<RequestId>,
) -> Result<Response, ApiError> {
    let raw = RawParams::new().with("year", year).with("type", kind);
    standings_response(state, raw, request_id).await
}

async fn standings_response(
    state: AppState,
    raw: RawParams,
    request_id: RequestId,
) -> Result<Response, ApiError> {
    let params = common::validate(EndpointSchema::Standings, &raw, request_id)?;
    let year = common::require_year(&params)?;
    let kind = params.standings_type.unwrap_or_default();

    common::proxy_request(
        &state,
        "/standings/{year}",
        format!("/standings/{year}/{kind}"),
        Resource::Standings { year, kind },
        &params,
        request_id,
    )
    .await
}
