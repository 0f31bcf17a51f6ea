//! Race results handlers

use axum::{
    Extension,
    extract::{Path, State},
    response::Response,
};

use domain::{EndpointSchema, RawParams};
use integration_jolpica::Resource;

use crate::{error::ApiError, handlers::common, middleware::RequestId, state::AppState};

/// Get results for a race
///
/// `GET /results/:year/:round`
pub async fn get_results(
    State(state): State<AppState>,
    Path((year, round)): Path<(String, String)>,
    Extension(request_id): Extension<RequestId>,
) -> Result<Response, ApiError> {
    let raw = RawParams::new().with("year", year).with("round", round);
    let params = common::validate(EndpointSchema::Results, &raw, request_id)?;
    let year = common::require_year(&params)?;
    let round = common::require_round(&params)?;

    common::proxy_request(
        &state,
        "/results/{year}/{round}",
        format!("/results/{year}/{round}"),
        Resource::Results { year, round },
        &params,
        request_id,
    )
    .await
}
