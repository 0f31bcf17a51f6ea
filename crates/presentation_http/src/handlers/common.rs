//! Shared orchestration for proxy handlers
//!
//! Every data endpoint walks the same path: validate parameters, look up
//! the cache, fetch from upstream on a miss, classify the data's
//! volatility to pick a TTL, store, and reply with the success envelope.
//! A fresh client request restarts the whole sequence; nothing retries.

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use chrono::{Datelike, Utc};
use std::sync::Arc;
use tracing::info;

use domain::value_objects::{ConstructorId, DriverId, RaceRound, SeasonYear};
use domain::{EndpointSchema, RawParams, RequestSignature, ValidatedParams, classify};
use integration_jolpica::Resource;

use crate::{envelope::ApiSuccess, error::ApiError, middleware::RequestId, state::AppState};

/// Validate raw parameters, mapping failures into the error envelope
pub fn validate(
    schema: EndpointSchema,
    raw: &RawParams,
    request_id: RequestId,
) -> Result<ValidatedParams, ApiError> {
    schema
        .validate(raw)
        .map_err(|details| ApiError::validation(details).with_request_id(request_id.as_uuid()))
}

/// The year field, guaranteed present by every schema that reaches here
pub fn require_year(params: &ValidatedParams) -> Result<SeasonYear, ApiError> {
    params
        .year
        .ok_or_else(|| ApiError::internal("validated parameters are missing a year"))
}

/// The round field, guaranteed present by every schema that reaches here
pub fn require_round(params: &ValidatedParams) -> Result<RaceRound, ApiError> {
    params
        .round
        .ok_or_else(|| ApiError::internal("validated parameters are missing a round"))
}

/// The driver id field, guaranteed present by the driver schema
pub fn require_driver_id(params: &ValidatedParams) -> Result<DriverId, ApiError> {
    params
        .driver_id
        .clone()
        .ok_or_else(|| ApiError::internal("validated parameters are missing a driver id"))
}

/// The constructor id field, guaranteed present by the constructor schema
pub fn require_constructor_id(params: &ValidatedParams) -> Result<ConstructorId, ApiError> {
    params
        .constructor_id
        .clone()
        .ok_or_else(|| ApiError::internal("validated parameters are missing a constructor id"))
}

/// Serve a request through the cache, fetching from upstream on a miss.
///
/// `template` is the endpoint shape used for the cache signature;
/// `endpoint` is the resolved path echoed in the response metadata.
pub async fn proxy_request(
    state: &AppState,
    template: &str,
    endpoint: String,
    resource: Resource,
    params: &ValidatedParams,
    request_id: RequestId,
) -> Result<Response, ApiError> {
    let pairs = params.pairs();
    let signature = RequestSignature::new(template, &pairs);
    let caching = state.config.cache.enabled;

    if caching {
        if let Some(payload) = state.cache.get(&signature).await {
            return Ok(Json(ApiSuccess::new(payload, endpoint, pairs, true)).into_response());
        }
    }

    let payload = state
        .api
        .fetch(&resource)
        .await
        .map_err(|e| ApiError::upstream(&e, &endpoint).with_request_id(request_id.as_uuid()))?;

    let class = classify(&endpoint, params, current_year());
    let ttl = state.ttl.resolve(class);

    let payload = if caching {
        state.cache.insert(&signature, payload, ttl).await
    } else {
        Arc::new(payload)
    };

    info!(
        endpoint = %endpoint,
        class = %class,
        ttl_secs = ttl.as_secs(),
        "Fetched from upstream"
    );

    Ok(Json(ApiSuccess::new(payload, endpoint, pairs, false)).into_response())
}

/// The current calendar year, captured once per request
fn current_year() -> i32 {
    Utc::now().year()
}
