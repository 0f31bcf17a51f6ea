//! API error handling
//!
//! Every failure leaves the service as one uniform envelope:
//! `{"error": {"message", "code", "status", "requestId"?, "details"?}}`.
//! Errors are constructed at the point of failure, carry the request id
//! when one is known, and are serialized exactly once at this boundary.
//! In production mode, internal error detail is suppressed.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use uuid::Uuid;

use domain::FieldError;
use integration_jolpica::JolpicaError;

/// Global flag to control error detail exposure
/// Set to false in production to prevent information leakage
static EXPOSE_INTERNAL_ERRORS: AtomicBool = AtomicBool::new(true);

/// Configure whether internal error details should be exposed in responses.
///
/// In production environments, this should be set to `false` so unexpected
/// failures reply with a generic message instead of implementation detail.
pub fn set_expose_internal_errors(expose: bool) {
    EXPOSE_INTERNAL_ERRORS.store(expose, Ordering::SeqCst);
}

fn should_expose_details() -> bool {
    EXPOSE_INTERNAL_ERRORS.load(Ordering::SeqCst)
}

/// The failure taxonomy, matched exhaustively when formatting the response
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Request parameters violated an endpoint schema
    #[error("Validation Error")]
    Validation(Vec<FieldError>),

    /// The upstream API failed or could not be reached
    #[error("{message}")]
    Upstream { status: StatusCode, message: String },

    /// No route matches the request
    #[error("Route not found: {0}")]
    NotFound(String),

    /// The client exhausted its request budget
    #[error("Too many requests from this IP, please try again later")]
    RateLimited,

    /// Unexpected programmer fault
    #[error("Internal Server Error")]
    Internal(String),
}

/// API error carrying its kind and, when known, the request id
#[derive(Debug)]
pub struct ApiError {
    kind: ErrorKind,
    request_id: Option<Uuid>,
}

impl ApiError {
    /// A validation failure with per-field details
    #[must_use]
    pub fn validation(details: Vec<FieldError>) -> Self {
        Self::from_kind(ErrorKind::Validation(details))
    }

    /// An upstream failure, normalized from the client error.
    ///
    /// The endpoint goes into the message so clients see what failed; the
    /// status mirrors upstream, or 503/502 for transport and decode faults.
    #[must_use]
    pub fn upstream(err: &JolpicaError, endpoint: &str) -> Self {
        if let JolpicaError::InvalidRequest(detail) = err {
            return Self::internal(detail.clone());
        }
        let status =
            StatusCode::from_u16(err.status()).unwrap_or(StatusCode::SERVICE_UNAVAILABLE);
        Self::from_kind(ErrorKind::Upstream {
            status,
            message: format!("Failed to fetch F1 data for {endpoint}"),
        })
    }

    /// An unknown-route failure
    #[must_use]
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::from_kind(ErrorKind::NotFound(detail.into()))
    }

    /// A rate-limit rejection
    #[must_use]
    pub fn rate_limited() -> Self {
        Self::from_kind(ErrorKind::RateLimited)
    }

    /// An unexpected fault
    #[must_use]
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::from_kind(ErrorKind::Internal(detail.into()))
    }

    /// Attach the request id for correlation
    #[must_use]
    pub fn with_request_id(mut self, request_id: Uuid) -> Self {
        self.request_id = Some(request_id);
        self
    }

    const fn from_kind(kind: ErrorKind) -> Self {
        Self {
            kind,
            request_id: None,
        }
    }

    /// The failure kind, for tests and logging
    #[must_use]
    pub const fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

/// Error envelope body
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorEnvelope,
}

#[derive(Debug, Serialize)]
struct ErrorEnvelope {
    message: String,
    code: &'static str,
    status: u16,
    #[serde(rename = "requestId", skip_serializing_if = "Option::is_none")]
    request_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<FieldError>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self.kind {
            ErrorKind::Validation(details) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Validation Error".to_string(),
                Some(details),
            ),
            ErrorKind::Upstream { status, message } => {
                (status, "EXTERNAL_API_ERROR", message, None)
            }
            ErrorKind::NotFound(message) => (StatusCode::NOT_FOUND, "NOT_FOUND", message, None),
            ErrorKind::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                "RATE_LIMIT_EXCEEDED",
                "Too many requests from this IP, please try again later".to_string(),
                None,
            ),
            ErrorKind::Internal(detail) => {
                let message = if should_expose_details() {
                    detail
                } else {
                    "Internal Server Error".to_string()
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    message,
                    None,
                )
            }
        };

        tracing::error!(
            request_id = ?self.request_id,
            code,
            status = status.as_u16(),
            message = %message,
            "Request failed"
        );

        let body = ErrorBody {
            error: ErrorEnvelope {
                message,
                code,
                status: status.as_u16(),
                request_id: self.request_id,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_is_400_with_details() {
        let err = ApiError::validation(vec![FieldError {
            field: "year".to_string(),
            message: "Year must be a 4-digit year or \"current\"".to_string(),
        }]);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upstream_error_mirrors_status() {
        let source = JolpicaError::Upstream {
            status: 500,
            body: None,
        };
        let err = ApiError::upstream(&source, "/seasons");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn network_error_becomes_503() {
        let source = JolpicaError::Network("connection refused".to_string());
        let err = ApiError::upstream(&source, "/seasons");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn decode_error_becomes_502() {
        let source = JolpicaError::Decode("not json".to_string());
        let err = ApiError::upstream(&source, "/seasons");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn invalid_request_becomes_internal() {
        let source = JolpicaError::InvalidRequest("bad url".to_string());
        let err = ApiError::upstream(&source, "/seasons");
        assert!(matches!(err.kind(), ErrorKind::Internal(_)));
    }

    #[test]
    fn not_found_is_404() {
        let response = ApiError::not_found("Route not found: GET /nope").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn rate_limited_is_429() {
        let response = ApiError::rate_limited().into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn internal_is_500() {
        let response = ApiError::internal("boom").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn internal_detail_suppressed_in_production() {
        set_expose_internal_errors(false);
        let response = ApiError::internal("secret detail").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        set_expose_internal_errors(true);
    }

    #[test]
    fn request_id_is_attached() {
        let id = Uuid::now_v7();
        let err = ApiError::not_found("missing").with_request_id(id);
        assert!(format!("{err:?}").contains(&id.to_string()));
    }

    #[test]
    fn envelope_serializes_without_optional_fields() {
        let envelope = ErrorEnvelope {
            message: "Validation Error".to_string(),
            code: "VALIDATION_ERROR",
            status: 400,
            request_id: None,
            details: None,
        };
        let json = serde_json::to_string(&envelope).unwrap();
        assert!(!json.contains("requestId"));
        assert!(!json.contains("details"));
    }

    #[test]
    fn envelope_serializes_details_when_present() {
        let envelope = ErrorEnvelope {
            message: "Validation Error".to_string(),
            code: "VALIDATION_ERROR",
            status: 400,
            request_id: Some(Uuid::nil()),
            details: Some(vec![FieldError {
                field: "round".to_string(),
                message: "Round must be a positive integer".to_string(),
            }]),
        };
        let json = serde_json::to_string(&envelope).unwrap();
        assert!(json.contains("requestId"));
        assert!(json.contains("\"field\":\"round\""));
    }
}
