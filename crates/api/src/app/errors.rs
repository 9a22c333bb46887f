use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use serde_json::json;

use atelier_core::DomainError;

/// Map a domain error to its HTTP response.
///
/// `Validation` is always client-caused (400), `NotFound` maps to 404, and
/// everything else surfaces as a 500 with the original cause's message.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::NotFound(msg) => json_error(StatusCode::NOT_FOUND, "not_found", msg),
        DomainError::Operation(msg) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "operation_error", msg)
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Success envelope: a human-readable message plus the data payload.
pub fn json_ok(
    status: StatusCode,
    message: &str,
    data: impl Serialize,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "message": message,
            "data": data,
        })),
    )
        .into_response()
}
