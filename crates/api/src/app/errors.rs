use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use comparo_core::DomainError;

/// Translate a domain error into the HTTP error contract.
///
/// Store-side failures map to 500 with a generic message; the underlying
/// detail goes to the log, not the wire.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::NotFound(msg) => json_error(StatusCode::NOT_FOUND, "not_found", msg),
        DomainError::InvalidRequest(msg) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_request", msg)
        }
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::StoreUnavailable(msg)
        | DomainError::InvalidData(msg)
        | DomainError::StoreFailure(msg) => {
            tracing::error!(%msg, "store error while serving request");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "store_error",
                "an error occurred while accessing data",
            )
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
