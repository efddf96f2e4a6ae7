use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use coursely_core::DomainError;

/// Translate a service outcome into an HTTP response.
///
/// This is the only place status codes are assigned. Body shapes follow the
/// wire contract: not-found uses an `error` field, validation uses `message`.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => {
            (StatusCode::BAD_REQUEST, axum::Json(json!({ "message": msg }))).into_response()
        }
        DomainError::NotFound | DomainError::InvalidId(_) => (
            StatusCode::NOT_FOUND,
            axum::Json(json!({ "error": "course not found" })),
        )
            .into_response(),
        DomainError::Conflict(msg) => {
            // The detail may carry backend text (e.g. the Postgres constraint
            // name); log it, keep the client body constant.
            tracing::warn!(error = %msg, "course conflict");
            (
                StatusCode::CONFLICT,
                axum::Json(json!({ "error": "course already exists" })),
            )
                .into_response()
        }
        DomainError::Storage(msg) => {
            tracing::error!(error = %msg, "storage failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                axum::Json(json!({ "error": "storage failure" })),
            )
                .into_response()
        }
    }
}
