use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use pantry_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::InvalidInput(msg) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_input", msg)
        }
        DomainError::Decode(msg) => json_error(StatusCode::BAD_REQUEST, "decode_error", msg),
        DomainError::Precondition(msg) => {
            json_error(StatusCode::CONFLICT, "precondition_failed", msg)
        }
        DomainError::Upload(msg) => json_error(StatusCode::BAD_GATEWAY, "upload_error", msg),
        DomainError::Classification(msg) => {
            json_error(StatusCode::BAD_GATEWAY, "classification_error", msg)
        }
        DomainError::Store(msg) => json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", msg),
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
