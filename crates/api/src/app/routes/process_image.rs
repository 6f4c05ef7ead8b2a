use std::sync::Arc;

use axum::{
    extract::{Extension, Multipart},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use crate::app::services::AppServices;

pub fn router() -> Router {
    // Method routing answers non-POST requests with 405.
    Router::new().route("/process-image", post(process_image))
}

/// Relay endpoint: accepts a multipart `file` field and forwards the
/// bytes to the classifier.
///
/// Response shape is fixed by the external contract: `{items: [..]}` on
/// success, `{error: ..}` with status 500 on any failure.
pub async fn process_image(
    Extension(services): Extension<Arc<AppServices>>,
    mut multipart: Multipart,
) -> axum::response::Response {
    let field = loop {
        match multipart.next_field().await {
            Ok(Some(field)) if field.name() == Some("file") => break field,
            Ok(Some(_)) => continue,
            Ok(None) => return error_response("no file provided"),
            Err(e) => {
                tracing::warn!("multipart read error: {e}");
                return error_response(format!("error parsing the files: {e}"));
            }
        }
    };

    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();
    let bytes = match field.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => return error_response(format!("error reading file data: {e}")),
    };

    match services.classifier.classify_bytes(&bytes, &content_type).await {
        Ok(items) => (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "image processing failed");
            error_response(e.to_string())
        }
    }
}

fn error_response(message: impl Into<String>) -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": message.into() })),
    )
        .into_response()
}
