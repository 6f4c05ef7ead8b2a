use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/capture", post(capture))
        .route("/capture/upload", post(upload))
        .route("/uploads", get(list_uploads))
}

/// Hold a captured photo (raw data URI). No external calls happen until
/// the upload is triggered.
pub async fn capture(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CaptureRequest>,
) -> axum::response::Response {
    services.pipeline.capture(body.data_uri).await;
    (
        StatusCode::ACCEPTED,
        Json(serde_json::json!({ "state": services.pipeline.state().await })),
    )
        .into_response()
}

/// Run the held capture through the pipeline and return the updated
/// item list.
pub async fn upload(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.pipeline.upload_and_classify().await {
        Ok(items) => (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_uploads(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let uploads = services.pipeline.uploads().await;
    (
        StatusCode::OK,
        Json(serde_json::json!({ "uploads": uploads })),
    )
        .into_response()
}
