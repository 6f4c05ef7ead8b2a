//! HTTP API application wiring (Axum router + service wiring).
//!
//! Folder layout:
//! - `services.rs`: service construction (inventory service, pipeline, collaborators)
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use pantry_capture::{BlobStore, ImageClassifier};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and
/// the black-box tests, which pass stub collaborators).
pub fn build_app(blobs: Arc<dyn BlobStore>, classifier: Arc<dyn ImageClassifier>) -> Router {
    let services = Arc::new(services::build_services(blobs, classifier));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(services))
        .layer(ServiceBuilder::new())
}
