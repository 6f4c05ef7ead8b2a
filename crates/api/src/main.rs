use std::sync::Arc;
use std::time::Duration;

use pantry_capture::{BlobStore, HttpClassifier, ImageClassifier, InMemoryBlobStore};

#[tokio::main]
async fn main() {
    pantry_observability::init();

    let classifier_url = std::env::var("CLASSIFIER_URL").unwrap_or_else(|_| {
        tracing::warn!("CLASSIFIER_URL not set; using default analysis endpoint");
        "https://api.openai.com/v1/images/analyze".to_string()
    });
    let api_key = std::env::var("CLASSIFIER_API_KEY").unwrap_or_else(|_| {
        tracing::warn!("CLASSIFIER_API_KEY not set; classifier calls will be rejected upstream");
        String::new()
    });
    let timeout_secs: u64 = std::env::var("CLASSIFIER_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(30);
    let bind_addr =
        std::env::var("PANTRY_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let classifier: Arc<dyn ImageClassifier> = Arc::new(
        HttpClassifier::new(classifier_url, api_key, Duration::from_secs(timeout_secs))
            .expect("failed to build classifier client"),
    );
    let blobs: Arc<dyn BlobStore> = Arc::new(InMemoryBlobStore::new());

    let app = pantry_api::app::build_app(blobs, classifier);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {bind_addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
