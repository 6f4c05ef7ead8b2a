//! Image classifier client.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use pantry_core::{DomainError, DomainResult};

/// External service mapping an image to recognized item names.
///
/// The endpoint accepts either a JSON body carrying an image reference
/// or the raw image bytes; both forms are represented here so the
/// pipeline can pass a blob URL while the relay endpoint forwards
/// uploaded bytes directly.
#[async_trait]
pub trait ImageClassifier: Send + Sync {
    async fn classify_url(&self, image_url: &str) -> DomainResult<Vec<String>>;

    async fn classify_bytes(&self, bytes: &[u8], content_type: &str) -> DomainResult<Vec<String>>;
}

#[derive(Debug, Serialize)]
struct ClassifyRequest<'a> {
    image_url: &'a str,
}

#[derive(Debug, Deserialize)]
struct ClassifyResponse {
    items: Vec<String>,
}

/// HTTP classifier client (Bearer-authenticated JSON API).
///
/// Every call carries a bounded timeout so a hung classifier cannot
/// hang a pipeline run indefinitely.
#[derive(Debug)]
pub struct HttpClassifier {
    endpoint: String,
    api_key: String,
    client: reqwest::Client,
}

impl HttpClassifier {
    pub fn new(endpoint: String, api_key: String, timeout: Duration) -> DomainResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::classification(e.to_string()))?;
        Ok(Self {
            endpoint,
            api_key,
            client,
        })
    }

    async fn read_items(&self, response: reqwest::Response) -> DomainResult<Vec<String>> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::classification(format!(
                "classifier returned {status}: {body}"
            )));
        }

        let parsed: ClassifyResponse = response
            .json()
            .await
            .map_err(|e| DomainError::classification(format!("malformed response: {e}")))?;
        Ok(parsed.items)
    }
}

#[async_trait]
impl ImageClassifier for HttpClassifier {
    async fn classify_url(&self, image_url: &str) -> DomainResult<Vec<String>> {
        tracing::debug!(%image_url, "classifying uploaded image");
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&ClassifyRequest { image_url })
            .send()
            .await
            .map_err(|e| DomainError::classification(e.to_string()))?;

        self.read_items(response).await
    }

    async fn classify_bytes(&self, bytes: &[u8], content_type: &str) -> DomainResult<Vec<String>> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes.to_vec())
            .send()
            .await
            .map_err(|e| DomainError::classification(e.to_string()))?;

        self.read_items(response).await
    }
}
