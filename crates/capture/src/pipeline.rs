//! Capture → decode → upload → classify → ingest orchestration.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::Mutex;

use pantry_core::{DomainError, DomainResult, UploadId};
use pantry_inventory::{InventoryService, Item, ItemStore};

use crate::blob::BlobStore;
use crate::classifier::ImageClassifier;
use crate::codec;

/// Pipeline state. A run walks `Captured → Uploading → Classifying →
/// Ingesting` and re-arms at `Idle`; any failure makes `Failed` the
/// terminal state of that run before the machine re-arms.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum PipelineState {
    Idle,
    Captured,
    Uploading,
    Classifying,
    Ingesting,
    Failed,
}

/// One successful upload: the blob's retrieval URL plus when it landed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadRecord {
    pub id: UploadId,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

struct Inner {
    state: PipelineState,
    image: Option<String>,
    uploads: Vec<UploadRecord>,
}

/// Orchestrates a capture run end to end.
///
/// Holding the inner mutex for the whole run serializes pipeline runs;
/// inventory reads and unrelated service calls proceed independently.
pub struct CapturePipeline<S, B, C>
where
    S: ItemStore,
    B: BlobStore + ?Sized,
    C: ImageClassifier + ?Sized,
{
    inventory: Arc<InventoryService<S>>,
    blobs: Arc<B>,
    classifier: Arc<C>,
    inner: Mutex<Inner>,
}

impl<S, B, C> CapturePipeline<S, B, C>
where
    S: ItemStore,
    B: BlobStore + ?Sized,
    C: ImageClassifier + ?Sized,
{
    pub fn new(inventory: Arc<InventoryService<S>>, blobs: Arc<B>, classifier: Arc<C>) -> Self {
        Self {
            inventory,
            blobs,
            classifier,
            inner: Mutex::new(Inner {
                state: PipelineState::Idle,
                image: None,
                uploads: Vec::new(),
            }),
        }
    }

    /// Hold a captured data URI. No external calls; a second capture
    /// replaces the previous one.
    pub async fn capture(&self, data_uri: String) {
        let mut inner = self.inner.lock().await;
        inner.image = Some(data_uri);
        inner.state = PipelineState::Captured;
    }

    /// Current machine state (between runs).
    pub async fn state(&self) -> PipelineState {
        self.inner.lock().await.state
    }

    /// Uploads recorded by completed runs, oldest first.
    pub async fn uploads(&self) -> Vec<UploadRecord> {
        self.inner.lock().await.uploads.clone()
    }

    /// Run the held capture through decode, upload, classification, and
    /// inventory ingestion. Returns the updated item list. The held
    /// image is discarded whether the run completes or fails; the
    /// machine re-arms at `Idle` either way.
    pub async fn upload_and_classify(&self) -> DomainResult<Vec<Item>> {
        let mut inner = self.inner.lock().await;

        let data_uri = inner
            .image
            .take()
            .ok_or_else(|| DomainError::precondition("no captured image to upload"))?;

        inner.state = PipelineState::Uploading;
        match self.run(&mut inner, &data_uri).await {
            Ok(items) => {
                inner.state = PipelineState::Idle;
                Ok(items)
            }
            Err(err) => {
                // Failed is terminal for this run; the next capture
                // starts over from Idle.
                inner.state = PipelineState::Failed;
                tracing::warn!(error = %err, "capture pipeline run failed");
                inner.state = PipelineState::Idle;
                Err(err)
            }
        }
    }

    async fn run(&self, inner: &mut Inner, data_uri: &str) -> DomainResult<Vec<Item>> {
        let image = codec::decode(data_uri)?;

        // One key per upload, so earlier photos are never overwritten.
        let upload_id = UploadId::new();
        let key = format!("images/{}.{}", upload_id, extension_for(&image.mime_type));
        let url = self
            .blobs
            .put(&key, &image.bytes, &image.mime_type)
            .await
            .map_err(|e| match e {
                DomainError::Upload(_) => e,
                other => DomainError::upload(other.to_string()),
            })?;
        tracing::info!(%key, "capture uploaded");

        inner.state = PipelineState::Classifying;
        let names = self.classifier.classify_url(&url).await?;
        tracing::info!(recognized = names.len(), "classifier returned item names");

        inner.state = PipelineState::Ingesting;
        self.inventory.ingest_classified_names(&names).await?;

        inner.uploads.push(UploadRecord {
            id: upload_id,
            url,
            created_at: Utc::now(),
        });

        self.inventory.list_items().await
    }
}

fn extension_for(mime_type: &str) -> &str {
    mime_type.split('/').nth(1).filter(|s| !s.is_empty()).unwrap_or("bin")
}
