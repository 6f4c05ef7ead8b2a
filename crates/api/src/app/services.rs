use std::sync::Arc;

use pantry_capture::{BlobStore, CapturePipeline, ImageClassifier};
use pantry_inventory::{InMemoryItemStore, InventoryService};

/// Service graph shared across handlers.
///
/// The item store backing the inventory service is the in-memory
/// implementation; the document-store collaborator stays behind the
/// `ItemStore` trait, so a hosted backend slots in here without touching
/// the handlers.
pub struct AppServices {
    pub inventory: Arc<InventoryService<InMemoryItemStore>>,
    pub pipeline: Arc<CapturePipeline<InMemoryItemStore, dyn BlobStore, dyn ImageClassifier>>,
    pub classifier: Arc<dyn ImageClassifier>,
}

pub fn build_services(
    blobs: Arc<dyn BlobStore>,
    classifier: Arc<dyn ImageClassifier>,
) -> AppServices {
    let inventory = Arc::new(InventoryService::new(Arc::new(InMemoryItemStore::new())));
    let pipeline = Arc::new(CapturePipeline::new(
        Arc::clone(&inventory),
        blobs,
        Arc::clone(&classifier),
    ));

    AppServices {
        inventory,
        pipeline,
        classifier,
    }
}
