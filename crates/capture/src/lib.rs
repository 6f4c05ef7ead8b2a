//! Photo capture handling: data-URI decoding, blob upload, image
//! classification, and the pipeline that feeds recognized names into the
//! inventory.

pub mod blob;
pub mod classifier;
pub mod codec;
pub mod pipeline;

pub use blob::{BlobStore, InMemoryBlobStore};
pub use classifier::{HttpClassifier, ImageClassifier};
pub use codec::CapturedImage;
pub use pipeline::{CapturePipeline, PipelineState, UploadRecord};
