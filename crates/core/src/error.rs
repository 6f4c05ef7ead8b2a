//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure here is recoverable from the caller's point of view:
/// re-prompt on validation, refresh on stale references, re-capture on
/// malformed images, report-and-return-to-idle on collaborator failures.
/// Nothing in this taxonomy is fatal to the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Bad user input (e.g. empty item name or search query).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A referenced item no longer exists (stale id).
    #[error("not found")]
    NotFound,

    /// An identifier failed to parse.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A captured image was not in the expected data-URI shape.
    #[error("invalid image input: {0}")]
    InvalidInput(String),

    /// The base64 payload of a captured image could not be decoded.
    #[error("image decode failed: {0}")]
    Decode(String),

    /// An operation was triggered in a state that does not allow it
    /// (e.g. upload requested with no captured image held).
    #[error("precondition not met: {0}")]
    Precondition(String),

    /// Blob storage rejected or failed the upload.
    #[error("upload failed: {0}")]
    Upload(String),

    /// The image classifier returned a non-success status or an
    /// unreadable body.
    #[error("classification failed: {0}")]
    Classification(String),

    /// The backing item store failed (connectivity, poisoned lock, ...).
    #[error("store error: {0}")]
    Store(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::Precondition(msg.into())
    }

    pub fn upload(msg: impl Into<String>) -> Self {
        Self::Upload(msg.into())
    }

    pub fn classification(msg: impl Into<String>) -> Self {
        Self::Classification(msg.into())
    }

    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
