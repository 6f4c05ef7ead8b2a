//! The blob-storage seam and its in-memory implementation.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use pantry_core::{DomainError, DomainResult};

/// Object storage for uploaded captures.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store `bytes` under `key` and return a retrieval URL.
    async fn put(&self, key: &str, bytes: &[u8], content_type: &str) -> DomainResult<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredBlob {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// In-memory blob store.
///
/// Intended for tests/dev. Returned URLs use a `memory://` scheme.
#[derive(Debug, Default)]
pub struct InMemoryBlobStore {
    objects: RwLock<HashMap<String, StoredBlob>>,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<StoredBlob> {
        self.objects.read().ok()?.get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.objects.read().map(|o| o.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn put(&self, key: &str, bytes: &[u8], content_type: &str) -> DomainResult<String> {
        let mut objects = self
            .objects
            .write()
            .map_err(|_| DomainError::upload("lock poisoned"))?;
        objects.insert(
            key.to_string(),
            StoredBlob {
                bytes: bytes.to_vec(),
                content_type: content_type.to_string(),
            },
        );
        Ok(format!("memory://{key}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_stores_bytes_and_returns_a_retrieval_url() {
        let store = InMemoryBlobStore::new();
        let url = store
            .put("images/test.jpeg", b"\xff\xd8\xff", "image/jpeg")
            .await
            .unwrap();

        assert_eq!(url, "memory://images/test.jpeg");
        let blob = store.get("images/test.jpeg").unwrap();
        assert_eq!(blob.bytes, b"\xff\xd8\xff");
        assert_eq!(blob.content_type, "image/jpeg");
    }
}
