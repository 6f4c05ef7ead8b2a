//! The document-store seam and its in-memory implementation.

use std::sync::RwLock;

use async_trait::async_trait;

use pantry_core::{DomainError, DomainResult, ItemId};

use crate::item::Item;

/// Backing document store for pantry items.
///
/// Implementations must preserve creation order in `list` (the visible
/// list is re-derived from store snapshots, and the order must be stable
/// within one snapshot). The store does not enforce name uniqueness;
/// that invariant belongs to [`crate::service::InventoryService`], which
/// serializes its lookup-then-write sequences.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Full snapshot, insertion order.
    async fn list(&self) -> DomainResult<Vec<Item>>;

    /// Create a record; the store assigns the id.
    async fn create(&self, name: &str, quantity: u32) -> DomainResult<Item>;

    /// Partial update of an existing record's quantity.
    async fn update_quantity(&self, id: ItemId, quantity: u32) -> DomainResult<Item>;

    /// Remove a record entirely.
    async fn delete(&self, id: ItemId) -> DomainResult<()>;
}

/// In-memory item store.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    records: RwLock<Vec<Item>>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn list(&self) -> DomainResult<Vec<Item>> {
        let records = self
            .records
            .read()
            .map_err(|_| DomainError::store("lock poisoned"))?;
        Ok(records.clone())
    }

    async fn create(&self, name: &str, quantity: u32) -> DomainResult<Item> {
        let mut records = self
            .records
            .write()
            .map_err(|_| DomainError::store("lock poisoned"))?;
        let item = Item {
            id: ItemId::new(),
            name: name.to_string(),
            quantity,
        };
        records.push(item.clone());
        Ok(item)
    }

    async fn update_quantity(&self, id: ItemId, quantity: u32) -> DomainResult<Item> {
        let mut records = self
            .records
            .write()
            .map_err(|_| DomainError::store("lock poisoned"))?;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(DomainError::NotFound)?;
        record.quantity = quantity;
        Ok(record.clone())
    }

    async fn delete(&self, id: ItemId) -> DomainResult<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| DomainError::store("lock poisoned"))?;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(DomainError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = InMemoryItemStore::new();
        store.create("Milk", 1).await.unwrap();
        store.create("Eggs", 1).await.unwrap();
        store.create("Butter", 1).await.unwrap();

        let names: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["Milk", "Eggs", "Butter"]);
    }

    #[tokio::test]
    async fn update_and_delete_miss_report_not_found() {
        let store = InMemoryItemStore::new();
        let ghost = ItemId::new();
        assert_eq!(
            store.update_quantity(ghost, 2).await.unwrap_err(),
            DomainError::NotFound
        );
        assert_eq!(store.delete(ghost).await.unwrap_err(), DomainError::NotFound);
    }
}
