//! Inventory upsert/search/delete logic.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;

use pantry_core::{DomainError, DomainResult, ItemId};

use crate::item::{normalize_name, Item};
use crate::store::ItemStore;

/// Outcome of a search: the stored (canonical) name and quantity on a
/// hit, or the original trimmed query and quantity 0 on a miss. The
/// asymmetry (raw query echoed on miss, canonical name on hit) is
/// deliberate and observable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub name: String,
    pub quantity: u32,
}

/// Find-or-create upsert logic over an [`ItemStore`].
///
/// All item-mutating operations serialize through one async mutex, so a
/// lookup-then-write sequence can never interleave with another one
/// against the same collection (two rapid adds of the same name become
/// one create plus one increment, never two creates). Reads take no
/// lock; a search may proceed while an unrelated mutation is in flight.
pub struct InventoryService<S: ItemStore> {
    store: Arc<S>,
    write_lock: Mutex<()>,
}

impl<S: ItemStore> InventoryService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Current snapshot, store insertion order.
    pub async fn list_items(&self) -> DomainResult<Vec<Item>> {
        self.store.list().await
    }

    /// Normalize `raw_name`, then increment the matching item's quantity
    /// or create it with quantity 1. Returns the resulting item.
    pub async fn add_item(&self, raw_name: &str) -> DomainResult<Item> {
        let name = normalize_name(raw_name);
        if name.is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }

        let _guard = self.write_lock.lock().await;
        let index = self.name_index().await?;
        self.upsert_by_name(&name, &index).await
    }

    /// Decrement the item's quantity, removing the record entirely when
    /// it would reach zero. Returns the updated item, or `None` when the
    /// record was removed.
    pub async fn remove_one(&self, id: ItemId) -> DomainResult<Option<Item>> {
        let _guard = self.write_lock.lock().await;

        let snapshot = self.store.list().await?;
        let item = snapshot
            .into_iter()
            .find(|i| i.id == id)
            .ok_or(DomainError::NotFound)?;

        if item.quantity > 1 {
            let updated = self.store.update_quantity(id, item.quantity - 1).await?;
            Ok(Some(updated))
        } else {
            self.store.delete(id).await?;
            Ok(None)
        }
    }

    /// Look up an item by normalized query. Misses echo the original
    /// trimmed query, not the normalized form.
    pub async fn search(&self, raw_query: &str) -> DomainResult<SearchResult> {
        let trimmed = raw_query.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("search query cannot be empty"));
        }
        let normalized = normalize_name(raw_query);

        let snapshot = self.store.list().await?;
        match snapshot.into_iter().find(|i| i.name == normalized) {
            Some(item) => Ok(SearchResult {
                name: item.name,
                quantity: item.quantity,
            }),
            None => Ok(SearchResult {
                name: trimmed.to_string(),
                quantity: 0,
            }),
        }
    }

    /// Apply the add-item upsert for each recognized name, in input
    /// order, under one write lock. Names that normalize identically
    /// within the batch merge into a single item incremented once per
    /// occurrence. Returns the item state after each upsert, one entry
    /// per input name; names that trim to empty are skipped.
    pub async fn ingest_classified_names(&self, names: &[String]) -> DomainResult<Vec<Item>> {
        let _guard = self.write_lock.lock().await;

        // One refreshed snapshot per batch; the index tracks in-batch
        // creates and increments so duplicate names merge correctly.
        let mut index = self.name_index().await?;
        let mut ingested = Vec::with_capacity(names.len());

        for raw in names {
            let name = normalize_name(raw);
            if name.is_empty() {
                tracing::debug!("skipping empty classified name");
                continue;
            }
            let item = self.upsert_by_name(&name, &index).await?;
            index.insert(name, item.clone());
            ingested.push(item);
        }

        Ok(ingested)
    }

    /// Map from normalized name to current record, rebuilt from a fresh
    /// store snapshot. Replaces a per-name linear rescan.
    async fn name_index(&self) -> DomainResult<HashMap<String, Item>> {
        let snapshot = self.store.list().await?;
        Ok(snapshot.into_iter().map(|i| (i.name.clone(), i)).collect())
    }

    /// Increment the indexed record for `name`, or create it at
    /// quantity 1. Callers hold the write lock.
    async fn upsert_by_name(
        &self,
        name: &str,
        index: &HashMap<String, Item>,
    ) -> DomainResult<Item> {
        match index.get(name) {
            Some(existing) => {
                self.store
                    .update_quantity(existing.id, existing.quantity + 1)
                    .await
            }
            None => self.store.create(name, 1).await,
        }
    }
}
