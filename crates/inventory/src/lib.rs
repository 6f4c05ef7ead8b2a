//! Inventory domain module.
//!
//! Item model, name normalization, the document-store seam, and the
//! upsert/search/delete service. No HTTP and no image handling here.

pub mod item;
pub mod service;
pub mod store;

pub use item::{normalize_name, Item};
pub use service::{InventoryService, SearchResult};
pub use store::{InMemoryItemStore, ItemStore};
