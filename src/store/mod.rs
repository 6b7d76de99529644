//! Model storage - the persistence boundary for catalog aggregates.
//!
//! Aggregates are stored as typed models keyed by collection and id. Every
//! stored model carries a version for optimistic concurrency.
//!
//! ## Example
//!
//! ```
//! use catalog_admin::domain::category::Category;
//! use catalog_admin::store::{InMemoryModelStore, ModelsExt};
//!
//! let store = InMemoryModelStore::new();
//! let category = Category::new(Some("Movies".into()), None, true).unwrap();
//!
//! store.models::<Category>().insert(&category).unwrap();
//! let loaded = store.models::<Category>().get(&category.id).unwrap().unwrap();
//! assert_eq!(loaded.version, 1);
//! ```

mod in_memory;
mod repository;
mod store;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Trait for types that can be stored as models.
pub trait Model: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// The collection name for this model type (e.g., "categories", "videos").
    /// Maps to a table in SQL, a collection in MongoDB, a key prefix in KV stores, etc.
    const COLLECTION: &'static str;

    /// Returns the unique identifier for this model instance.
    fn id(&self) -> &str;
}

/// A versioned wrapper around model data for optimistic concurrency control.
#[derive(Debug, Clone, PartialEq)]
pub struct Versioned<T> {
    pub data: T,
    pub version: u64,
}

/// Error type for model store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Optimistic concurrency conflict.
    #[error("concurrency conflict on {collection}:{id} (expected version {expected}, actual {actual})")]
    ConcurrencyConflict {
        collection: String,
        id: String,
        expected: u64,
        actual: u64,
    },
    /// Serialization/deserialization error.
    #[error("model serialization error: {0}")]
    Serde(String),
    /// Storage-level error.
    #[error("model storage error: {0}")]
    Storage(String),
    /// Model not found.
    #[error("model not found: {collection}:{id}")]
    NotFound { collection: String, id: String },
}

pub use in_memory::InMemoryModelStore;
pub use repository::{ModelRepository, ModelsExt};
pub use store::ModelStore;
