//! InMemoryModelStore - HashMap-backed model store for tests and single-process deployments.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{Model, ModelStore, StoreError, Versioned};

/// Internal stored representation of a model.
struct StoredModel {
    bytes: Vec<u8>,
    version: u64,
}

/// In-memory model store backed by a HashMap.
///
/// Storage key is `"COLLECTION:id"`. Clone-friendly via Arc.
#[derive(Clone, Default)]
pub struct InMemoryModelStore {
    storage: Arc<RwLock<HashMap<String, StoredModel>>>,
    writes: Arc<AtomicU64>,
}

impl InMemoryModelStore {
    /// Create a new empty model store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful writes (inserts, updates, upserts, deletes).
    pub fn write_count(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }

    fn make_key(collection: &str, id: &str) -> String {
        format!("{}:{}", collection, id)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, StoredModel>>, StoreError> {
        self.storage
            .read()
            .map_err(|_| StoreError::Storage("lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, StoredModel>>, StoreError> {
        self.storage
            .write()
            .map_err(|_| StoreError::Storage("lock poisoned".into()))
    }

    fn encode<M: Model>(model: &M) -> Result<Vec<u8>, StoreError> {
        serde_json::to_vec(model).map_err(|e| StoreError::Serde(e.to_string()))
    }

    fn decode<M: Model>(stored: &StoredModel) -> Result<Versioned<M>, StoreError> {
        let data = serde_json::from_slice(&stored.bytes)
            .map_err(|e| StoreError::Serde(e.to_string()))?;
        Ok(Versioned {
            data,
            version: stored.version,
        })
    }

    fn put<M: Model>(
        &self,
        storage: &mut HashMap<String, StoredModel>,
        key: String,
        model: &M,
        bytes: Vec<u8>,
        version: u64,
    ) -> Versioned<M> {
        storage.insert(key, StoredModel { bytes, version });
        self.writes.fetch_add(1, Ordering::SeqCst);
        Versioned {
            data: model.clone(),
            version,
        }
    }

    fn scan<M: Model>(
        &self,
        predicate: &dyn Fn(&M) -> bool,
    ) -> Result<Vec<Versioned<M>>, StoreError> {
        let storage = self.read()?;
        let prefix = format!("{}:", M::COLLECTION);
        let mut results = Vec::new();

        for (key, stored) in storage.iter() {
            if !key.starts_with(&prefix) {
                continue;
            }
            let versioned = Self::decode::<M>(stored)?;
            if predicate(&versioned.data) {
                results.push(versioned);
            }
        }

        Ok(results)
    }
}

impl ModelStore for InMemoryModelStore {
    fn get_model<M: Model>(&self, id: &str) -> Result<Option<Versioned<M>>, StoreError> {
        let key = Self::make_key(M::COLLECTION, id);
        let storage = self.read()?;

        storage.get(&key).map(Self::decode).transpose()
    }

    fn save_model<M: Model>(&self, model: &M) -> Result<Versioned<M>, StoreError> {
        let key = Self::make_key(M::COLLECTION, model.id());
        let bytes = Self::encode(model)?;
        let mut storage = self.write()?;

        let new_version = storage.get(&key).map(|s| s.version + 1).unwrap_or(1);
        Ok(self.put(&mut storage, key, model, bytes, new_version))
    }

    fn insert_model<M: Model>(&self, model: &M) -> Result<Versioned<M>, StoreError> {
        let key = Self::make_key(M::COLLECTION, model.id());
        let bytes = Self::encode(model)?;
        let mut storage = self.write()?;

        if let Some(existing) = storage.get(&key) {
            return Err(StoreError::ConcurrencyConflict {
                collection: M::COLLECTION.to_string(),
                id: model.id().to_string(),
                expected: 0,
                actual: existing.version,
            });
        }

        Ok(self.put(&mut storage, key, model, bytes, 1))
    }

    fn update_model<M: Model>(
        &self,
        model: &M,
        expected_version: u64,
    ) -> Result<Versioned<M>, StoreError> {
        let key = Self::make_key(M::COLLECTION, model.id());
        let bytes = Self::encode(model)?;
        let mut storage = self.write()?;

        let actual_version = storage
            .get(&key)
            .map(|s| s.version)
            .ok_or_else(|| StoreError::NotFound {
                collection: M::COLLECTION.to_string(),
                id: model.id().to_string(),
            })?;

        if actual_version != expected_version {
            return Err(StoreError::ConcurrencyConflict {
                collection: M::COLLECTION.to_string(),
                id: model.id().to_string(),
                expected: expected_version,
                actual: actual_version,
            });
        }

        Ok(self.put(&mut storage, key, model, bytes, actual_version + 1))
    }

    fn delete_model<M: Model>(&self, id: &str) -> Result<bool, StoreError> {
        let key = Self::make_key(M::COLLECTION, id);
        let mut storage = self.write()?;

        let existed = storage.remove(&key).is_some();
        if existed {
            self.writes.fetch_add(1, Ordering::SeqCst);
        }
        Ok(existed)
    }

    fn find_models<M: Model>(
        &self,
        predicate: &dyn Fn(&M) -> bool,
    ) -> Result<Vec<Versioned<M>>, StoreError> {
        self.scan(predicate)
    }
}
