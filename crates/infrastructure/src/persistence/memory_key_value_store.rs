//! In-memory key-value store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use nebula_application::ports::{KeyValueStore, StorageError};
use parking_lot::Mutex;

/// Key-value store held in memory.
///
/// Clones share the same map. Useful for embedding and for tests that need
/// a store without touching disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    values: Arc<Mutex<HashMap<String, String>>>,
    max_value_bytes: Option<usize>,
}

impl MemoryKeyValueStore {
    /// Creates an empty store without a quota.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-value limit.
    #[must_use]
    pub fn with_quota(mut self, max_value_bytes: usize) -> Self {
        self.max_value_bytes = Some(max_value_bytes);
        self
    }

    /// Returns the number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.lock().len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.lock().is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(limit) = self.max_value_bytes
            && value.len() > limit
        {
            return Err(StorageError::QuotaExceeded {
                key: key.to_string(),
                size: value.len(),
                limit,
            });
        }
        self.values
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
