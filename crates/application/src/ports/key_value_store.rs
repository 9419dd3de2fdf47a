//! Key-value storage port
//!
//! Models a browser-style local store: string keys, string values,
//! each write replacing the previous value for that key.

use async_trait::async_trait;

/// Errors that can occur during key-value operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The write would exceed the store's quota.
    #[error("Storage quota exceeded: {size} bytes for '{key}' exceeds the limit of {limit} bytes")]
    QuotaExceeded {
        /// Key being written.
        key: String,
        /// Size of the rejected value in bytes.
        size: usize,
        /// Maximum value size in bytes.
        limit: usize,
    },

    /// The key cannot be stored.
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    /// The store cannot be reached.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Port for a persistent string key-value store.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// # Returns
    /// `None` if nothing is stored under the key.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns an error if the value cannot be written.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
