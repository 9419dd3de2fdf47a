//! Directory-backed key-value store.
//!
//! Each key is stored as one file under the store's root directory:
//! - Linux: ~/.local/share/nebula/storage/<key>
//! - macOS: ~/Library/Application Support/nebula/storage/<key>
//! - Windows: %APPDATA%/nebula/storage/<key>

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use nebula_application::ports::{KeyValueStore, StorageError};
use tokio::fs;
use tracing::debug;

/// Default per-value limit, matching typical browser local storage.
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// Key-value store keeping one file per key.
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// value is always replaced whole.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    root: PathBuf,
    max_value_bytes: Option<usize>,
}

impl FileKeyValueStore {
    /// Creates a store rooted at `root` with the default quota.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_value_bytes: Some(DEFAULT_QUOTA_BYTES),
        }
    }

    /// Sets the per-value limit. `None` disables the check.
    #[must_use]
    pub const fn with_quota(mut self, max_value_bytes: Option<usize>) -> Self {
        self.max_value_bytes = max_value_bytes;
        self
    }

    /// Returns the platform default root, if a data directory exists.
    #[must_use]
    pub fn default_location() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join("nebula").join("storage"))
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(key))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;
        if let Some(limit) = self.max_value_bytes
            && value.len() > limit
        {
            return Err(StorageError::QuotaExceeded {
                key: key.to_string(),
                size: value.len(),
                limit,
            });
        }

        fs::create_dir_all(&self.root).await?;
        let staging = self.root.join(format!(".{key}.tmp"));
        fs::write(&staging, value).await?;
        fs::rename(&staging, &path).await?;

        debug!(key, bytes = value.len(), "stored value");
        Ok(())
    }
}
