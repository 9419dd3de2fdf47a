//! Scratchpad persistence use cases.
//!
//! All scratchpads live in a single key-value slot as one JSON array.

use nebula_domain::{CodecError, DataField, Scratchpad};
use serde_json::Value;
use tracing::debug;

use crate::error::BackupResult;
use crate::ports::KeyValueStore;

/// Key of the slot holding the scratchpad array.
pub const SCRATCHPAD_STORAGE_KEY: &str = "nebula-scratchpads";

/// Reads the stored scratchpad array without validating its records.
/// An empty slot yields an empty list.
pub(crate) async fn load_scratchpad_records<S: KeyValueStore>(
    store: &S,
) -> BackupResult<Vec<Value>> {
    let Some(raw) = store.get(SCRATCHPAD_STORAGE_KEY).await? else {
        return Ok(Vec::new());
    };
    if raw.is_empty() {
        return Ok(Vec::new());
    }
    let records = serde_json::from_str(&raw).map_err(CodecError::Parse)?;
    Ok(records)
}

async fn load_scratchpads<S: KeyValueStore>(store: &S) -> BackupResult<Vec<Scratchpad>> {
    let scratchpads = load_scratchpad_records(store)
        .await?
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value(record).map_err(|source| CodecError::InvalidRecord {
                field: DataField::Scratchpads,
                index,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(scratchpads)
}

/// Use case for reading the stored scratchpads.
pub struct LoadScratchpads<S> {
    store: S,
}

impl<S: KeyValueStore> LoadScratchpads<S> {
    /// Creates a new `LoadScratchpads` use case.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the stored scratchpads, or an empty list if none are stored.
    ///
    /// # Errors
    /// Returns an error if the store cannot be read or holds malformed data.
    pub async fn execute(&self) -> BackupResult<Vec<Scratchpad>> {
        load_scratchpads(&self.store).await
    }
}

/// Use case for replacing the stored scratchpads.
pub struct SaveScratchpads<S> {
    store: S,
}

impl<S: KeyValueStore> SaveScratchpads<S> {
    /// Creates a new `SaveScratchpads` use case.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Overwrites the scratchpad slot with `scratchpads`.
    ///
    /// The previous contents are replaced, never merged.
    ///
    /// # Errors
    /// Returns an error if serialization fails or the store rejects the
    /// write (for example when its quota is exceeded).
    pub async fn execute(&self, scratchpads: &[Scratchpad]) -> BackupResult<()> {
        let json = serde_json::to_string(scratchpads).map_err(CodecError::Serialization)?;
        self.store.set(SCRATCHPAD_STORAGE_KEY, &json).await?;
        debug!(count = scratchpads.len(), "saved scratchpads");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::BackupError;
    use crate::ports::{Clock, StorageError};
    use crate::test_support::{FixedClock, MockStore};
    use pretty_assertions::assert_eq;

    fn pads() -> Vec<Scratchpad> {
        let now = FixedClock::at(2024, 3, 1).now();
        vec![
            Scratchpad::new("pad-1", "Ideas", "one", now),
            Scratchpad::new("pad-2", "Todo", "two", now),
        ]
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let store = MockStore::new();

        SaveScratchpads::new(store.clone())
            .execute(&pads())
            .await
            .unwrap();
        let loaded = LoadScratchpads::new(store).execute().await.unwrap();

        assert_eq!(loaded, pads());
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_value() {
        let store = MockStore::new();
        let save = SaveScratchpads::new(store.clone());

        save.execute(&pads()).await.unwrap();
        save.execute(&pads()[1..]).await.unwrap();

        let loaded = LoadScratchpads::new(store).execute().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "pad-2");
    }

    #[tokio::test]
    async fn test_quota_exceeded_is_reported() {
        let store = MockStore::with_limit(16);

        let err = SaveScratchpads::new(store.clone())
            .execute(&pads())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            BackupError::Storage(StorageError::QuotaExceeded { limit: 16, .. })
        ));
        assert!(err.to_string().contains("quota exceeded"));
        assert_eq!(store.value(SCRATCHPAD_STORAGE_KEY), None);
    }

    #[tokio::test]
    async fn test_load_empty_slot() {
        let loaded = LoadScratchpads::new(MockStore::new()).execute().await.unwrap();
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn test_load_malformed_slot() {
        let store = MockStore::new();
        store.insert(SCRATCHPAD_STORAGE_KEY, "{not json");

        let err = LoadScratchpads::new(store).execute().await.unwrap_err();
        assert!(matches!(err, BackupError::Codec(CodecError::Parse(_))));
    }

    #[tokio::test]
    async fn test_load_keeps_timestamp_text() {
        let store = MockStore::new();
        store.insert(
            SCRATCHPAD_STORAGE_KEY,
            r#"[{"id":"pad-1","title":"Ideas","content":"","createdAt":"2024-03-01T10:00:00","updatedAt":"2024-03-01"}]"#,
        );

        let loaded = LoadScratchpads::new(store).execute().await.unwrap();

        assert_eq!(loaded[0].created_at, "2024-03-01T10:00:00");
        assert_eq!(loaded[0].updated_at, "2024-03-01");
    }

    #[tokio::test]
    async fn test_load_reports_malformed_record_position() {
        let store = MockStore::new();
        store.insert(
            SCRATCHPAD_STORAGE_KEY,
            r#"[{"id":"pad-1","title":"Ideas","content":"","createdAt":"a","updatedAt":"b"},{"id":"pad-2"}]"#,
        );

        let err = LoadScratchpads::new(store).execute().await.unwrap_err();

        assert!(matches!(
            err,
            BackupError::Codec(CodecError::InvalidRecord {
                field: DataField::Scratchpads,
                index: 1,
                ..
            })
        ));
    }
}
