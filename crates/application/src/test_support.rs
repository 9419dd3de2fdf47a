//! In-memory port implementations shared by the use case tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use nebula_domain::Toast;
use parking_lot::Mutex;

use crate::ports::{Clock, FileSystem, FileSystemError, KeyValueStore, Notifier, StorageError};

/// Key-value store backed by a shared map, with an optional value size limit.
#[derive(Debug, Clone, Default)]
pub struct MockStore {
    values: Arc<Mutex<HashMap<String, String>>>,
    limit: Option<usize>,
    unavailable: bool,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.values.lock().insert(key.to_string(), value.to_string());
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }
}

#[async_trait]
impl KeyValueStore for MockStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable("store offline".to_string()));
        }
        Ok(self.value(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable("store offline".to_string()));
        }
        if let Some(limit) = self.limit
            && value.len() > limit
        {
            return Err(StorageError::QuotaExceeded {
                key: key.to_string(),
                size: value.len(),
                limit,
            });
        }
        self.insert(key, value);
        Ok(())
    }
}

/// File system held in memory. A stalled instance never finishes reads.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
    stalled: bool,
    read_only: bool,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stalled() -> Self {
        Self {
            stalled: true,
            ..Self::default()
        }
    }

    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    pub fn add_file(&self, path: impl Into<PathBuf>, contents: &str) {
        self.files
            .lock()
            .insert(path.into(), contents.as_bytes().to_vec());
    }

    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files
            .lock()
            .get(path)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}

impl FileSystem for MockFileSystem {
    async fn read_file_string(&self, path: &Path) -> Result<String, FileSystemError> {
        if self.stalled {
            std::future::pending::<()>().await;
        }
        self.contents(path)
            .ok_or_else(|| FileSystemError::NotFound(path.to_path_buf()))
    }

    async fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), FileSystemError> {
        if self.read_only {
            return Err(FileSystemError::PermissionDenied(path.to_path_buf()));
        }
        self.files
            .lock()
            .insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    async fn exists(&self, path: &Path) -> bool {
        self.files.lock().contains_key(path)
    }
}

/// Clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn at(year: i32, month: u32, day: u32) -> Self {
        Self(
            Utc.with_ymd_and_hms(year, month, day, 9, 30, 0)
                .single()
                .unwrap_or_default(),
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Notifier that records every toast.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().clone()
    }

    pub fn titles(&self) -> Vec<String> {
        self.toasts().into_iter().map(|toast| toast.title).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.lock().push(toast);
    }
}
