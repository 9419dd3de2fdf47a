//! Import backup use case.

use std::path::Path;
use std::time::Duration;

use nebula_domain::{RestoredBackup, decode_document};
use tracing::debug;

use crate::error::{BackupError, BackupResult};
use crate::ports::{CancellationReceiver, FileSystem};

/// Use case for reading and validating a `.nebu` file.
///
/// The read has no deadline unless one is set with
/// [`with_timeout`](Self::with_timeout).
pub struct ImportBackup<F> {
    fs: F,
    timeout: Option<Duration>,
}

impl<F: FileSystem> ImportBackup<F> {
    /// Creates a new `ImportBackup` use case.
    pub const fn new(fs: F) -> Self {
        Self { fs, timeout: None }
    }

    /// Fails reads that take longer than `timeout`.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Reads the file at `path` and returns its validated contents.
    ///
    /// # Errors
    /// - `Read` if the file cannot be read
    /// - `Timeout` if a configured deadline passes first
    /// - `Codec` if the text is not a valid backup
    pub async fn execute(&self, path: &Path) -> BackupResult<RestoredBackup> {
        let text = self.read(path).await?;
        let restored = decode_document(&text)?;

        debug!(
            path = %path.display(),
            tabs = restored.tabs.len(),
            scratchpads = restored.scratchpads.len(),
            "imported backup"
        );
        Ok(restored)
    }

    /// Same as [`execute`](Self::execute), but gives up when `cancel` fires.
    ///
    /// # Errors
    /// Returns `Cancelled` if cancellation wins the race, otherwise the
    /// errors of [`execute`](Self::execute).
    pub async fn execute_with_cancellation(
        &self,
        path: &Path,
        mut cancel: CancellationReceiver,
    ) -> BackupResult<RestoredBackup> {
        tokio::select! {
            result = self.execute(path) => result,
            () = cancel.cancelled() => Err(BackupError::Cancelled),
        }
    }

    async fn read(&self, path: &Path) -> BackupResult<String> {
        let read = self.fs.read_file_string(path);
        let result = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, read)
                .await
                .map_err(|_| BackupError::Timeout(limit))?,
            None => read.await,
        };
        result.map_err(BackupError::Read)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ports::{CancellationToken, FileSystemError};
    use crate::test_support::MockFileSystem;
    use nebula_domain::{CodecError, DataField, Tab};
    use pretty_assertions::assert_eq;

    const BACKUP: &str = r#"{
  "signature": "nebula_board_export_v1",
  "timestamp": "2024-03-05T09:30:00.000Z",
  "data": {
    "tabs": [
      { "id": "1", "title": "A", "url": "http://x", "notes": "", "tags": [] }
    ],
    "scratchpads": []
  }
}"#;

    fn fs_with(path: &str, contents: &str) -> MockFileSystem {
        let fs = MockFileSystem::new();
        fs.add_file(path, contents);
        fs
    }

    #[tokio::test]
    async fn test_import_valid_file() {
        let import = ImportBackup::new(fs_with("/b.nebu", BACKUP));

        let restored = import.execute(Path::new("/b.nebu")).await.unwrap();

        assert_eq!(restored.tabs, vec![Tab::new("1", "A", "http://x")]);
        assert!(restored.scratchpads.is_empty());
        assert!(restored.created_at.is_some());
    }

    #[tokio::test]
    async fn test_missing_file_is_read_error() {
        let import = ImportBackup::new(MockFileSystem::new());

        let err = import.execute(Path::new("/nope.nebu")).await.unwrap_err();

        assert!(matches!(err, BackupError::Read(FileSystemError::NotFound(_))));
        assert_eq!(err.to_string(), "Failed to read the file.");
    }

    #[tokio::test]
    async fn test_foreign_file_is_rejected() {
        let import = ImportBackup::new(fs_with("/x.json", r#"{"name": "not a backup"}"#));

        let err = import.execute(Path::new("/x.json")).await.unwrap_err();

        assert!(matches!(
            err,
            BackupError::Codec(CodecError::UnrecognizedFormat)
        ));
    }

    #[tokio::test]
    async fn test_corrupted_tabs_are_rejected() {
        let import = ImportBackup::new(fs_with(
            "/c.nebu",
            r#"{"signature": "nebula_board_export_v1", "data": {"tabs": "oops"}}"#,
        ));

        let err = import.execute(Path::new("/c.nebu")).await.unwrap_err();

        assert!(matches!(
            err,
            BackupError::Codec(CodecError::CorruptedData(DataField::Tabs))
        ));
    }

    #[tokio::test]
    async fn test_cancellation_stops_stalled_read() {
        let import = ImportBackup::new(MockFileSystem::stalled());
        let (token, receiver) = CancellationToken::new();
        token.cancel();

        let err = import
            .execute_with_cancellation(Path::new("/slow.nebu"), receiver)
            .await
            .unwrap_err();

        assert!(matches!(err, BackupError::Cancelled));
    }

    #[tokio::test]
    async fn test_uncancelled_import_completes() {
        let import = ImportBackup::new(fs_with("/b.nebu", BACKUP));
        let (_token, receiver) = CancellationToken::new();

        let restored = import
            .execute_with_cancellation(Path::new("/b.nebu"), receiver)
            .await
            .unwrap();

        assert_eq!(restored.tabs.len(), 1);
    }

    #[tokio::test]
    async fn test_timeout_stops_stalled_read() {
        let limit = Duration::from_millis(10);
        let import = ImportBackup::new(MockFileSystem::stalled()).with_timeout(limit);

        let err = import.execute(Path::new("/slow.nebu")).await.unwrap_err();

        assert!(matches!(err, BackupError::Timeout(d) if d == limit));
    }
}
