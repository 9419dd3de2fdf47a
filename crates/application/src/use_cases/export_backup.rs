//! Export backup use case.

use std::path::PathBuf;

use nebula_domain::{BackupDocument, Scratchpad, Tab, backup_file_name, encode_document};
use tracing::{debug, warn};

use super::scratchpads::load_scratchpad_records;
use crate::error::{BackupError, BackupResult};
use crate::ports::{Clock, FileSystem, KeyValueStore};

/// Input for exporting a backup.
#[derive(Debug, Clone)]
pub struct ExportBackupInput {
    /// Tabs currently on the board, in board order.
    pub tabs: Vec<Tab>,
    /// Directory the backup file is written into.
    pub destination: PathBuf,
}

/// A backup rendered to text but not yet written.
#[derive(Debug, Clone)]
pub struct RenderedBackup {
    /// Suggested download file name.
    pub file_name: String,
    /// The indented JSON document.
    pub contents: String,
    /// Number of tabs in the document.
    pub tab_count: usize,
    /// Number of scratchpads in the document.
    pub scratchpad_count: usize,
}

/// Output of a successful export.
#[derive(Debug, Clone)]
pub struct ExportBackupOutput {
    /// Full path of the written file.
    pub path: PathBuf,
    /// File name within the destination directory.
    pub file_name: String,
    /// Number of tabs written.
    pub tab_count: usize,
    /// Number of scratchpads written.
    pub scratchpad_count: usize,
}

/// Use case for writing the board's tabs and stored scratchpads to a `.nebu` file.
pub struct ExportBackup<S, F, C> {
    store: S,
    fs: F,
    clock: C,
}

impl<S: KeyValueStore, F: FileSystem, C: Clock> ExportBackup<S, F, C> {
    /// Creates a new `ExportBackup` use case.
    pub const fn new(store: S, fs: F, clock: C) -> Self {
        Self { store, fs, clock }
    }

    /// Builds the backup document text without writing it.
    ///
    /// Stored scratchpads are included when they can be read; otherwise the
    /// backup proceeds with none and a warning is logged. A malformed record
    /// inside a readable array is skipped on its own.
    ///
    /// # Errors
    /// Returns an error if the document cannot be serialized.
    pub async fn render(&self, tabs: Vec<Tab>) -> BackupResult<RenderedBackup> {
        let scratchpads = self.stored_scratchpads().await;
        let document = BackupDocument::new(self.clock.now(), tabs, scratchpads);
        let contents = encode_document(&document)?;

        Ok(RenderedBackup {
            file_name: backup_file_name(self.clock.today()),
            contents,
            tab_count: document.data.tabs.len(),
            scratchpad_count: document.data.scratchpads.len(),
        })
    }

    /// Renders the backup and writes it into the destination directory.
    ///
    /// # Errors
    /// Returns an error if the document cannot be serialized or written.
    pub async fn execute(&self, input: ExportBackupInput) -> BackupResult<ExportBackupOutput> {
        let rendered = self.render(input.tabs).await?;
        let path = input.destination.join(&rendered.file_name);

        self.fs
            .write_file(&path, rendered.contents.as_bytes())
            .await
            .map_err(BackupError::Write)?;

        debug!(
            path = %path.display(),
            tabs = rendered.tab_count,
            scratchpads = rendered.scratchpad_count,
            "exported backup"
        );

        Ok(ExportBackupOutput {
            path,
            file_name: rendered.file_name,
            tab_count: rendered.tab_count,
            scratchpad_count: rendered.scratchpad_count,
        })
    }

    async fn stored_scratchpads(&self) -> Vec<Scratchpad> {
        let records = match load_scratchpad_records(&self.store).await {
            Ok(records) => records,
            Err(error) => {
                warn!(%error, "could not load scratchpads for backup");
                return Vec::new();
            }
        };

        records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value(record) {
                Ok(scratchpad) => Some(scratchpad),
                Err(error) => {
                    warn!(index, %error, "skipping malformed stored scratchpad");
                    None
                }
            })
            .collect()
    }
}
