//! Backup and restore actions of the board header.
//!
//! Runs the backup use cases and reports each outcome through the
//! [`Notifier`] port.

use std::path::{Path, PathBuf};
use std::time::Duration;

use nebula_domain::{RestoredBackup, Tab, Toast};
use tracing::error;

use super::export_backup::{ExportBackup, ExportBackupInput, ExportBackupOutput};
use super::import_backup::ImportBackup;
use super::scratchpads::SaveScratchpads;
use crate::error::BackupResult;
use crate::ports::{CancellationReceiver, Clock, FileSystem, KeyValueStore, Notifier};

/// Header actions wired to a store, file system, clock and notifier.
pub struct BoardHeader<S, F, C, N> {
    export: ExportBackup<S, F, C>,
    import: ImportBackup<F>,
    save_scratchpads: SaveScratchpads<S>,
    notifier: N,
}

impl<S, F, C, N> BoardHeader<S, F, C, N>
where
    S: KeyValueStore + Clone,
    F: FileSystem + Clone,
    C: Clock,
    N: Notifier,
{
    /// Creates the header actions.
    pub fn new(store: S, fs: F, clock: C, notifier: N) -> Self {
        Self {
            export: ExportBackup::new(store.clone(), fs.clone(), clock),
            import: ImportBackup::new(fs),
            save_scratchpads: SaveScratchpads::new(store),
            notifier,
        }
    }

    /// Gives restores a read deadline.
    #[must_use]
    pub fn with_import_timeout(mut self, timeout: Duration) -> Self {
        self.import = self.import.with_timeout(timeout);
        self
    }

    /// Writes a backup of `tabs` into `destination` and reports the outcome.
    ///
    /// # Errors
    /// Returns the export error after notifying about it.
    pub async fn backup(
        &self,
        tabs: Vec<Tab>,
        destination: impl Into<PathBuf>,
    ) -> BackupResult<ExportBackupOutput> {
        let result = self
            .export
            .execute(ExportBackupInput {
                tabs,
                destination: destination.into(),
            })
            .await;

        match &result {
            Ok(_) => self.notifier.notify(Toast::new(
                "Backup Successful",
                "Your .nebu file has been downloaded.",
            )),
            Err(err) => self
                .notifier
                .notify(Toast::destructive("Backup Failed", err.to_string())),
        }
        result
    }

    /// Restores a backup file.
    ///
    /// Returns the restored records for the caller to install on the board,
    /// or `None` if the file was rejected. Restored scratchpads are written to
    /// the store when there are any.
    pub async fn restore(&self, path: &Path) -> Option<RestoredBackup> {
        let result = self.import.execute(path).await;
        self.finish_restore(result).await
    }

    /// Same as [`restore`](Self::restore), abandoning the read when `cancel` fires.
    pub async fn restore_with_cancellation(
        &self,
        path: &Path,
        cancel: CancellationReceiver,
    ) -> Option<RestoredBackup> {
        let result = self.import.execute_with_cancellation(path, cancel).await;
        self.finish_restore(result).await
    }

    async fn finish_restore(&self, result: BackupResult<RestoredBackup>) -> Option<RestoredBackup> {
        let restored = match result {
            Ok(restored) => restored,
            Err(err) => {
                error!(error = %err, "failed to restore");
                self.notifier
                    .notify(Toast::destructive("Restore Failed", err.to_string()));
                return None;
            }
        };

        self.notifier.notify(Toast::new(
            "Tabs Restored",
            "Your tabs have been restored from the backup file.",
        ));

        if !restored.scratchpads.is_empty() {
            match self.save_scratchpads.execute(&restored.scratchpads).await {
                Ok(()) => self.notifier.notify(Toast::new(
                    "Scratchpads Restored",
                    "Your scratchpads have also been restored.",
                )),
                Err(err) => self.notifier.notify(Toast::destructive(
                    "Scratchpad Restore Failed",
                    err.to_string(),
                )),
            }
        }

        Some(restored)
    }
}
