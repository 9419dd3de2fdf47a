//! Nebula Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (storage, file system, clock, notifications)
//! - Backup, restore and scratchpad use cases
//! - The board header's backup/restore orchestration

pub mod error;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{BackupError, BackupResult};
pub use ports::{
    CancellationReceiver, CancellationToken, Clock, FileSystem, FileSystemError, KeyValueStore,
    Notifier, StorageError,
};
pub use use_cases::{
    BoardHeader, ExportBackup, ExportBackupInput, ExportBackupOutput, ImportBackup,
    LoadScratchpads, RenderedBackup, SCRATCHPAD_STORAGE_KEY, SaveScratchpads,
};
