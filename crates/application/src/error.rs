//! Application error types

use std::time::Duration;

use nebula_domain::CodecError;
use thiserror::Error;

use crate::ports::{FileSystemError, StorageError};

/// Errors surfaced by backup, restore and scratchpad operations.
///
/// Every variant carries a message fit for a notification.
#[derive(Debug, Error)]
pub enum BackupError {
    /// The backup file could not be read.
    #[error("Failed to read the file.")]
    Read(#[source] FileSystemError),

    /// The backup text failed to encode or validate.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The backup file could not be written.
    #[error("Could not write the backup file: {0}")]
    Write(#[source] FileSystemError),

    /// The key-value store rejected an operation.
    #[error("{0}")]
    Storage(#[from] StorageError),

    /// The operation was cancelled.
    #[error("operation cancelled")]
    Cancelled,

    /// Reading the backup file took too long.
    #[error("Reading the file timed out after {0:?}")]
    Timeout(Duration),
}

/// Result type alias for backup operations.
pub type BackupResult<T> = Result<T, BackupError>;
