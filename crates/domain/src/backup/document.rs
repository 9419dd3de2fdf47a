//! Backup envelope types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::format::{BackupFormat, FILE_EXTENSION};
use crate::scratchpad::Scratchpad;
use crate::tab::Tab;

/// The records carried by a backup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupPayload {
    /// Board tabs, in board order.
    #[serde(default)]
    pub tabs: Vec<Tab>,

    /// Scratchpads, in stored order.
    #[serde(default)]
    pub scratchpads: Vec<Scratchpad>,
}

/// A complete backup document as written to disk.
///
/// Built just before export and discarded once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupDocument {
    /// Format tag, serialized as the signature string.
    pub signature: BackupFormat,

    /// When the backup was made.
    pub timestamp: DateTime<Utc>,

    /// The backed-up records.
    pub data: BackupPayload,
}

impl BackupDocument {
    /// Creates a document in the current format.
    #[must_use]
    pub fn new(timestamp: DateTime<Utc>, tabs: Vec<Tab>, scratchpads: Vec<Scratchpad>) -> Self {
        Self {
            signature: BackupFormat::CURRENT,
            timestamp,
            data: BackupPayload { tabs, scratchpads },
        }
    }
}

/// Returns the download file name for a backup made on `date`,
/// e.g. `nebula-board-backup-2024-03-01.nebu`.
#[must_use]
pub fn backup_file_name(date: NaiveDate) -> String {
    format!(
        "nebula-board-backup-{}.{FILE_EXTENSION}",
        date.format("%Y-%m-%d")
    )
}

/// The validated contents of an imported backup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoredBackup {
    /// Format the document declared.
    pub format: BackupFormat,

    /// Document timestamp, when present and well-formed.
    pub created_at: Option<DateTime<Utc>>,

    /// Restored tabs, in file order.
    pub tabs: Vec<Tab>,

    /// Restored scratchpads, in file order.
    pub scratchpads: Vec<Scratchpad>,
}
