//! The `.nebu` backup document.
//!
//! A backup is a JSON envelope tagged with a format signature:
//!
//! ```json
//! {
//!   "signature": "nebula_board_export_v1",
//!   "timestamp": "2024-03-01T10:00:00Z",
//!   "data": { "tabs": [], "scratchpads": [] }
//! }
//! ```

mod codec;
mod document;
mod format;

pub use codec::{decode_document, encode_document};
pub use document::{BackupDocument, BackupPayload, RestoredBackup, backup_file_name};
pub use format::{BackupFormat, EXPORT_SIGNATURE, FILE_EXTENSION};
