//! Nebula Domain - Core board types
//!
//! This crate defines the board records (tabs and scratchpads), the
//! `.nebu` backup document and its codec, and user-facing notices.
//! All types here are pure Rust with no I/O dependencies.

pub mod backup;
pub mod error;
pub mod notice;
pub mod scratchpad;
pub mod tab;

pub use backup::{
    BackupDocument, BackupFormat, BackupPayload, EXPORT_SIGNATURE, FILE_EXTENSION, RestoredBackup,
    backup_file_name, decode_document, encode_document,
};
pub use error::{CodecError, DataField};
pub use notice::{Toast, ToastVariant};
pub use scratchpad::Scratchpad;
pub use tab::Tab;
