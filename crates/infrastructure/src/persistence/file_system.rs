//! Real file system implementation.

use std::io::ErrorKind;
use std::path::Path;

use nebula_application::ports::{FileSystem, FileSystemError};
use tokio::fs;

/// Real file system implementation using `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileSystem;

impl TokioFileSystem {
    /// Creates a new `TokioFileSystem`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn map_io_error(path: &Path, e: std::io::Error) -> FileSystemError {
    match e.kind() {
        ErrorKind::NotFound => FileSystemError::NotFound(path.to_path_buf()),
        ErrorKind::PermissionDenied => FileSystemError::PermissionDenied(path.to_path_buf()),
        ErrorKind::IsADirectory => FileSystemError::NotAFile(path.to_path_buf()),
        _ => FileSystemError::Io(e),
    }
}

impl FileSystem for TokioFileSystem {
    async fn read_file_string(&self, path: &Path) -> Result<String, FileSystemError> {
        fs::read_to_string(path)
            .await
            .map_err(|e| map_io_error(path, e))
    }

    async fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), FileSystemError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| map_io_error(parent, e))?;
        }
        fs::write(path, contents)
            .await
            .map_err(|e| map_io_error(path, e))
    }

    async fn exists(&self, path: &Path) -> bool {
        fs::metadata(path).await.is_ok()
    }
}
