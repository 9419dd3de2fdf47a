//! Backup format versions.

use serde::{Deserialize, Serialize};

/// Signature written by the current exporter.
pub const EXPORT_SIGNATURE: &str = "nebula_board_export_v1";

/// File extension of backup files, without the dot.
pub const FILE_EXTENSION: &str = "nebu";

/// Known backup formats, keyed by their signature string.
///
/// Decoding accepts a document only if its signature matches one of these
/// variants exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BackupFormat {
    /// First board export format.
    #[default]
    #[serde(rename = "nebula_board_export_v1")]
    V1,
}

impl BackupFormat {
    /// The format written by new exports.
    pub const CURRENT: Self = Self::V1;

    /// Get all known formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::V1]
    }

    /// Returns the signature string for this format.
    #[must_use]
    pub const fn signature(self) -> &'static str {
        match self {
            Self::V1 => EXPORT_SIGNATURE,
        }
    }

    /// Looks up a format by exact signature match.
    #[must_use]
    pub fn from_signature(signature: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|format| format.signature() == signature)
    }
}
