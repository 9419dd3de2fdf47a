//! Command line configuration.
//!
//! Values come from an optional TOML file, overridden by `NEBULA_*`
//! environment variables (e.g. `NEBULA_STORAGE_DIR`).

use std::path::PathBuf;
use std::time::Duration;

use nebula_infrastructure::{DEFAULT_QUOTA_BYTES, FileKeyValueStore};
use serde::Deserialize;

/// Settings for the `nebula` binary.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Directory of the key-value store holding scratchpads.
    #[serde(default)]
    pub storage_dir: Option<PathBuf>,

    /// Directory backups are written into.
    #[serde(default)]
    pub download_dir: Option<PathBuf>,

    /// Largest value the store accepts, in bytes.
    #[serde(default = "default_max_value_bytes")]
    pub max_value_bytes: usize,

    /// Deadline for reading a backup file, in seconds.
    #[serde(default)]
    pub read_timeout_secs: Option<u64>,

    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

const fn default_max_value_bytes() -> usize {
    DEFAULT_QUOTA_BYTES
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Resolved store directory.
    pub fn storage_dir(&self) -> PathBuf {
        self.storage_dir
            .clone()
            .or_else(FileKeyValueStore::default_location)
            .unwrap_or_else(|| PathBuf::from(".nebula").join("storage"))
    }

    /// Resolved backup destination.
    pub fn download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Read deadline, if configured.
    pub fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout_secs.map(Duration::from_secs)
    }
}

/// Loads configuration from `path` (or `nebula.toml` if present) and the environment.
pub fn load(path: Option<&str>) -> anyhow::Result<AppConfig> {
    let mut settings = config::Config::builder();
    if let Some(p) = path {
        settings = settings.add_source(config::File::with_name(p));
    } else {
        settings = settings.add_source(config::File::with_name("nebula").required(false));
    }
    settings = settings.add_source(config::Environment::with_prefix("NEBULA").try_parsing(true));
    let cfg = settings.build()?;
    Ok(cfg.try_deserialize()?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_values_and_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nebula.toml");
        std::fs::write(
            &path,
            "storage_dir = \"/tmp/nebula-store\"\nread_timeout_secs = 30\n",
        )
        .unwrap();

        let cfg = load(path.to_str()).unwrap();

        assert_eq!(cfg.storage_dir(), PathBuf::from("/tmp/nebula-store"));
        assert_eq!(cfg.read_timeout(), Some(Duration::from_secs(30)));
        assert_eq!(cfg.max_value_bytes, DEFAULT_QUOTA_BYTES);
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        assert!(load(path.to_str()).is_err());
    }
}
