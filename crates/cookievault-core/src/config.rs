//! Configuration and data directory management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Paths to CookieVault data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Root data directory (e.g., `data/`).
    pub root: PathBuf,
    /// Persisted consent record (`data/preferences.json`).
    pub preferences_file: PathBuf,
}

impl DataPaths {
    /// Create data paths from a root directory. Creates the directory if needed.
    pub fn new(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;
        Ok(Self {
            preferences_file: root.join("preferences.json"),
            root,
        })
    }
}

/// Top-level CookieVault configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CookieVaultConfig {
    /// Data directory paths.
    pub data_paths: DataPaths,
}

impl CookieVaultConfig {
    /// Create configuration from the environment and defaults.
    ///
    /// `COOKIEVAULT_DATA_DIR` overrides the provided data directory.
    pub fn from_env(data_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = std::env::var("COOKIEVAULT_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.as_ref().to_path_buf());

        Ok(Self {
            data_paths: DataPaths::new(root)?,
        })
    }
}
