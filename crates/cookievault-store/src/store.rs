//! Atomic-replace persistence for the consent record.
//!
//! The record is a single JSON document. Writers serialize to a temporary
//! file in the same directory, flush it, and rename it over the record
//! path, so a concurrent reader observes either the prior record or the
//! new one, never a partial write. Concurrent saves race at the rename;
//! the last rename wins. The in-process mutex keeps the shared temporary
//! path single-writer.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use parking_lot::Mutex;
use serde_json::Value;
use tracing::{debug, info, warn};

use cookievault_core::{DataPaths, Error, Result};

use crate::migrate::{self, SCHEMA_VERSION};
use crate::types::Preferences;

/// Owns the persisted consent record.
pub struct PreferenceStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl PreferenceStore {
    /// Open the store rooted at the configured data paths.
    pub fn open(paths: &DataPaths) -> Result<Self> {
        fs::create_dir_all(&paths.root).map_err(|e| Error::WriteFailure(e.to_string()))?;

        let store = Self {
            path: paths.preferences_file.clone(),
            write_lock: Mutex::new(()),
        };

        info!(
            "PreferenceStore initialized: schema v{}, populated={}, path={}",
            SCHEMA_VERSION,
            store.path.exists(),
            store.path.display()
        );

        Ok(store)
    }

    /// Read the persisted record.
    ///
    /// Returns `None` when no record exists or the record cannot be
    /// trusted (unparseable bytes, unknown version, denied essential
    /// grant). Absence is the only failure signal.
    pub fn load(&self) -> Option<Preferences> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No consent record at {}", self.path.display());
                return None;
            }
            Err(e) => {
                warn!("Consent record unreadable, treating as absent: {}", e);
                return None;
            }
        };

        match decode(&raw) {
            Ok(prefs) => Some(prefs),
            Err(e) => {
                warn!("Consent record rejected, treating as absent: {}", e);
                None
            }
        }
    }

    /// Replace the persisted record.
    ///
    /// Stamps the current time and schema version; caller-supplied values
    /// for both are ignored. The previous record survives any failure.
    pub fn save(&self, prefs: &Preferences) -> Result<()> {
        if !prefs.grants.essential {
            return Err(Error::InvalidInput(
                "the essential category cannot be denied".into(),
            ));
        }

        let record = Preferences::new(prefs.grants);
        let json = serde_json::to_string_pretty(&record)
            .map_err(|e| Error::WriteFailure(e.to_string()))?;

        let _guard = self.write_lock.lock();
        self.commit(json.as_bytes())?;

        info!("Saved consent preferences to {}", self.path.display());
        Ok(())
    }

    /// Remove the persisted record. Removing an empty store succeeds.
    pub fn clear(&self) -> Result<()> {
        let _guard = self.write_lock.lock();
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Cleared consent record at {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::WriteFailure(e.to_string())),
        }
    }

    /// Write-to-temporary then rename. The record path never holds a
    /// partially written document.
    fn commit(&self, bytes: &[u8]) -> Result<()> {
        let tmp = self.path.with_extension("json.tmp");
        let written = (|| -> std::io::Result<()> {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(bytes)?;
            file.sync_all()?;
            fs::rename(&tmp, &self.path)
        })();

        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(Error::WriteFailure(e.to_string()));
        }
        Ok(())
    }
}

/// Parse, migrate, and validate a raw record.
fn decode(raw: &str) -> Result<Preferences> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| Error::CorruptRecord(e.to_string()))?;

    let upgraded = migrate::upgrade(value)?;

    let prefs: Preferences =
        serde_json::from_value(upgraded).map_err(|e| Error::CorruptRecord(e.to_string()))?;

    if !prefs.grants.essential {
        return Err(Error::CorruptRecord("essential grant is denied".into()));
    }

    Ok(prefs)
}
