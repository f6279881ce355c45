use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

use vocab_core::model::ProgressMap;

use crate::repository::{
    ProgressData, ProgressRepository, StorageError, decode_progress, encode_progress,
};

/// Directory under the platform's local data dir.
const APP_DIR: &str = "vocab-cards";
/// File name of the single persistence slot.
const PROGRESS_FILE: &str = "progress.json";

/// Default location of the progress file for the current user.
///
/// Falls back to the working directory when the platform reports no local
/// data dir.
#[must_use]
pub fn default_progress_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(PROGRESS_FILE)
}

/// File-backed progress store: one JSON document holding the whole mapping.
///
/// The document is an object keyed by decimal entry id, each value holding
/// `lastResult` and `dueDate`. There is no versioning or migration; a file
/// this store cannot read is treated as absent.
#[derive(Debug, Clone)]
pub struct JsonProgressRepository {
    path: PathBuf,
}

impl JsonProgressRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Opens the default per-user slot.
    #[must_use]
    pub fn at_default_path() -> Self {
        Self::new(default_progress_path())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProgressRepository for JsonProgressRepository {
    /// Missing, unreadable, or corrupt data degrades to an empty mapping:
    /// a first run and a damaged file both restart progress from scratch
    /// instead of failing startup.
    fn load(&self) -> Result<ProgressMap, StorageError> {
        if !self.path.exists() {
            debug!("no progress file at {}, starting empty", self.path.display());
            return Ok(ProgressMap::new());
        }
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) => {
                warn!(
                    "could not read progress file {}: {err}; starting empty",
                    self.path.display()
                );
                return Ok(ProgressMap::new());
            }
        };
        let data: ProgressData = match serde_json::from_str(&contents) {
            Ok(data) => data,
            Err(err) => {
                warn!(
                    "corrupt progress file {}: {err}; starting empty",
                    self.path.display()
                );
                return Ok(ProgressMap::new());
            }
        };
        match decode_progress(data) {
            Ok(map) => Ok(map),
            Err(err) => {
                warn!(
                    "invalid progress data in {}: {err}; starting empty",
                    self.path.display()
                );
                Ok(ProgressMap::new())
            }
        }
    }

    fn save(&self, map: &ProgressMap) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError::Io(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(&encode_progress(map))
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| StorageError::Io(e.to_string()))?;
        debug!(
            "saved {} progress records to {}",
            map.len(),
            self.path.display()
        );
        Ok(())
    }
}
