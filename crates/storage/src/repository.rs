use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use vocab_core::model::{EntryId, Outcome, ProgressMap, ProgressRecord};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("lock poisoned: {0}")]
    LockPoisoned(String),
}

//
// ─── PERSISTED SHAPE ───────────────────────────────────────────────────────────
//

/// Persisted shape for one progress record.
///
/// This mirrors the domain `ProgressRecord` so repositories can serialize
/// without leaking storage concerns into the domain layer. Field names are
/// part of the on-disk format and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecordData {
    pub last_result: String,
    pub due_date: String,
}

impl ProgressRecordData {
    #[must_use]
    pub fn from_record(record: &ProgressRecord) -> Self {
        Self {
            last_result: record.last_result.as_str().to_owned(),
            due_date: record.due_date.to_string(),
        }
    }

    /// Convert the persisted shape back into a domain `ProgressRecord`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the outcome name or the due
    /// date cannot be decoded.
    pub fn into_record(self) -> Result<ProgressRecord, StorageError> {
        let last_result = self
            .last_result
            .parse::<Outcome>()
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        let due_date = self
            .due_date
            .parse::<NaiveDate>()
            .map_err(|_| StorageError::Serialization(format!("invalid due date: {:?}", self.due_date)))?;
        Ok(ProgressRecord::new(last_result, due_date))
    }
}

/// Full persisted mapping, keyed by the decimal entry id.
pub type ProgressData = BTreeMap<String, ProgressRecordData>;

/// Encodes the domain mapping into its persisted shape.
#[must_use]
pub fn encode_progress(map: &ProgressMap) -> ProgressData {
    map.iter()
        .map(|(id, record)| (id.to_string(), ProgressRecordData::from_record(record)))
        .collect()
}

/// Decodes the persisted shape back into the domain mapping.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if any key is not a decimal entry
/// id or any record fails conversion.
pub fn decode_progress(data: ProgressData) -> Result<ProgressMap, StorageError> {
    let mut map = ProgressMap::new();
    for (key, record) in data {
        let id = key
            .parse::<EntryId>()
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        map.insert(id, record.into_record()?);
    }
    Ok(map)
}

//
// ─── REPOSITORY CONTRACT ───────────────────────────────────────────────────────
//

/// Repository contract for the progress store.
///
/// The store is one small mapping, so both operations move the whole map:
/// `load` once at startup, `save` after every mutation (write-through).
pub trait ProgressRepository: Send + Sync {
    /// Loads the full mapping.
    ///
    /// Absence of prior data is the expected first-run state and yields an
    /// empty mapping, not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` only for failures the backend cannot absorb.
    fn load(&self) -> Result<ProgressMap, StorageError>;

    /// Replaces the persisted mapping with `map`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the mapping cannot be written.
    fn save(&self, map: &ProgressMap) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct MemoryProgressRepository {
    map: Arc<Mutex<ProgressMap>>,
}

impl MemoryProgressRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            map: Arc::new(Mutex::new(ProgressMap::new())),
        }
    }
}

impl ProgressRepository for MemoryProgressRepository {
    fn load(&self) -> Result<ProgressMap, StorageError> {
        let guard = self
            .map
            .lock()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        Ok(guard.clone())
    }

    fn save(&self, map: &ProgressMap) -> Result<(), StorageError> {
        let mut guard = self
            .map
            .lock()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        *guard = map.clone();
        Ok(())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
