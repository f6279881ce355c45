use chrono::{DateTime, TimeZone};
use log::{debug, info};
use std::sync::Arc;

use storage::repository::ProgressRepository;
use vocab_core::model::{EntryId, Outcome, ProgressMap, ProgressRecord};
use vocab_core::scheduler::compute_due_date;

use crate::error::ProgressError;

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

/// Owns the in-memory progress mapping and its write-through persistence.
///
/// The mapping is read once at construction and written back in full after
/// every mutation, so the persisted store always reflects the latest
/// grading. There is no batching or debounce; gradings are rare enough
/// that one full write per grading is the simplest correct policy.
pub struct ProgressService {
    map: ProgressMap,
    repository: Arc<dyn ProgressRepository>,
}

impl ProgressService {
    /// Reads the persisted mapping once and keeps it in memory.
    ///
    /// First runs and corrupt files surface here as an empty mapping; the
    /// repository absorbs them before this call.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` only for failures the repository
    /// cannot absorb.
    pub fn load(repository: Arc<dyn ProgressRepository>) -> Result<Self, ProgressError> {
        let map = repository.load()?;
        info!("loaded {} progress records", map.len());
        Ok(Self { map, repository })
    }

    /// Grades `id` with `outcome` at instant `now`.
    ///
    /// Computes the due date from the outcome's fixed day offset, replaces
    /// any previous record for `id`, and persists the whole mapping before
    /// returning. If persistence fails the in-memory record is rolled back
    /// so memory and disk stay consistent.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if the mapping cannot be written.
    pub fn record_outcome<Tz: TimeZone>(
        &mut self,
        id: EntryId,
        outcome: Outcome,
        now: DateTime<Tz>,
    ) -> Result<ProgressRecord, ProgressError> {
        let record = ProgressRecord::new(outcome, compute_due_date(outcome, now));
        let previous = self.map.insert(id, record);

        if let Err(err) = self.repository.save(&self.map) {
            match previous {
                Some(prev) => {
                    self.map.insert(id, prev);
                }
                None => {
                    self.map.remove(&id);
                }
            }
            return Err(err.into());
        }

        debug!("entry {id} graded {}, due {}", record.last_result, record.due_date);
        Ok(record)
    }

    /// The latest record for `id`, if it has ever been graded.
    #[must_use]
    pub fn lookup(&self, id: EntryId) -> Option<&ProgressRecord> {
        self.map.get(&id)
    }

    /// Number of entries with a record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// A clone of the full mapping.
    #[must_use]
    pub fn snapshot(&self) -> ProgressMap {
        self.map.clone()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
