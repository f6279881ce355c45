use chrono::{DateTime, TimeZone};
use std::fmt;

use vocab_core::model::{Entry, Outcome, ProgressRecord};

use crate::error::SessionError;
use crate::progress_service::ProgressService;

//
// ─── STUDY SESSION ─────────────────────────────────────────────────────────────
//

/// Interactive study state: the ordered entries, the cursor, and the
/// progress store.
///
/// The cursor always addresses a valid entry; navigation wraps modulo the
/// entry count in both directions. Grading records an outcome for the
/// current entry and leaves the cursor alone; callers that want
/// grade-then-advance compose the two calls.
pub struct StudySession {
    entries: Vec<Entry>,
    cursor: usize,
    progress: ProgressService,
}

impl StudySession {
    /// Creates a session over `entries` with the cursor on the first one.
    ///
    /// Entries are expected in ascending id order, which is the dataset
    /// loader's contract.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoEntries` when `entries` is empty; a cursor
    /// over zero entries has no valid position.
    pub fn new(entries: Vec<Entry>, progress: ProgressService) -> Result<Self, SessionError> {
        if entries.is_empty() {
            return Err(SessionError::NoEntries);
        }
        Ok(Self {
            entries,
            cursor: 0,
            progress,
        })
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries in the session. Always at least one.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Index of the entry currently shown.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The entry at the cursor.
    #[must_use]
    pub fn current(&self) -> &Entry {
        &self.entries[self.cursor]
    }

    /// Moves to the next entry, wrapping past the end. Returns the new
    /// index.
    pub fn advance(&mut self) -> usize {
        self.cursor = (self.cursor + 1) % self.entries.len();
        self.cursor
    }

    /// Moves to the previous entry, wrapping past the start. Returns the
    /// new index.
    pub fn retreat(&mut self) -> usize {
        self.cursor = (self.cursor + self.entries.len() - 1) % self.entries.len();
        self.cursor
    }

    /// Sets the cursor directly. Indices come from the entry list, which
    /// is built over the same slice, so `index` is trusted to be in range.
    pub fn jump_to(&mut self, index: usize) {
        debug_assert!(index < self.entries.len());
        self.cursor = index;
    }

    /// Grades the current entry at instant `now`. The cursor stays put;
    /// the caller decides whether to advance afterwards.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Progress` if the grading cannot be
    /// persisted.
    pub fn grade_current<Tz: TimeZone>(
        &mut self,
        outcome: Outcome,
        now: DateTime<Tz>,
    ) -> Result<ProgressRecord, SessionError> {
        let id = self.entries[self.cursor].id;
        Ok(self.progress.record_outcome(id, outcome, now)?)
    }

    /// Read access to the progress store.
    #[must_use]
    pub fn progress(&self) -> &ProgressService {
        &self.progress
    }
}

impl fmt::Debug for StudySession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StudySession")
            .field("entries_len", &self.entries.len())
            .field("cursor", &self.cursor)
            .field("records_len", &self.progress.len())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
