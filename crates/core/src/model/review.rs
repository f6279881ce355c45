use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::ids::EntryId;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors that can occur when decoding review outcomes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OutcomeError {
    #[error("unknown review outcome: {0:?}")]
    Unknown(String),
}

//
// ─── OUTCOME ──────────────────────────────────────────────────────────────────
//

/// Three-level recall rating for entry reviews.
///
/// The set is closed: persistence and presentation both depend on these
/// exact names.
/// - `Again`: failed to recall, the entry comes back tomorrow
/// - `Good`: recalled with normal effort
/// - `Easy`: recalled instantly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Again,
    Good,
    Easy,
}

impl Outcome {
    /// Every outcome, in grading-button order.
    pub const ALL: [Outcome; 3] = [Outcome::Again, Outcome::Good, Outcome::Easy];

    /// The canonical name, as persisted and displayed.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Again => "Again",
            Outcome::Good => "Good",
            Outcome::Easy => "Easy",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Outcome {
    type Err = OutcomeError;

    /// Decodes the canonical name.
    ///
    /// # Errors
    ///
    /// Returns `OutcomeError::Unknown` for anything other than `"Again"`,
    /// `"Good"`, or `"Easy"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Again" => Ok(Outcome::Again),
            "Good" => Ok(Outcome::Good),
            "Easy" => Ok(Outcome::Easy),
            other => Err(OutcomeError::Unknown(other.to_string())),
        }
    }
}

//
// ─── PROGRESS RECORD ──────────────────────────────────────────────────────────
//

/// Latest review result for a single entry.
///
/// Overwritten wholesale on every grading; no review history is kept. The
/// due date is a bare calendar date with no time component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressRecord {
    pub last_result: Outcome,
    pub due_date: NaiveDate,
}

impl ProgressRecord {
    #[must_use]
    pub fn new(last_result: Outcome, due_date: NaiveDate) -> Self {
        Self {
            last_result,
            due_date,
        }
    }
}

/// Full mapping from entry id to its latest review record.
///
/// An absent key means the entry has never been graded ("unseen").
pub type ProgressMap = BTreeMap<EntryId, ProgressRecord>;

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
