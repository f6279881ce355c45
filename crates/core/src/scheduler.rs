use chrono::{DateTime, Days, NaiveDate, TimeZone};

use crate::model::Outcome;

//
// ─── REVIEW POLICY ─────────────────────────────────────────────────────────────
//

/// Fixed review interval, in days, for each outcome.
///
/// This is a static table, not an adaptive algorithm: the offset depends
/// only on the outcome of the current grading, never on prior due dates or
/// review history.
#[must_use]
pub fn day_offset(outcome: Outcome) -> u64 {
    match outcome {
        Outcome::Again => 1,
        Outcome::Good => 3,
        Outcome::Easy => 7,
    }
}

/// Computes the next due date for a review graded `outcome` at `now`.
///
/// The result is the calendar date of `now` in its own time zone plus the
/// outcome's day offset. The time-of-day component of `now` never affects
/// the result: grading at 00:00 and at 23:59 of the same local day yield
/// the same due date.
///
/// # Examples
///
/// ```
/// # use vocab_core::model::Outcome;
/// # use vocab_core::scheduler::compute_due_date;
/// let now = "2024-01-01T09:30:00Z".parse::<chrono::DateTime<chrono::Utc>>().unwrap();
/// let due = compute_due_date(Outcome::Good, now);
/// assert_eq!(due.to_string(), "2024-01-04");
/// ```
#[must_use]
pub fn compute_due_date<Tz: TimeZone>(outcome: Outcome, now: DateTime<Tz>) -> NaiveDate {
    next_due_from(now.date_naive(), outcome)
}

/// The same policy applied to a bare calendar date.
#[must_use]
pub fn next_due_from(today: NaiveDate, outcome: Outcome) -> NaiveDate {
    today + Days::new(day_offset(outcome))
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
