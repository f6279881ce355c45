#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod scheduler;
pub mod time;

pub use error::Error;
pub use model::{Entry, EntryId, Outcome, OutcomeError, ProgressMap, ProgressRecord, ResourceRef};
pub use scheduler::{compute_due_date, day_offset};
pub use time::Clock;
