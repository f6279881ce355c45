mod entry;
mod ids;
mod review;

pub use entry::{Entry, ResourceRef};
pub use ids::{EntryId, ParseIdError};
pub use review::{Outcome, OutcomeError, ProgressMap, ProgressRecord};
