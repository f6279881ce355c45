mod scripts;
mod state;
mod study;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use state::{view_state_from_resource, ViewError, ViewState};
pub use study::StudyView;
