#![forbid(unsafe_code)]

pub mod dataset;
pub mod json;
pub mod repository;

pub use dataset::{DatasetError, load_entries, read_entries};
pub use json::{JsonProgressRepository, default_progress_path};
pub use repository::{
    MemoryProgressRepository, ProgressRecordData, ProgressRepository, StorageError,
};
