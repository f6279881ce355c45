#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod progress_service;
pub mod session;

pub use vocab_core::Clock;

pub use app_services::{AppServices, StudyConfig};
pub use error::{AppServicesError, DatasetError, ProgressError, SessionError};
pub use progress_service::ProgressService;
pub use session::StudySession;
