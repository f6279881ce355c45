use std::path::PathBuf;
use std::sync::Arc;

use log::info;

use storage::dataset::load_entries;
use storage::json::JsonProgressRepository;
use storage::repository::ProgressRepository;
use vocab_core::time::Clock;

use crate::error::AppServicesError;
use crate::progress_service::ProgressService;
use crate::session::StudySession;

/// Startup configuration for the study app.
#[derive(Debug, Clone)]
pub struct StudyConfig {
    /// Dataset CSV path.
    pub data_path: PathBuf,
    /// Directory bare image/audio references resolve against.
    pub res_dir: String,
    /// Progress file override; `None` uses the per-user default slot.
    pub progress_path: Option<PathBuf>,
}

impl StudyConfig {
    #[must_use]
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            res_dir: "res".to_string(),
            progress_path: None,
        }
    }
}

/// Assembles the study services: dataset, progress store, and session.
pub struct AppServices {
    clock: Clock,
    res_dir: String,
    session: StudySession,
}

impl AppServices {
    /// Loads the dataset and progress store, then builds the session.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the dataset cannot be loaded or holds
    /// no entries. Progress-store corruption never fails startup; the
    /// repository absorbs it as an empty mapping.
    pub fn init(config: &StudyConfig, clock: Clock) -> Result<Self, AppServicesError> {
        let repository: Arc<dyn ProgressRepository> = match &config.progress_path {
            Some(path) => Arc::new(JsonProgressRepository::new(path.clone())),
            None => Arc::new(JsonProgressRepository::at_default_path()),
        };
        Self::init_with_repository(config, clock, repository)
    }

    /// Same as [`AppServices::init`] with a caller-provided repository.
    ///
    /// # Errors
    ///
    /// Same conditions as [`AppServices::init`].
    pub fn init_with_repository(
        config: &StudyConfig,
        clock: Clock,
        repository: Arc<dyn ProgressRepository>,
    ) -> Result<Self, AppServicesError> {
        let entries = load_entries(&config.data_path)?;
        info!(
            "loaded {} entries from {}",
            entries.len(),
            config.data_path.display()
        );

        let progress = ProgressService::load(repository)?;
        let session = StudySession::new(entries, progress)?;

        Ok(Self {
            clock,
            res_dir: config.res_dir.clone(),
            session,
        })
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn res_dir(&self) -> &str {
        &self.res_dir
    }

    #[must_use]
    pub fn session(&self) -> &StudySession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut StudySession {
        &mut self.session
    }
}
