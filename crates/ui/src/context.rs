use services::{Clock, StudyConfig};

/// Shared state handed to every view by the composition root (`crates/app`
/// in production, the test harness in smoke tests).
///
/// The study view owns its services; the context only carries what it needs
/// to build them: where the data lives and which clock to stamp reviews with.
#[derive(Clone)]
pub struct AppContext {
    config: StudyConfig,
    clock: Clock,
}

impl AppContext {
    #[must_use]
    pub fn new(config: StudyConfig, clock: Clock) -> Self {
        Self { config, clock }
    }

    #[must_use]
    pub fn config(&self) -> &StudyConfig {
        &self.config
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }
}
