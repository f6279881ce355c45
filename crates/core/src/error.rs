use thiserror::Error;

use crate::model::OutcomeError;
use crate::model::ParseIdError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Outcome(#[from] OutcomeError),
    #[error(transparent)]
    ParseId(#[from] ParseIdError),
}
