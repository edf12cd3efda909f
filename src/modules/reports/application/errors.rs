use crate::modules::reports::core::date_filter::DateParamError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    InvalidParameters(#[from] DateParamError),

    #[error("appointment snapshot unavailable: {0}")]
    Snapshot(String),
}

impl ApplicationError {
    pub fn snapshot(error: anyhow::Error) -> Self {
        ApplicationError::Snapshot(format!("{error:#}"))
    }
}
