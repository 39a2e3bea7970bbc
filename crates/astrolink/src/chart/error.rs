use crate::ephemeris::{Body, EphemerisError};
use thiserror::Error;

/// Why a chart could not be computed. No partial chart is ever returned.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    #[error("Ephemeris returned no position for {body}")]
    MissingBody { body: Body },
    #[error("Ephemeris did not answer within {seconds} s")]
    Timeout { seconds: f64 },
    #[error("Ephemeris task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ChartError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        ChartError::InvalidInput {
            message: message.into(),
        }
    }
}
