use blogcore::error::{
    BackendError,
    TransitionError,
    ValueError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error(transparent)]
    BackendError(#[from] BackendError),
    #[error(transparent)]
    CtrlError(#[from] CtrlError),
    #[error(transparent)]
    TransitionError(#[from] TransitionError),
    #[error(transparent)]
    ValueError(#[from] ValueError),
}

#[derive(Debug, PartialEq, Error)]
pub enum CtrlError {
    /// The kind of record and the id that was not found
    #[error("{0} not found: {1}")]
    NotFound(&'static str, i64),
    /// A field failed validation
    #[error("invalid {0}: {1}")]
    Invalid(&'static str, String),
    /// The stored post state changed between load and save
    #[error("post {0} was modified concurrently")]
    Conflict(i64),
}
