use thiserror::Error;

use crate::workflow::State;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum BackendError {
    #[cfg(feature = "sqlx")]
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
    /// Denotes custom application invariant; generally informative.
    #[error("application invariant violated: {0}")]
    AppInvariantViolation(String),
    #[error("unknown error")]
    Unknown,
}

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ValueError {
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("uninitialized value")]
    Uninitialized,
    #[error("unsupported value: {0}")]
    Unsupported(String),
}

/// Rejections produced by the post lifecycle.
///
/// An illegal source state and a failed authorship check are reported
/// through the same `TransitionNotAllowed` kind; callers wanting to
/// tell the two apart must inspect the post themselves.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TransitionError {
    #[error("unknown transition: {0}")]
    UnknownTransition(String),
    #[error("transition {transition:?} not allowed from state {state}")]
    TransitionNotAllowed {
        transition: String,
        state: State,
    },
}
