use thiserror::Error;

use crate::catalog::CatalogError;

/// Errors raised when building or driving a workout session
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A session needs at least one exercise
    #[error("Session needs at least one exercise")]
    NoExercises,

    #[error("Work duration must be a positive number of seconds, got {0}")]
    InvalidWorkSeconds(i64),

    #[error("Round count must be positive, got {0}")]
    InvalidRounds(i64),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The session finished or was quit; its timer task is gone
    #[error("Session is closed")]
    Closed,
}

pub type SessionResult<T> = Result<T, SessionError>;
