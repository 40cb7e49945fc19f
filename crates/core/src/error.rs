// Central Error Type for lock resolution

use thiserror::Error;

/// Resolution error type
#[derive(Error, Debug)]
pub enum UniqueJobsError {
    /// The selected identifier has no entry in the lock registry
    #[error("No implementation for `unique: :{0}`")]
    UnknownLock(String),

    /// The lock strategy refused to bind to the job item
    #[error(transparent)]
    Lock(#[from] crate::domain::LockError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl UniqueJobsError {
    /// The unresolved identifier, for `UnknownLock`
    pub fn unknown_lock(&self) -> Option<&str> {
        match self {
            UniqueJobsError::UnknownLock(identifier) => Some(identifier),
            _ => None,
        }
    }
}

/// Result type alias using UniqueJobsError
pub type Result<T> = std::result::Result<T, UniqueJobsError>;
