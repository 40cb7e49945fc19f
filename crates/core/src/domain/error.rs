// Domain Error Types

use thiserror::Error;

/// Failure raised by a lock strategy while binding itself to a job item
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LockError {
    #[error("Missing job item key: {0}")]
    MissingKey(String),

    #[error("Invalid job item: {0}")]
    InvalidItem(String),
}
