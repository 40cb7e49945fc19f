// Domain Layer - Job items, worker options and lock types

pub mod constants;
pub mod error;
pub mod job_item;
pub mod lock_type;
pub mod unique_setting;

// Re-exports
pub use error::LockError;
pub use job_item::{JobItem, WorkerOptions};
pub use lock_type::{LockType, ParseLockTypeError};
pub use unique_setting::UniqueSetting;
