// Lock Strategy Port
// The acquire/release protocol against the shared store lives behind this
// trait and is not part of lock resolution.

use crate::domain::{JobItem, LockType};

/// A lock strategy bound to one job item
pub trait LockStrategy: std::fmt::Debug + Send + Sync {
    /// Algorithm implemented by this strategy
    fn lock_type(&self) -> LockType;

    /// Job item the strategy was constructed for
    fn item(&self) -> &JobItem;
}
