// Built-in lock strategies
//
// Each strategy only binds itself to a job item; the acquire/release
// protocol against the shared store is driven by the caller.

use crate::domain::{JobItem, LockError, LockType};
use crate::port::LockStrategy;

macro_rules! bound_lock {
    ($(#[$meta:meta])* $name:ident => $lock_type:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            item: JobItem,
        }

        impl $name {
            pub fn new(item: &JobItem) -> Result<Self, LockError> {
                Ok(Self { item: item.clone() })
            }

            /// Registry constructor
            pub fn construct(item: &JobItem) -> Result<Box<dyn LockStrategy>, LockError> {
                Ok(Box::new(Self::new(item)?))
            }

            pub fn jid(&self) -> Option<&str> {
                self.item.jid()
            }

            pub fn unique_digest(&self) -> Option<&str> {
                self.item.unique_digest()
            }
        }

        impl LockStrategy for $name {
            fn lock_type(&self) -> LockType {
                $lock_type
            }

            fn item(&self) -> &JobItem {
                &self.item
            }
        }
    };
}

bound_lock!(
    /// Locked from enqueue until the job starts, then again while it runs
    UntilAndWhileExecuting => LockType::UntilAndWhileExecuting
);
bound_lock!(
    /// Locked from enqueue until the job finishes successfully
    UntilExecuted => LockType::UntilExecuted
);
bound_lock!(
    /// Locked from enqueue until the job starts
    UntilExecuting => LockType::UntilExecuting
);
bound_lock!(
    /// Locked from enqueue until the lock expires
    UntilTimeout => LockType::UntilTimeout
);
bound_lock!(
    /// Locked only while the job runs
    WhileExecuting => LockType::WhileExecuting
);
