// Lock Factory - identifier to bound lock strategy

use super::lock_registry::{LockClass, LockRegistry};
use crate::domain::JobItem;
use crate::error::{Result, UniqueJobsError};
use crate::port::LockStrategy;
use tracing::{debug, error};

/// Find the registry entry for `identifier`
///
/// # Errors
/// - `UniqueJobsError::UnknownLock` if no registered lock type has that name
pub fn lock_class(registry: &LockRegistry, identifier: &str) -> Result<LockClass> {
    registry.lookup(identifier).ok_or_else(|| {
        error!(lock_type = %identifier, "No lock implementation registered");
        UniqueJobsError::UnknownLock(identifier.to_string())
    })
}

/// Construct the strategy for `item`
///
/// Constructor failures are surfaced unchanged as `UniqueJobsError::Lock`.
pub fn build_lock(class: LockClass, item: &JobItem) -> Result<Box<dyn LockStrategy>> {
    let lock = class.construct(item)?;

    debug!(
        lock_type = %class.lock_type(),
        jid = item.jid().unwrap_or_default(),
        "Constructed lock strategy"
    );

    Ok(lock)
}
