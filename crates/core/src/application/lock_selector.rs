// Lock Type Selector - one lock-type identifier per job
use super::options_resolver::ResolvedConfig;
use crate::domain::constants::{LEGACY_UNIQUE_DEPRECATION, UNIQUE_KEY, UNIQUE_LOCK_KEY};
use crate::domain::job_item::{is_truthy, value_text};
use crate::domain::UniqueSetting;
use crate::port::DeprecationReporter;
use tracing::debug;

/// Select the lock-type identifier for a job
///
/// First match wins:
/// 1. worker options still say `unique: true` (legacy): report the
///    deprecation, then use the worker's `lock` key or the default lock
/// 2. an explicit identifier in the worker options' `unique` key
/// 3. an explicit identifier in the job item's `unique` key
/// 4. the default lock
///
/// A boolean at `unique` is never an identifier. The result is text because
/// it may name no registered lock; the factory rejects it in that case.
pub fn select_lock_type(resolved: &ResolvedConfig<'_>, reporter: &dyn DeprecationReporter) -> String {
    let options = resolved.worker_options();
    let default_lock = resolved.config().default_lock;

    if let Some(unique) = options.get(UNIQUE_KEY) {
        if value_text(unique) == "true" {
            reporter.deprecated(LEGACY_UNIQUE_DEPRECATION);

            let identifier = match options.get(UNIQUE_LOCK_KEY) {
                Some(lock) if is_truthy(Some(lock)) => value_text(lock),
                _ => default_lock.to_string(),
            };
            debug!(lock_type = %identifier, "Selected lock type (legacy unique: true)");
            return identifier;
        }
    }

    let from_worker = UniqueSetting::from_value(options.get(UNIQUE_KEY));
    let from_item = UniqueSetting::from_value(resolved.item().get(UNIQUE_KEY));

    let identifier = from_worker
        .explicit()
        .or_else(|| from_item.explicit())
        .map(str::to_string)
        .unwrap_or_else(|| default_lock.to_string());

    debug!(lock_type = %identifier, "Selected lock type");
    identifier
}
