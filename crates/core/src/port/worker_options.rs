// Worker Options Provider Port

use crate::domain::WorkerOptions;

/// Capability a worker-type descriptor may implement to declare its options
///
/// Descriptors that declare nothing are passed as `None` to the resolver;
/// absence is not an error.
pub trait WorkerOptionsProvider {
    /// Declared options, or `None` to fall back to the process-wide defaults
    fn worker_options(&self) -> Option<WorkerOptions>;
}

impl WorkerOptionsProvider for WorkerOptions {
    fn worker_options(&self) -> Option<WorkerOptions> {
        Some(self.clone())
    }
}
