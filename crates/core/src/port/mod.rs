// Port Layer - Interfaces for external collaborators

pub mod deprecation_reporter;
pub mod lock_strategy;
pub mod worker_options;

// Re-exports
pub use deprecation_reporter::{DeprecationReporter, TracingDeprecationReporter};
pub use lock_strategy::LockStrategy;
pub use worker_options::WorkerOptionsProvider;
