// Application Layer - Lock resolution use cases

pub mod config;
pub mod lock_factory;
pub mod lock_registry;
pub mod lock_selector;
pub mod locks;
pub mod options_resolver;
pub mod resolution;

// Re-exports
pub use config::UniqueJobsConfig;
pub use lock_registry::{LockClass, LockConstructor, LockRegistry};
pub use options_resolver::{OptionsSource, ResolvedConfig};
pub use resolution::{UniqueResolution, UniquenessService};
