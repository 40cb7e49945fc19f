// Unique Jobs Core - Lock-type resolution & Ports
// NO shared-store dependencies (Hexagonal Architecture)

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use application::{LockRegistry, UniqueJobsConfig, UniqueResolution, UniquenessService};
pub use domain::{JobItem, LockType, WorkerOptions};
pub use error::{Result, UniqueJobsError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
