// Process-wide uniqueness configuration

use crate::domain::{LockType, WorkerOptions};
use crate::error::{Result, UniqueJobsError};

/// Environment variable toggling uniqueness enforcement
pub const ENV_ENABLED: &str = "UNIQUE_JOBS_ENABLED";

/// Environment variable naming the default lock type
pub const ENV_DEFAULT_LOCK: &str = "UNIQUE_JOBS_DEFAULT_LOCK";

/// Environment variable holding default worker options (JSON object)
pub const ENV_DEFAULT_WORKER_OPTIONS: &str = "UNIQUE_JOBS_DEFAULT_WORKER_OPTIONS";

/// Lock type used when neither the worker nor the job names one
pub const DEFAULT_LOCK_TYPE: LockType = LockType::WhileExecuting;

/// Uniqueness configuration, fixed for the lifetime of the process
///
/// Built once at startup and handed to every resolution; nothing reads it
/// from a global.
#[derive(Debug, Clone, PartialEq)]
pub struct UniqueJobsConfig {
    /// Master switch for uniqueness enforcement
    pub enabled: bool,

    /// Lock type used when no explicit one is configured
    pub default_lock: LockType,

    /// Fallback for worker types that declare no options
    pub default_worker_options: Option<WorkerOptions>,
}

impl Default for UniqueJobsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            default_lock: DEFAULT_LOCK_TYPE,
            default_worker_options: None,
        }
    }
}

impl UniqueJobsConfig {
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_default_lock(mut self, default_lock: LockType) -> Self {
        self.default_lock = default_lock;
        self
    }

    pub fn with_default_worker_options(mut self, options: WorkerOptions) -> Self {
        self.default_worker_options = Some(options);
        self
    }

    /// Load from `UNIQUE_JOBS_*` environment variables, defaulting what is unset
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (same keys as [`from_env`](Self::from_env))
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_ENABLED) {
            config.enabled = parse_bool(&raw).ok_or_else(|| {
                UniqueJobsError::Config(format!("{}: expected a boolean, got {:?}", ENV_ENABLED, raw))
            })?;
        }

        if let Some(raw) = lookup(ENV_DEFAULT_LOCK) {
            config.default_lock = raw.trim().parse::<LockType>().map_err(|e| {
                UniqueJobsError::Config(format!("{}: {}", ENV_DEFAULT_LOCK, e))
            })?;
        }

        if let Some(raw) = lookup(ENV_DEFAULT_WORKER_OPTIONS) {
            let value: serde_json::Value = serde_json::from_str(&raw).map_err(|e| {
                UniqueJobsError::Config(format!("{}: {}", ENV_DEFAULT_WORKER_OPTIONS, e))
            })?;
            let options = WorkerOptions::from_value(value).ok_or_else(|| {
                UniqueJobsError::Config(format!("{}: expected a JSON object", ENV_DEFAULT_WORKER_OPTIONS))
            })?;
            config.default_worker_options = Some(options);
        }

        Ok(config)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
