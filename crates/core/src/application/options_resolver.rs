//! Options Resolver - merges job item, worker options and process defaults
//!
//! Worker options come from the first source that has them:
//! 1. the worker type's own declared options
//! 2. the process-wide default worker options
//! 3. an empty mapping

use super::config::UniqueJobsConfig;
use crate::domain::constants::{LOG_DUPLICATE_KEY, UNIQUE_KEY};
use crate::domain::{JobItem, WorkerOptions};
use crate::port::WorkerOptionsProvider;
use tracing::debug;

/// Where the resolved worker options came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsSource {
    Worker,
    GlobalDefault,
    Empty,
}

impl std::fmt::Display for OptionsSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionsSource::Worker => write!(f, "worker"),
            OptionsSource::GlobalDefault => write!(f, "global_default"),
            OptionsSource::Empty => write!(f, "empty"),
        }
    }
}

/// Pick the worker options for a job
pub fn resolve_worker_options(
    worker: Option<&dyn WorkerOptionsProvider>,
    config: &UniqueJobsConfig,
) -> (WorkerOptions, OptionsSource) {
    if let Some(options) = worker.and_then(|w| w.worker_options()) {
        return (options, OptionsSource::Worker);
    }

    if let Some(options) = &config.default_worker_options {
        return (options.clone(), OptionsSource::GlobalDefault);
    }

    (WorkerOptions::empty(), OptionsSource::Empty)
}

/// Read-only view over one job's item, its worker options and the process config
#[derive(Debug, Clone)]
pub struct ResolvedConfig<'a> {
    item: &'a JobItem,
    worker_options: WorkerOptions,
    options_source: OptionsSource,
    config: &'a UniqueJobsConfig,
}

impl<'a> ResolvedConfig<'a> {
    pub fn new(
        item: &'a JobItem,
        worker: Option<&dyn WorkerOptionsProvider>,
        config: &'a UniqueJobsConfig,
    ) -> Self {
        let (worker_options, options_source) = resolve_worker_options(worker, config);

        debug!(
            jid = item.jid().unwrap_or_default(),
            options_source = %options_source,
            "Resolved worker options"
        );

        Self {
            item,
            worker_options,
            options_source,
            config,
        }
    }

    pub fn item(&self) -> &'a JobItem {
        self.item
    }

    pub fn worker_options(&self) -> &WorkerOptions {
        &self.worker_options
    }

    pub fn options_source(&self) -> OptionsSource {
        self.options_source
    }

    pub fn config(&self) -> &'a UniqueJobsConfig {
        self.config
    }

    /// Enabled globally and requested by the job item
    pub fn unique_enabled(&self) -> bool {
        self.config.enabled && self.item.is_truthy(UNIQUE_KEY)
    }

    pub fn unique_disabled(&self) -> bool {
        !self.unique_enabled()
    }

    /// Either source asks for duplicate payloads to be logged
    pub fn log_duplicate(&self) -> bool {
        self.worker_options.is_truthy(LOG_DUPLICATE_KEY) || self.item.is_truthy(LOG_DUPLICATE_KEY)
    }
}
