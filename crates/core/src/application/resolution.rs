//! Uniqueness resolution for a single job
//!
//! `UniquenessService` holds the process-wide pieces (config, lock registry,
//! deprecation channel) and hands out one `UniqueResolution` per job. A
//! resolution caches everything it computes and must not outlive or be
//! shared beyond that job.

use super::config::UniqueJobsConfig;
use super::lock_factory;
use super::lock_registry::{LockClass, LockRegistry};
use super::lock_selector::select_lock_type;
use super::options_resolver::{OptionsSource, ResolvedConfig};
use crate::domain::{JobItem, WorkerOptions};
use crate::error::Result;
use crate::port::{DeprecationReporter, LockStrategy, TracingDeprecationReporter, WorkerOptionsProvider};
use std::cell::OnceCell;
use std::sync::Arc;

/// Entry point shared across workers
#[derive(Clone)]
pub struct UniquenessService {
    config: Arc<UniqueJobsConfig>,
    registry: Arc<LockRegistry>,
    reporter: Arc<dyn DeprecationReporter>,
}

impl UniquenessService {
    pub fn new(
        config: Arc<UniqueJobsConfig>,
        registry: Arc<LockRegistry>,
        reporter: Arc<dyn DeprecationReporter>,
    ) -> Self {
        Self {
            config,
            registry,
            reporter,
        }
    }

    /// Standard lock registry, deprecations logged through `tracing`
    pub fn with_config(config: UniqueJobsConfig) -> Self {
        Self::new(
            Arc::new(config),
            Arc::new(LockRegistry::standard()),
            Arc::new(TracingDeprecationReporter),
        )
    }

    pub fn registry(&self) -> &LockRegistry {
        &self.registry
    }

    /// Start resolving `item`; `worker` is the job's worker type, if it declares options
    pub fn resolve<'a>(
        &'a self,
        item: &'a JobItem,
        worker: Option<&'a dyn WorkerOptionsProvider>,
    ) -> UniqueResolution<'a> {
        UniqueResolution::new(
            item,
            worker,
            &self.config,
            &self.registry,
            self.reporter.as_ref(),
        )
    }
}

/// Lock resolution for one job, computed lazily and cached
pub struct UniqueResolution<'a> {
    item: &'a JobItem,
    worker: Option<&'a dyn WorkerOptionsProvider>,
    config: &'a UniqueJobsConfig,
    registry: &'a LockRegistry,
    reporter: &'a dyn DeprecationReporter,

    resolved: OnceCell<ResolvedConfig<'a>>,
    unique_lock: OnceCell<String>,
    lock_class: OnceCell<LockClass>,
    lock: OnceCell<Box<dyn LockStrategy>>,
}

impl<'a> UniqueResolution<'a> {
    pub fn new(
        item: &'a JobItem,
        worker: Option<&'a dyn WorkerOptionsProvider>,
        config: &'a UniqueJobsConfig,
        registry: &'a LockRegistry,
        reporter: &'a dyn DeprecationReporter,
    ) -> Self {
        Self {
            item,
            worker,
            config,
            registry,
            reporter,
            resolved: OnceCell::new(),
            unique_lock: OnceCell::new(),
            lock_class: OnceCell::new(),
            lock: OnceCell::new(),
        }
    }

    fn resolved(&self) -> &ResolvedConfig<'a> {
        self.resolved
            .get_or_init(|| ResolvedConfig::new(self.item, self.worker, self.config))
    }

    pub fn worker_options(&self) -> &WorkerOptions {
        self.resolved().worker_options()
    }

    pub fn options_source(&self) -> OptionsSource {
        self.resolved().options_source()
    }

    pub fn unique_enabled(&self) -> bool {
        self.resolved().unique_enabled()
    }

    pub fn unique_disabled(&self) -> bool {
        self.resolved().unique_disabled()
    }

    pub fn log_duplicate_payload(&self) -> bool {
        self.resolved().log_duplicate()
    }

    /// Selected lock-type identifier (may name no registered lock)
    pub fn unique_lock(&self) -> &str {
        self.unique_lock
            .get_or_init(|| select_lock_type(self.resolved(), self.reporter))
    }

    /// Registry entry for the selected lock type
    ///
    /// # Errors
    /// - `UniqueJobsError::UnknownLock` if the selected identifier is not registered
    pub fn lock_class(&self) -> Result<LockClass> {
        if let Some(class) = self.lock_class.get() {
            return Ok(*class);
        }

        let class = lock_factory::lock_class(self.registry, self.unique_lock())?;
        Ok(*self.lock_class.get_or_init(|| class))
    }

    /// Lock strategy bound to this job; constructed on first call only
    ///
    /// # Errors
    /// - `UniqueJobsError::UnknownLock` if the selected identifier is not registered
    /// - `UniqueJobsError::Lock` if the strategy rejects the job item
    pub fn lock(&self) -> Result<&dyn LockStrategy> {
        if let Some(lock) = self.lock.get() {
            return Ok(lock.as_ref());
        }

        let lock = lock_factory::build_lock(self.lock_class()?, self.item)?;
        Ok(self.lock.get_or_init(|| lock).as_ref())
    }
}

impl std::fmt::Debug for UniqueResolution<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UniqueResolution")
            .field("item", &self.item)
            .field("resolved", &self.resolved.get())
            .field("unique_lock", &self.unique_lock.get())
            .field("lock", &self.lock.get())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LockError, LockType};
    use crate::port::deprecation_reporter::mocks::RecordingDeprecationReporter;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn service(config: UniqueJobsConfig) -> (UniquenessService, Arc<RecordingDeprecationReporter>) {
        let reporter = Arc::new(RecordingDeprecationReporter::new());
        let service = UniquenessService::new(
            Arc::new(config),
            Arc::new(LockRegistry::standard()),
            reporter.clone(),
        );
        (service, reporter)
    }

    fn item(value: serde_json::Value) -> JobItem {
        JobItem::from_value(value).unwrap()
    }

    fn options(value: serde_json::Value) -> WorkerOptions {
        WorkerOptions::from_value(value).unwrap()
    }

    #[test]
    fn test_gate_and_selection() {
        let (service, _) = service(UniqueJobsConfig::default());
        let job = item(json!({"unique": "until_executing"}));
        let worker = options(json!({}));

        let resolution = service.resolve(&job, Some(&worker));

        assert!(resolution.unique_enabled());
        assert!(!resolution.unique_disabled());
        assert!(!resolution.log_duplicate_payload());
        assert_eq!(resolution.unique_lock(), "until_executing");
        assert_eq!(resolution.lock().unwrap().lock_type(), LockType::UntilExecuting);
    }

    #[test]
    fn test_disabled_globally() {
        let (service, _) = service(UniqueJobsConfig::default().with_enabled(false));
        let job = item(json!({"unique": "until_executed", "log_duplicate_payload": true}));

        let resolution = service.resolve(&job, None);

        assert!(resolution.unique_disabled());
        assert!(resolution.log_duplicate_payload());
    }

    #[test]
    fn test_worker_lock_class() {
        let (service, _) = service(UniqueJobsConfig::default());
        let job = item(json!({}));
        let worker = options(json!({"unique": "until_executed"}));

        let resolution = service.resolve(&job, Some(&worker));

        assert_eq!(resolution.lock_class().unwrap().lock_type(), LockType::UntilExecuted);
        assert_eq!(resolution.options_source(), OptionsSource::Worker);
    }

    #[test]
    fn test_legacy_warning_emitted_once_per_resolution() {
        let (service, reporter) = service(UniqueJobsConfig::default());
        let job = item(json!({"unique": true}));
        let worker = options(json!({"unique": true}));

        let resolution = service.resolve(&job, Some(&worker));
        assert_eq!(resolution.unique_lock(), "while_executing");
        assert_eq!(resolution.unique_lock(), "while_executing");
        resolution.lock().unwrap();

        assert_eq!(reporter.count(), 1);
        assert!(reporter.messages()[0].contains("no longer valid"));
    }

    #[test]
    fn test_lock_is_memoized() {
        let (service, _) = service(UniqueJobsConfig::default());
        let job = item(json!({"unique": "until_timeout", "jid": "jid-1"}));

        let resolution = service.resolve(&job, None);
        let first = resolution.lock().unwrap();
        let second = resolution.lock().unwrap();

        assert!(std::ptr::addr_eq(first, second));
        assert_eq!(first.item().jid(), Some("jid-1"));
    }

    static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

    fn counting(item: &JobItem) -> std::result::Result<Box<dyn LockStrategy>, LockError> {
        CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
        crate::application::locks::UntilExecuted::construct(item)
    }

    #[test]
    fn test_lock_constructed_once() {
        let registry = LockRegistry::builder()
            .register(LockType::UntilExecuted, counting)
            .build();
        let service = UniquenessService::new(
            Arc::new(UniqueJobsConfig::default()),
            Arc::new(registry),
            Arc::new(RecordingDeprecationReporter::new()),
        );
        let job = item(json!({"unique": "until_executed"}));

        let resolution = service.resolve(&job, None);
        resolution.lock().unwrap();
        resolution.lock().unwrap();

        assert_eq!(CONSTRUCTIONS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unknown_lock_surfaces_from_lock() {
        let (service, _) = service(UniqueJobsConfig::default());
        let job = item(json!({"unique": "bogus_lock"}));

        let resolution = service.resolve(&job, None);
        let err = resolution.lock().unwrap_err();

        assert_eq!(err.unknown_lock(), Some("bogus_lock"));
        assert!(resolution.lock_class().is_err());
    }

    #[test]
    fn test_global_default_worker_options() {
        let config = UniqueJobsConfig::default()
            .with_default_worker_options(options(json!({"unique": "until_and_while_executing"})));
        let (service, _) = service(config);
        let job = item(json!({"unique": "until_executed"}));

        let resolution = service.resolve(&job, None);

        assert_eq!(resolution.options_source(), OptionsSource::GlobalDefault);
        assert_eq!(resolution.unique_lock(), "until_and_while_executing");
    }
}
