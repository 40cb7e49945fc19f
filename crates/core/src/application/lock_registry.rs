// Lock Registry - lock type to strategy constructor

use super::locks::{UntilAndWhileExecuting, UntilExecuted, UntilExecuting, UntilTimeout, WhileExecuting};
use crate::domain::{JobItem, LockError, LockType};
use crate::port::LockStrategy;
use std::collections::BTreeMap;

/// Builds a lock strategy bound to a job item
pub type LockConstructor = fn(&JobItem) -> Result<Box<dyn LockStrategy>, LockError>;

/// Registry entry: a lock type and the constructor implementing it
#[derive(Clone, Copy)]
pub struct LockClass {
    lock_type: LockType,
    constructor: LockConstructor,
}

impl LockClass {
    pub fn new(lock_type: LockType, constructor: LockConstructor) -> Self {
        Self {
            lock_type,
            constructor,
        }
    }

    pub fn lock_type(&self) -> LockType {
        self.lock_type
    }

    /// Construct a strategy for `item`; constructor errors are returned as-is
    pub fn construct(&self, item: &JobItem) -> Result<Box<dyn LockStrategy>, LockError> {
        (self.constructor)(item)
    }
}

impl std::fmt::Debug for LockClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LockClass")
            .field("lock_type", &self.lock_type)
            .finish_non_exhaustive()
    }
}

/// Immutable mapping from lock type to strategy constructor
///
/// Built once at process start and shared read-only (wrap in `Arc`). Keys
/// are restricted to the closed [`LockType`] set.
#[derive(Debug, Clone)]
pub struct LockRegistry {
    entries: BTreeMap<LockType, LockClass>,
}

impl LockRegistry {
    /// The five built-in strategies
    pub fn standard() -> Self {
        Self::builder()
            .register(LockType::UntilAndWhileExecuting, UntilAndWhileExecuting::construct)
            .register(LockType::UntilExecuted, UntilExecuted::construct)
            .register(LockType::UntilExecuting, UntilExecuting::construct)
            .register(LockType::UntilTimeout, UntilTimeout::construct)
            .register(LockType::WhileExecuting, WhileExecuting::construct)
            .build()
    }

    /// Start from an empty registry, e.g. to plug in store-backed strategies
    pub fn builder() -> LockRegistryBuilder {
        LockRegistryBuilder {
            entries: BTreeMap::new(),
        }
    }

    pub fn get(&self, lock_type: LockType) -> Option<LockClass> {
        self.entries.get(&lock_type).copied()
    }

    /// Look up by identifier text; `None` for unknown text or a missing entry
    pub fn lookup(&self, identifier: &str) -> Option<LockClass> {
        identifier
            .parse::<LockType>()
            .ok()
            .and_then(|lock_type| self.get(lock_type))
    }

    pub fn lock_types(&self) -> impl Iterator<Item = LockType> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builder for [`LockRegistry`]; the registry is frozen once built
pub struct LockRegistryBuilder {
    entries: BTreeMap<LockType, LockClass>,
}

impl LockRegistryBuilder {
    /// Register (or replace) the constructor for `lock_type`
    pub fn register(mut self, lock_type: LockType, constructor: LockConstructor) -> Self {
        self.entries
            .insert(lock_type, LockClass::new(lock_type, constructor));
        self
    }

    pub fn build(self) -> LockRegistry {
        LockRegistry {
            entries: self.entries,
        }
    }
}
