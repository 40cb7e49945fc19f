// Deprecation Reporter Port (operator-visible warnings)

use tracing::warn;

/// Channel for non-fatal configuration deprecations
pub trait DeprecationReporter: Send + Sync {
    fn deprecated(&self, message: &str);
}

/// Logs deprecations as `WARN` events (production)
pub struct TracingDeprecationReporter;

impl DeprecationReporter for TracingDeprecationReporter {
    fn deprecated(&self, message: &str) {
        warn!(deprecation = true, "{}", message);
    }
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::Mutex;

    /// Records every deprecation message it receives
    #[derive(Default)]
    pub struct RecordingDeprecationReporter {
        messages: Mutex<Vec<String>>,
    }

    impl RecordingDeprecationReporter {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn messages(&self) -> Vec<String> {
            self.messages.lock().unwrap().clone()
        }

        pub fn count(&self) -> usize {
            self.messages.lock().unwrap().len()
        }
    }

    impl DeprecationReporter for RecordingDeprecationReporter {
        fn deprecated(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }
}
