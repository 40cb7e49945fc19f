// Lock Type Domain Model

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lock type identifier (closed set)
///
/// Selects which uniqueness-enforcement algorithm a job uses. The textual
/// form is the snake_case name used in job items and worker options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockType {
    UntilAndWhileExecuting,
    UntilExecuted,
    UntilExecuting,
    UntilTimeout,
    WhileExecuting,
}

impl LockType {
    /// Every lock type, in registry order
    pub const ALL: [LockType; 5] = [
        LockType::UntilAndWhileExecuting,
        LockType::UntilExecuted,
        LockType::UntilExecuting,
        LockType::UntilTimeout,
        LockType::WhileExecuting,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LockType::UntilAndWhileExecuting => "until_and_while_executing",
            LockType::UntilExecuted => "until_executed",
            LockType::UntilExecuting => "until_executing",
            LockType::UntilTimeout => "until_timeout",
            LockType::WhileExecuting => "while_executing",
        }
    }
}

impl std::fmt::Display for LockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text does not name a known lock type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown lock type: {0}")]
pub struct ParseLockTypeError(pub String);

impl FromStr for LockType {
    type Err = ParseLockTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LockType::ALL
            .into_iter()
            .find(|lock_type| lock_type.as_str() == s)
            .ok_or_else(|| ParseLockTypeError(s.to_string()))
    }
}
