// Recognized keys and messages (ADR: No magic values)

/// Lock-type identifier, or the legacy boolean at worker level
pub const UNIQUE_KEY: &str = "unique";

/// Explicit lock-type identifier, consulted only by the legacy `unique: true` branch
pub const UNIQUE_LOCK_KEY: &str = "lock";

/// Whether duplicate payloads should be logged
pub const LOG_DUPLICATE_KEY: &str = "log_duplicate_payload";

/// Job id carried by every job item
pub const JID_KEY: &str = "jid";

/// Digest identifying the uniqueness scope of a job
pub const UNIQUE_DIGEST_KEY: &str = "unique_digest";

/// Emitted when worker options still declare `unique: true`
pub const LEGACY_UNIQUE_DEPRECATION: &str = "unique: true is no longer valid. \
Please set it to the type of lock required like: `unique: :until_executed`";
