//! Retry policy value object for the clipboard write

use std::time::Duration;

/// Default number of clipboard-set attempts
pub const DEFAULT_ATTEMPTS: u32 = 3;

/// Pause between failed attempts
pub const DEFAULT_RETRY_DELAY_MS: u64 = 50;

/// Pause between clearing the clipboard and setting new content
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 10;

/// Upper bound on how long the caller waits for the clipboard worker
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// How the clipboard write is retried and bounded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub retry_delay: Duration,
    pub settle_delay: Duration,
    pub timeout: Duration,
}

impl RetryPolicy {
    /// Build a policy from millisecond values. Zero attempts is raised to one.
    pub fn from_millis(
        attempts: u32,
        retry_delay_ms: u64,
        settle_delay_ms: u64,
        timeout_ms: u64,
    ) -> Self {
        Self {
            attempts: attempts.max(1),
            retry_delay: Duration::from_millis(retry_delay_ms),
            settle_delay: Duration::from_millis(settle_delay_ms),
            timeout: Duration::from_millis(timeout_ms),
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_millis(
            DEFAULT_ATTEMPTS,
            DEFAULT_RETRY_DELAY_MS,
            DEFAULT_SETTLE_DELAY_MS,
            DEFAULT_TIMEOUT_MS,
        )
    }
}
