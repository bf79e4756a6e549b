//! Temporary artifact layout and clipboard retry policy

mod layout;
mod retry;

pub use layout::{ArtifactLayout, DEFAULT_EXTENSION, DEFAULT_TEMP_PREFIX};
pub use retry::{
    RetryPolicy, DEFAULT_ATTEMPTS, DEFAULT_RETRY_DELAY_MS, DEFAULT_SETTLE_DELAY_MS,
    DEFAULT_TIMEOUT_MS,
};
