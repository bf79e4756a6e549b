//! Publish-file use case: temp copy plus clipboard file drop

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use thiserror::Error;
use tokio::fs;
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use crate::domain::artifact::{ArtifactLayout, RetryPolicy};

use super::ports::{ClipboardError, FileDropClipboard};

/// Errors from the publish use case
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Failed to read source file: {0}")]
    ReadSource(#[source] std::io::Error),

    #[error("Failed to create temporary copy: {0}")]
    WriteCopy(#[source] std::io::Error),

    #[error("Failed to start clipboard worker: {0}")]
    WorkerSpawn(#[source] std::io::Error),

    #[error("Clipboard write failed after {attempts} attempt(s)")]
    ClipboardFailed {
        attempts: u32,
        last_error: Option<ClipboardError>,
    },

    #[error("Clipboard worker did not finish within {0:?}")]
    TimedOut(Duration),
}

impl PublishError {
    /// Whether the failure came from the clipboard step rather than the filesystem
    pub fn is_clipboard_failure(&self) -> bool {
        matches!(self, Self::ClipboardFailed { .. } | Self::TimedOut(_))
    }
}

/// Output from the publish use case
#[derive(Debug, Clone)]
pub struct PublishOutput {
    /// Per-invocation directory holding the copy; left on disk
    pub temp_dir: PathBuf,
    /// The file now referenced by the clipboard
    pub temp_file: PathBuf,
    /// File name of the copy
    pub file_name: String,
    /// Which attempt succeeded (1-based)
    pub attempts: u32,
}

/// Copies a source file's contents to a fresh temp file and puts that
/// file on the clipboard as a one-item file-drop list.
pub struct PublishFileUseCase<C>
where
    C: FileDropClipboard + 'static,
{
    clipboard: Arc<C>,
    layout: ArtifactLayout,
    policy: RetryPolicy,
}

impl<C> PublishFileUseCase<C>
where
    C: FileDropClipboard + 'static,
{
    /// Create a new use case instance
    pub fn new(clipboard: C, layout: ArtifactLayout, policy: RetryPolicy) -> Self {
        Self {
            clipboard: Arc::new(clipboard),
            layout,
            policy,
        }
    }

    /// Execute the publish workflow for `source`.
    ///
    /// On success the temp artifact stays on disk because the clipboard
    /// references it. On clipboard failure it is removed best-effort.
    pub async fn execute(&self, source: &Path) -> Result<PublishOutput, PublishError> {
        let contents = fs::read(source).await.map_err(PublishError::ReadSource)?;

        let temp_dir = self.layout.fresh_dir();
        fs::create_dir_all(&temp_dir)
            .await
            .map_err(PublishError::WriteCopy)?;

        let file_name = self.layout.file_name_for(source);
        let temp_file = temp_dir.join(&file_name);

        if let Err(e) = fs::write(&temp_file, &contents).await {
            remove_best_effort(&temp_dir).await;
            return Err(PublishError::WriteCopy(e));
        }

        debug!(
            source = %source.display(),
            copy = %temp_file.display(),
            bytes = contents.len(),
            "temporary copy written"
        );

        match self.place_on_clipboard(temp_file.clone()).await {
            Ok(attempts) => {
                info!(
                    file = %temp_file.display(),
                    attempts,
                    backend = self.clipboard.name(),
                    "file placed on clipboard"
                );
                Ok(PublishOutput {
                    temp_dir,
                    temp_file,
                    file_name,
                    attempts,
                })
            }
            Err(err) => {
                let reason = match &err {
                    PublishError::ClipboardFailed {
                        last_error: Some(last),
                        ..
                    } => last.to_string(),
                    other => other.to_string(),
                };
                warn!(error = %reason, backend = self.clipboard.name(), "clipboard error");
                remove_best_effort(&temp_dir).await;
                Err(err)
            }
        }
    }

    /// Run the attempts on a dedicated thread and wait at most `policy.timeout`.
    ///
    /// A worker that overruns is abandoned, not cancelled.
    async fn place_on_clipboard(&self, file: PathBuf) -> Result<u32, PublishError> {
        let (tx, rx) = oneshot::channel();
        let clipboard = Arc::clone(&self.clipboard);
        let policy = self.policy;

        thread::Builder::new()
            .name("clipboard-worker".to_string())
            .spawn(move || {
                let outcome = run_attempts(clipboard.as_ref(), &[file], &policy);
                let _ = tx.send(outcome);
            })
            .map_err(PublishError::WorkerSpawn)?;

        match tokio::time::timeout(self.policy.timeout, rx).await {
            Ok(Ok(outcome)) => outcome,
            // Sender dropped without a result: the worker panicked
            Ok(Err(_)) => Err(PublishError::ClipboardFailed {
                attempts: 0,
                last_error: None,
            }),
            Err(_) => Err(PublishError::TimedOut(self.policy.timeout)),
        }
    }
}

/// Clipboard attempt loop, run on the worker thread.
///
/// Each attempt clears the clipboard, waits `settle_delay`, then sets the
/// file-drop list. Failed attempts are followed by `retry_delay` unless it
/// was the last one. Returns the 1-based number of the attempt that
/// succeeded.
pub fn run_attempts<C>(
    clipboard: &C,
    paths: &[PathBuf],
    policy: &RetryPolicy,
) -> Result<u32, PublishError>
where
    C: FileDropClipboard + ?Sized,
{
    if let Err(e) = clipboard.enter_thread_affinity() {
        return Err(PublishError::ClipboardFailed {
            attempts: 0,
            last_error: Some(e),
        });
    }

    let mut last_error = None;
    let mut succeeded = None;

    for attempt in 1..=policy.attempts {
        match attempt_once(clipboard, paths, policy.settle_delay) {
            Ok(()) => {
                succeeded = Some(attempt);
                break;
            }
            Err(e) => {
                debug!(attempt, error = %e, "clipboard attempt failed");
                last_error = Some(e);
                if attempt < policy.attempts {
                    thread::sleep(policy.retry_delay);
                }
            }
        }
    }

    clipboard.leave_thread_affinity();

    succeeded.ok_or(PublishError::ClipboardFailed {
        attempts: policy.attempts,
        last_error,
    })
}

fn attempt_once<C>(
    clipboard: &C,
    paths: &[PathBuf],
    settle_delay: Duration,
) -> Result<(), ClipboardError>
where
    C: FileDropClipboard + ?Sized,
{
    clipboard.clear()?;
    thread::sleep(settle_delay);
    clipboard.set_file_drop_list(paths)
}

async fn remove_best_effort(dir: &Path) {
    if let Err(e) = fs::remove_dir_all(dir).await {
        debug!(dir = %dir.display(), error = %e, "failed to remove temporary directory");
    }
}
