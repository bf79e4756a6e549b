//! Desktop notification adapter using notify-rust
//!
//! Works on Windows, macOS, and Linux.

use async_trait::async_trait;
use notify_rust::{Notification, Timeout};

use crate::application::ports::{NotificationError, NotificationIcon, Notifier};

/// How long success and info messages stay on screen
const SHORT_TIMEOUT_MS: u32 = 4000;

/// Desktop notifier using notify-rust.
///
/// Errors and warnings stay until dismissed, mirroring a modal dialog;
/// everything else expires.
pub struct NotifyRustNotifier {
    app_name: String,
}

impl NotifyRustNotifier {
    /// Create a new notify-rust notifier
    pub fn new() -> Self {
        Self::with_app_name("CopyAsFile")
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    fn timeout_for(icon: NotificationIcon) -> Timeout {
        match icon {
            NotificationIcon::Warning | NotificationIcon::Error => Timeout::Never,
            NotificationIcon::Info | NotificationIcon::Success => {
                Timeout::Milliseconds(SHORT_TIMEOUT_MS)
            }
        }
    }
}

impl Default for NotifyRustNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NotifyRustNotifier {
    async fn notify(
        &self,
        title: &str,
        message: &str,
        icon: NotificationIcon,
    ) -> Result<(), NotificationError> {
        let mut notification = Notification::new();
        notification
            .appname(&self.app_name)
            .summary(title)
            .body(message)
            .icon(icon.icon_name())
            .timeout(Self::timeout_for(icon));

        // Showing talks to the notification daemon synchronously
        tokio::task::spawn_blocking(move || {
            notification
                .show()
                .map(|_| ())
                .map_err(|e| NotificationError::SendFailed(e.to_string()))
        })
        .await
        .map_err(|e| NotificationError::SendFailed(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifier_with_custom_app_name() {
        let notifier = NotifyRustNotifier::with_app_name("TestApp");
        assert_eq!(notifier.app_name, "TestApp");
    }

    #[test]
    fn notifier_default_app_name() {
        assert_eq!(NotifyRustNotifier::default().app_name, "CopyAsFile");
    }

    #[test]
    fn failures_do_not_expire() {
        assert_eq!(
            NotifyRustNotifier::timeout_for(NotificationIcon::Error),
            Timeout::Never
        );
        assert_eq!(
            NotifyRustNotifier::timeout_for(NotificationIcon::Success),
            Timeout::Milliseconds(SHORT_TIMEOUT_MS)
        );
    }
}
