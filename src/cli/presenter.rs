//! CLI presenter for output formatting

use async_trait::async_trait;
use colored::*;

use crate::application::ports::{NotificationError, NotificationIcon, Notifier};
use crate::domain::host::CommandStatus;

/// Presenter for CLI output formatting
#[derive(Debug, Clone, Copy, Default)]
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a titled message the way a dialog would show it
    pub fn titled(&self, title: &str, message: &str, icon: NotificationIcon) {
        let line = format!("{}: {}", title.bold(), message);
        match icon {
            NotificationIcon::Info => self.info(&line),
            NotificationIcon::Success => self.success(&line),
            NotificationIcon::Warning => self.warn(&line),
            NotificationIcon::Error => self.error(&line),
        }
    }

    /// Print command status for the host (stdout, machine readable)
    pub fn command_status(&self, status: CommandStatus) {
        println!("{}", format_status(status));
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }
}

/// `enabled`/`disabled`, with `hidden` appended for invisible commands
pub fn format_status(status: CommandStatus) -> String {
    let state = if status.enabled { "enabled" } else { "disabled" };
    if status.visible {
        state.to_string()
    } else {
        format!("{} hidden", state)
    }
}

/// Presents messages on the terminal.
/// The terminal stands in for the host's modal dialog.
#[async_trait]
impl Notifier for Presenter {
    async fn notify(
        &self,
        title: &str,
        message: &str,
        icon: NotificationIcon,
    ) -> Result<(), NotificationError> {
        self.titled(title, message, icon);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_formatting() {
        assert_eq!(
            format_status(CommandStatus {
                enabled: true,
                visible: true
            }),
            "enabled"
        );
        assert_eq!(
            format_status(CommandStatus {
                enabled: false,
                visible: false
            }),
            "disabled hidden"
        );
    }

    #[tokio::test]
    async fn presenter_notifier_never_fails() {
        let presenter = Presenter::new();
        assert!(presenter
            .notify("Success", "copied", NotificationIcon::Success)
            .await
            .is_ok());
    }
}
