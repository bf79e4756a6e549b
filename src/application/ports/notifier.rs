//! Notification port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::message::{MessageKind, UserMessage};

/// Notification errors
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("Failed to show notification: {0}")]
    SendFailed(String),
}

/// Notification icon types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationIcon {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationIcon {
    /// Get the freedesktop icon name
    pub const fn icon_name(&self) -> &'static str {
        match self {
            Self::Info => "dialog-information",
            Self::Success => "dialog-ok",
            Self::Warning => "dialog-warning",
            Self::Error => "dialog-error",
        }
    }
}

impl From<MessageKind> for NotificationIcon {
    fn from(kind: MessageKind) -> Self {
        match kind {
            MessageKind::Info => Self::Info,
            MessageKind::Success => Self::Success,
            MessageKind::Warning => Self::Warning,
            MessageKind::Error => Self::Error,
        }
    }
}

/// Port for presenting a message to the user.
///
/// Returns once the message has been handed to the user; the host
/// treats this as a blocking acknowledgement.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Show a titled message.
    ///
    /// # Arguments
    /// * `title` - The message title
    /// * `message` - The message body
    /// * `icon` - The icon to display
    async fn notify(
        &self,
        title: &str,
        message: &str,
        icon: NotificationIcon,
    ) -> Result<(), NotificationError>;

    /// Show a [`UserMessage`]
    async fn show(&self, message: &UserMessage) -> Result<(), NotificationError> {
        self.notify(&message.title, &message.body, message.kind.into())
            .await
    }
}

/// Blanket implementation for boxed notifier types
#[async_trait]
impl Notifier for Box<dyn Notifier> {
    async fn notify(
        &self,
        title: &str,
        message: &str,
        icon: NotificationIcon,
    ) -> Result<(), NotificationError> {
        self.as_ref().notify(title, message, icon).await
    }
}
