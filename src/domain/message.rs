//! User-facing messages

/// Severity of a message shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
}

/// A titled message presented once per invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMessage {
    pub title: String,
    pub body: String,
    pub kind: MessageKind,
}

impl UserMessage {
    fn new(title: &str, body: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            title: title.to_string(),
            body: body.into(),
            kind,
        }
    }

    /// Nothing resolvable to copy
    pub fn no_file_selected() -> Self {
        Self::new(
            "Warning",
            "Please select a file or keep a file open in the editor.",
            MessageKind::Warning,
        )
    }

    /// Clipboard write failed after all attempts
    pub fn copy_failed() -> Self {
        Self::new(
            "Error",
            "Copying the file failed. Please try again.",
            MessageKind::Error,
        )
    }

    /// The temp copy is on the clipboard
    pub fn copy_succeeded(file_name: &str) -> Self {
        Self::new(
            "Success",
            format!("'{file_name}' copied to the clipboard. You can paste it now."),
            MessageKind::Success,
        )
    }

    /// Anything else that went wrong, surfaced verbatim
    pub fn unexpected(error: &dyn std::error::Error) -> Self {
        Self::new(
            "Error",
            format!("An error occurred: {}", error),
            MessageKind::Error,
        )
    }

    pub fn is_success(&self) -> bool {
        self.kind == MessageKind::Success
    }
}
