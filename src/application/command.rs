//! Host command registry and the copy-as-file command

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::host::{CommandId, CommandStatus, ALL_COMMANDS};
use crate::domain::message::UserMessage;

use super::ports::{FileDropClipboard, HostContext, Notifier};
use super::publish::PublishFileUseCase;
use super::resolve::{resolve_existing_file, resolve_source_path};

/// A host-invokable action
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Decide menu state for the current host context
    fn query_status(&self, host: &dyn HostContext) -> CommandStatus;

    /// Run the action and return the message that was presented
    async fn execute(&self, host: &dyn HostContext) -> UserMessage;
}

/// Process-scoped mapping from command identifiers to handlers.
///
/// Built once at startup and dropped with the host session.
#[derive(Default)]
pub struct CommandRegistry {
    handlers: BTreeMap<CommandId, Arc<dyn CommandHandler>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with `handler` bound to every command slot
    pub fn with_all_commands(handler: Arc<dyn CommandHandler>) -> Self {
        let mut registry = Self::new();
        for id in ALL_COMMANDS {
            registry.register(*id, Arc::clone(&handler));
        }
        registry
    }

    /// Bind `handler` to `id`, replacing any previous binding
    pub fn register(&mut self, id: CommandId, handler: Arc<dyn CommandHandler>) {
        self.handlers.insert(id, handler);
    }

    pub fn lookup(&self, id: CommandId) -> Option<&Arc<dyn CommandHandler>> {
        self.handlers.get(&id)
    }

    /// Registered identifiers in ascending order
    pub fn ids(&self) -> impl Iterator<Item = CommandId> + '_ {
        self.handlers.keys().copied()
    }

    /// Menu state for `id`; unregistered commands are hidden and disabled
    pub fn query_status(&self, id: CommandId, host: &dyn HostContext) -> CommandStatus {
        match self.lookup(id) {
            Some(handler) => handler.query_status(host),
            None => CommandStatus {
                enabled: false,
                visible: false,
            },
        }
    }

    /// Execute `id`, or `None` if nothing is registered for it
    pub async fn execute(&self, id: CommandId, host: &dyn HostContext) -> Option<UserMessage> {
        match self.lookup(id) {
            Some(handler) => Some(handler.execute(host).await),
            None => None,
        }
    }
}

/// Copies the resolved source file to the clipboard as a file drop
pub struct CopyFileCommand<C, N>
where
    C: FileDropClipboard + 'static,
    N: Notifier,
{
    publisher: PublishFileUseCase<C>,
    notifier: N,
}

impl<C, N> CopyFileCommand<C, N>
where
    C: FileDropClipboard + 'static,
    N: Notifier,
{
    pub fn new(publisher: PublishFileUseCase<C>, notifier: N) -> Self {
        Self {
            publisher,
            notifier,
        }
    }

    async fn run(&self, host: &dyn HostContext) -> UserMessage {
        let Some(source) = resolve_source_path(host).filter(|p| p.is_file()) else {
            return UserMessage::no_file_selected();
        };

        debug!(source = %source.display(), "copying file as drop");

        match self.publisher.execute(&source).await {
            Ok(output) => UserMessage::copy_succeeded(&output.file_name),
            Err(e) if e.is_clipboard_failure() => UserMessage::copy_failed(),
            Err(e) => UserMessage::unexpected(&e),
        }
    }
}

#[async_trait]
impl<C, N> CommandHandler for CopyFileCommand<C, N>
where
    C: FileDropClipboard + 'static,
    N: Notifier,
{
    fn query_status(&self, host: &dyn HostContext) -> CommandStatus {
        CommandStatus {
            enabled: resolve_existing_file(host).is_some(),
            visible: true,
        }
    }

    async fn execute(&self, host: &dyn HostContext) -> UserMessage {
        let message = self.run(host).await;

        if let Err(e) = self.notifier.show(&message).await {
            warn!(error = %e, "failed to present message");
        }

        message
    }
}
