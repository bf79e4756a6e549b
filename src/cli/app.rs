//! App runners for the copy and status commands

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::ports::{ConfigStore, HostError, Notifier};
use crate::application::{CommandRegistry, CopyFileCommand, PublishFileUseCase};
use crate::domain::clipboard::ClipboardBackend;
use crate::domain::config::AppConfig;
use crate::domain::host::{COMMAND_SET_GUID, PACKAGE_GUID};
use crate::domain::message::UserMessage;
use crate::infrastructure::{
    create_clipboard, FanOutNotifier, JsonContextFile, NotifyRustNotifier, StaticHost,
    XdgConfigStore,
};

use super::args::{CopyArgs, SelectionArgs, StatusArgs};
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variable overriding the configured backend
pub const BACKEND_ENV: &str = "COPY_AS_FILE_BACKEND";

/// Run the copy command for the handed-over selection
pub async fn run_copy(args: CopyArgs) -> ExitCode {
    let presenter = Presenter::new();

    let cli_config = AppConfig {
        backend: args.backend.clone(),
        notify: if args.notify { Some(true) } else { None },
        ..Default::default()
    };
    let config = load_merged_config(cli_config).await;

    if let Some(raw) = config.backend.as_deref() {
        if let Err(e) = raw.parse::<ClipboardBackend>() {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    }

    let notifier = notifier_for(&config, presenter);

    let Some(host) = host_or_report(&args.selection, &notifier).await else {
        return ExitCode::from(EXIT_ERROR);
    };

    let registry = build_registry(&config, notifier);

    match registry.execute(args.selection.command_id, &host).await {
        Some(message) if message.is_success() => ExitCode::from(EXIT_SUCCESS),
        Some(_) => ExitCode::from(EXIT_ERROR),
        None => {
            presenter.error(&format!(
                "No handler registered for command {}",
                args.selection.command_id
            ));
            ExitCode::from(EXIT_USAGE_ERROR)
        }
    }
}

/// Report enabled/disabled for the handed-over selection
pub async fn run_status(args: StatusArgs) -> ExitCode {
    let presenter = Presenter::new();
    let config = load_merged_config(AppConfig::empty()).await;

    let host = match build_host(&args.selection).await {
        Ok(host) => host,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let registry = build_registry(&config, presenter);
    let status = registry.query_status(args.selection.command_id, &host);
    presenter.command_status(status);

    if status.enabled {
        ExitCode::from(EXIT_SUCCESS)
    } else {
        ExitCode::from(EXIT_ERROR)
    }
}

/// List the registered command slots
pub fn run_list_commands() -> ExitCode {
    let presenter = Presenter::new();
    let config = AppConfig::defaults();
    let registry = build_registry(&config, presenter);

    presenter.key_value("package", PACKAGE_GUID);
    for id in registry.ids() {
        presenter.key_value(
            id.as_str(),
            &format!("{}:0x{:04X}", COMMAND_SET_GUID, id.id()),
        );
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Command registry with the copy command bound to every slot
pub fn build_registry<N>(config: &AppConfig, notifier: N) -> CommandRegistry
where
    N: Notifier + 'static,
{
    let clipboard = create_clipboard(config.backend_or_default());
    debug!(backend = clipboard.name(), "clipboard backend selected");

    let publisher = PublishFileUseCase::new(
        clipboard,
        config.artifact_layout(),
        config.retry_policy(),
    );

    CommandRegistry::with_all_commands(Arc::new(CopyFileCommand::new(publisher, notifier)))
}

/// Build the host, presenting a load failure through `notifier`
async fn host_or_report(
    selection: &SelectionArgs,
    notifier: &impl Notifier,
) -> Option<StaticHost> {
    match build_host(selection).await {
        Ok(host) => Some(host),
        Err(e) => {
            if let Err(e) = notifier.show(&UserMessage::unexpected(&e)).await {
                warn!(error = %e, "failed to present message");
            }
            None
        }
    }
}

/// Terminal output, plus desktop notifications when enabled
fn notifier_for(config: &AppConfig, presenter: Presenter) -> FanOutNotifier {
    let notifier = FanOutNotifier::new().with(presenter);
    if config.notify_or_default() {
        notifier.with(NotifyRustNotifier::new())
    } else {
        notifier
    }
}

/// Host snapshot from the context file (if any) overlaid with CLI arguments
pub async fn build_host(selection: &SelectionArgs) -> Result<StaticHost, HostError> {
    let base = match &selection.context {
        Some(path) => JsonContextFile::new(path).load().await?,
        None => StaticHost::default(),
    };

    let cli = StaticHost::from_paths(
        selection.selected_paths(),
        selection.active_document.clone(),
    );

    Ok(base.overlay(cli))
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|e| {
        debug!(error = %e, "ignoring unreadable config file");
        AppConfig::empty()
    });

    let env_config = AppConfig {
        backend: env::var(BACKEND_ENV).ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}
