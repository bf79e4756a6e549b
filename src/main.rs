//! CopyAsFile CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use copy_as_file::cli::{
    app::{run_copy, run_list_commands, run_status, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use copy_as_file::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Copy(args) => run_copy(args).await,
        Commands::Status(args) => run_status(args).await,
        Commands::Commands => run_list_commands(),
        Commands::Config { action } => {
            let presenter = Presenter::new();
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
