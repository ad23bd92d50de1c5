pub mod types;
pub mod commands;
pub mod logging;

use clap::Parser;
use std::path::PathBuf;

use crate::config;
use crate::utils::error::BoxResult;

/// Run the command-line interface, returning the process exit code
pub async fn run() -> i32 {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    match dispatch(&cli).await {
        Ok(()) => 0,
        Err(e) => {
            log::error!("{}", e);
            1
        }
    }
}

async fn dispatch(cli: &types::Cli) -> BoxResult<()> {
    let source = cli.source.clone().unwrap_or_else(|| PathBuf::from("./"));
    let config = config::load_config(&source, cli.config.clone())?;

    match &cli.command {
        types::Commands::Toc { file, levels, depth } => {
            commands::handle_toc_command(&config, file, levels, *depth)
        }
        types::Commands::Render { file, toc, no_copy } => {
            commands::handle_render_command(&config, file, *toc, *no_copy)
        }
        types::Commands::Copy { file, no_clipboard, activate } => {
            commands::handle_copy_command(&config, file, *no_clipboard, *activate).await
        }
        types::Commands::Config { action } => {
            commands::handle_config_command(&config, action)
        }
    }
}
