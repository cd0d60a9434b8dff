use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use glyphpick::{
    cli::commands::{
        browse::BrowseCommand, list::ListCommand, pick::PickCommand, search::SearchCommand,
        CommandHandler,
    },
    cli::{Cli, Commands, LogLevel},
    Result,
};

fn initialize_tracing(level: LogLevel) {
    // RUST_LOG wins over --log-level when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(cli.log_level);

    let config = cli.resolve_config()?;
    debug!(registry = ?config.registry, page_size = config.page_size, "Resolved config");

    let handler: Box<dyn CommandHandler> = match cli.command {
        Commands::List => Box::new(ListCommand::new(config, cli.json)),
        Commands::Browse { pages, .. } => Box::new(BrowseCommand::new(config, pages, cli.json)),
        Commands::Search { query } => Box::new(SearchCommand::new(config, query, cli.json)),
        Commands::Pick { selection } => Box::new(PickCommand::new(config, selection, cli.json)),
    };

    debug!(command = handler.name(), "Executing command");
    handler.execute()
}
