use anyhow::Result;
use clap::Parser;

use arkana::cli::{self, Cli, Commands};
use arkana::logging::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cli_level = cli.log_level.map(|level| level.to_level_filter());

    // `init` writes the config, so there is nothing to load yet.
    if matches!(cli.command, Commands::Init { .. }) {
        init_logging(log::LevelFilter::Info, cli_level);
        return cli::run(&cli, None);
    }

    let config = cli::load_config(cli.config.as_deref());
    let config_level = config
        .as_ref()
        .map_or(log::LevelFilter::Info, |c| c.log_level.to_level_filter());
    init_logging(config_level, cli_level);

    let config = config?;
    log::info!("Starting arkana-shortcuts {}", arkana::VERSION);
    cli::run(&cli, Some(&config))
}
