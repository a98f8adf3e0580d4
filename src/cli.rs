//! Command-line interface for `arkana-shortcuts`.
//!
//! Subcommands inspect a binding config: dump the combo trees it builds,
//! replay synthetic input against it, or write the default config.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use arkana_config::InputConfig;

use crate::replay::{self, ReplayEvent, Replayer};

/// arkana-shortcuts - inspect and exercise shortcut bindings
#[derive(Parser)]
#[command(name = "arkana-shortcuts")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file to use instead of ~/.config/arkana/input.yaml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set log level (overrides config and RUST_LOG)
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevelArg>,
}

/// Log level argument for CLI
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevelArg::Off => log::LevelFilter::Off,
            LogLevelArg::Error => log::LevelFilter::Error,
            LogLevelArg::Warn => log::LevelFilter::Warn,
            LogLevelArg::Info => log::LevelFilter::Info,
            LogLevelArg::Debug => log::LevelFilter::Debug,
            LogLevelArg::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the combo trees the configured bindings produce
    Dump,

    /// Feed synthetic events and print the shortcuts they fire
    Replay {
        /// Events such as press:Escape, down:Ctrl, up:Ctrl, click:LMB, scroll:WheelUp
        #[arg(required = true, value_name = "EVENT")]
        events: Vec<String>,
    },

    /// Write the default configuration
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// Load the config named on the command line, or the default one.
pub fn load_config(path: Option<&Path>) -> Result<InputConfig> {
    match path {
        Some(path) => InputConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => InputConfig::load().context("Failed to load default config"),
    }
}

/// Run a parsed command line. Logging must already be initialised.
pub fn run(cli: &Cli, config: Option<&InputConfig>) -> Result<()> {
    match &cli.command {
        Commands::Init { force } => init(cli.config.as_deref(), *force),
        Commands::Dump => {
            let config = require(config)?;
            print!("{}", replay::dump(config));
            Ok(())
        }
        Commands::Replay { events } => {
            let config = require(config)?;
            let events = events
                .iter()
                .map(|e| e.parse::<ReplayEvent>())
                .collect::<Result<Vec<_>>>()?;
            for line in replay_lines(config, &events) {
                println!("{}", line);
            }
            Ok(())
        }
    }
}

fn require(config: Option<&InputConfig>) -> Result<&InputConfig> {
    config.context("This command needs a loaded config")
}

/// Replay `events` and describe what each one fired.
pub fn replay_lines(config: &InputConfig, events: &[ReplayEvent]) -> Vec<String> {
    let mut replayer = Replayer::new(config);
    log::info!("Replaying {} events against {} bindings", events.len(), replayer.registered());

    events
        .iter()
        .map(|&event| {
            let fired = replayer.apply(event);
            if fired.is_empty() {
                format!("{}: -", event)
            } else {
                format!("{}: {}", event, fired.join(", "))
            }
        })
        .collect()
}

fn init(path: Option<&Path>, force: bool) -> Result<()> {
    let path = path.map_or_else(InputConfig::config_path, Path::to_path_buf);
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    InputConfig::default()
        .save_to(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
