use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ballup_core::AppConfig;

mod commands;

const MAX_TRACE_TAPS: i64 = 100_000;

#[derive(Parser)]
#[command(name = "ballup")]
#[command(author, version, about = "A row of bouncing balls driven by taps")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file (defaults to ~/.config/ballup/config.toml)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    /// Show the status bar under the animation
    #[arg(long = "status", global = true)]
    status: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the animation (default)
    Run,
    /// Tap headlessly and print every settlement
    Trace {
        /// Number of taps to perform
        #[arg(
            short = 'n',
            long,
            default_value_t = 10,
            value_parser = clap::value_parser!(u32).range(..=MAX_TRACE_TAPS)
        )]
        taps: u32,
    },
    /// Print the effective configuration
    Config,
}

fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );

    if to_file {
        // The terminal belongs to the UI; keep log lines out of it
        let path = config.log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    if cli.status {
        config.ui.show_status_bar = true;
    }
    let config = Arc::new(config);

    let interactive = matches!(cli.command, Some(Commands::Run) | None);
    init_logging(&config, interactive)?;

    // Handle commands
    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config).await,
        Some(Commands::Trace { taps }) => commands::trace::run(&config, taps as usize),
        Some(Commands::Config) => commands::config::run(&config),
    }
}
