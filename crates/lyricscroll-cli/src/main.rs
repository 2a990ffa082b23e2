use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lyricscroll_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "lyricscroll")]
#[command(author, version, about = "A terminal lyrics viewer that keeps the sung line in view")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to ~/.config/lyricscroll/config.toml)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a lyrics file in the terminal
    Play {
        /// Lyrics JSON file
        file: PathBuf,
        /// Start position in milliseconds
        #[arg(long, default_value_t = 0)]
        start_ms: u64,
        /// Align the active line to the top of the view
        #[arg(long)]
        compact: bool,
        /// Picture-in-picture layout (implies compact)
        #[arg(long)]
        pip: bool,
    },
    /// Run the scroll policy headless on a virtual clock and print every scroll
    Simulate {
        /// Lyrics JSON file
        file: PathBuf,
        /// Virtual tick length in milliseconds
        #[arg(long, default_value_t = 50)]
        step_ms: u64,
        /// Seek at a virtual time, as AT:TO in milliseconds (repeatable)
        #[arg(long = "seek", value_parser = commands::simulate::parse_seek)]
        seeks: Vec<(u64, f64)>,
        /// Inject a wheel scroll at a virtual time in milliseconds (repeatable)
        #[arg(long = "wheel")]
        wheels: Vec<u64>,
        /// Pause at a virtual time in milliseconds (repeatable, toggles)
        #[arg(long = "pause")]
        pauses: Vec<u64>,
        /// Simulate the compact layout
        #[arg(long)]
        compact: bool,
    },
    /// Show which line is active at a position
    Inspect {
        /// Lyrics JSON file
        file: PathBuf,
        /// Playback position in milliseconds
        #[arg(long)]
        at: f64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );

    // The TUI owns the terminal, so its logs go to a file
    if matches!(cli.command, Commands::Play { .. }) {
        let log_path = config.log_path();
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&log_path)?;
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

    let config = Arc::new(config);

    match cli.command {
        Commands::Play {
            file,
            start_ms,
            compact,
            pip,
        } => commands::play::run(config, &file, start_ms, compact, pip).await,
        Commands::Simulate {
            file,
            step_ms,
            seeks,
            wheels,
            pauses,
            compact,
        } => {
            let options = commands::simulate::SimulateOptions {
                step_ms,
                seeks,
                wheels,
                pauses,
                compact,
            };
            commands::simulate::run(&config, &file, &options).await
        }
        Commands::Inspect { file, at } => commands::inspect::run(&file, at).await,
    }
}
