//! CLI frontend for the Trap Net incident-response quiz.

mod commands;

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Mutex;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "TRAPNET_LOG";

#[derive(Parser)]
#[command(
    name = "trapnet",
    about = "Trap Net: respond to on-chain security incidents, one level at a time",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game in the terminal
    Play {
        /// Scenario catalog JSON file (default: built-in incidents)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Wrong answers allowed per level attempt
        #[arg(long, default_value = "2")]
        tries: u32,

        /// Page URL to include in the share link
        #[arg(long)]
        share_url: Option<String>,

        /// Do not ring the terminal bell
        #[arg(long)]
        mute: bool,

        /// RNG seed for the confetti
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Write logs to this file (the terminal is busy with the game)
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// List all levels
    Levels {
        /// Scenario catalog JSON file (default: built-in incidents)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Show one level's incident and options
    Show {
        /// Level number
        level: u32,

        /// Also print the correct answer and explanation
        #[arg(short, long)]
        reveal: bool,

        /// Scenario catalog JSON file (default: built-in incidents)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Validate a scenario catalog file
    Check {
        /// Catalog JSON file
        file: PathBuf,
    },

    /// Write the built-in catalog as JSON
    Export {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            catalog,
            tries,
            share_url,
            mute,
            seed,
            log_file,
        } => init_file_logging(log_file.as_deref()).and_then(|()| {
            commands::play::run(catalog.as_deref(), tries, share_url, mute, seed)
        }),
        Commands::Levels { catalog } => {
            init_stderr_logging();
            commands::levels::run(catalog.as_deref())
        }
        Commands::Show {
            level,
            reveal,
            catalog,
        } => {
            init_stderr_logging();
            commands::show::run(catalog.as_deref(), level, reveal)
        }
        Commands::Check { file } => {
            init_stderr_logging();
            commands::check::run(&file)
        }
        Commands::Export { output } => {
            init_stderr_logging();
            commands::export::run(output.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Log to stderr, warnings and up unless `TRAPNET_LOG` says otherwise.
fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(io::stderr)
        .init();
}

/// Log to `path` while the TUI owns the terminal. No file, no logging.
fn init_file_logging(path: Option<&Path>) -> Result<(), String> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .map_err(|e| format!("cannot open log file {}: {e}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
