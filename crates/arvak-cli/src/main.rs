//! Arvak conformance runner.
//!
//! Runs the backend conformance template against a named backend:
//!
//! ```text
//! arvak-conform backends
//! arvak-conform show --backend fake_star5 --format yaml
//! arvak-conform run --backend simulator --shots 512 -v
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{backends, run, show};

/// Arvak - conformance checks for quantum backends
#[derive(Parser, Debug)]
#[command(name = "arvak-conform")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the conformance checks against a backend
    Run {
        /// Backend to check
        #[arg(short, long, default_value = "simulator")]
        backend: String,

        /// Suite configuration file (YAML); defaults to ~/.arvak/conformance.yaml
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Shots for the run-circuit check
        #[arg(short, long)]
        shots: Option<u32>,

        /// Sampling seed
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print a backend's configuration, properties and status
    Show {
        /// Backend to describe
        #[arg(short, long)]
        backend: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// List available backends
    Backends,
}

/// Serialization format for `show`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Run {
            backend,
            config,
            shots,
            seed,
        } => run::execute(&backend, config.as_deref(), shots, seed).await,

        Commands::Show { backend, format } => show::execute(&backend, format).await,

        Commands::Backends => backends::execute().await,
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
