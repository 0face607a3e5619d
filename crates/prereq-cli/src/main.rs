//! # prereq-cli
//!
//! Course prerequisite resolver CLI.
//!
//! This is the main entry point for the prereq tool. It handles command parsing,
//! sets up logging and error handling, and dispatches to the appropriate command handlers.

use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use prereq_core::error::{PrereqError, PrereqResult};
use tracing::{debug, error};

mod commands;
mod output;

use commands::CommandContext;
use output::errors::ErrorFormatter;

/// Resolve course prerequisites into a study order with aggregated costs
#[derive(Parser)]
#[command(name = "prereq", version, about = "Course prerequisite resolver")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Catalog file (defaults to prereq.toml or courses.json found upward)
    #[arg(long, global = true, env = "PREREQ_CATALOG", value_name = "FILE")]
    pub catalog: Option<Utf8PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every course in study order with its aggregated cost
    Order {
        /// Fail on circular prerequisites instead of merging them
        #[arg(long)]
        strict: bool,
    },
    /// Print the courses needed to reach a target, and the total cost
    Path {
        /// Course to reach
        target: String,
        /// Fail on circular prerequisites instead of merging them
        #[arg(long)]
        strict: bool,
    },
    /// Check the catalog for circular prerequisites
    Check,
    /// Show version information
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose);
    setup_panic_handler();

    debug!("Starting prereq CLI v{}", env!("CARGO_PKG_VERSION"));

    match run_cli(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprint!("{}", ErrorFormatter::new().format_error(&err));
            ExitCode::FAILURE
        }
    }
}

fn run_cli(cli: Cli) -> PrereqResult<()> {
    // Catalog files are read through tokio::fs
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| PrereqError::io("Failed to create async runtime".to_string(), e))?;

    rt.block_on(async {
        let ctx = CommandContext::new(cli.catalog, cli.json)?;
        commands::dispatch_command(cli.command, &ctx).await
    })
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "prereq_cli={level},prereq_config={level},prereq_resolver={level}"
        ))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        error!("prereq encountered an unexpected error: {}", panic_info);
        eprintln!("prereq crashed! This is a bug.");
        eprintln!("Error: {}", panic_info);
    }));
}
