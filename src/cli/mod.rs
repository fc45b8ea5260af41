//! Command-line interface for agmd
//!
//! Provides `init` and `add` subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod add;
mod init;

/// Compose AGENTS.md from GitHub-hosted AGENTS.md files
#[derive(Parser)]
#[command(name = "agmd")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty agmd.yml at the project root
    Init,

    /// Add a GitHub path mapping and refresh AGENTS.md
    Add(add::AddArgs),
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Init => init::run(),
        Commands::Add(args) => add::run(args),
    }
}
