//! # hexlic CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! With no subcommand, `hexlic` generates `idapro.hexlic` in the current
//! directory.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hexlic_cli::check::{run_check, CheckArgs};
use hexlic_cli::generate::{run_generate, GenerateArgs};
use hexlic_core::SystemClock;

/// hexlic — license file generator.
///
/// Builds a license record with a ten-year validity window and the full
/// decompiler add-on catalog, and writes it in compact canonical form.
#[derive(Parser, Debug)]
#[command(name = "hexlic", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a license file (default).
    Generate(GenerateArgs),

    /// Verify a license file is canonical and internally consistent.
    Check(CheckArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command.unwrap_or_else(|| Commands::Generate(GenerateArgs::default())) {
        Commands::Generate(args) => run_generate(&args, &SystemClock),
        Commands::Check(args) => run_check(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
