//! # conflux CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use conflux_cli::check::{run_check, CheckArgs};
use conflux_cli::drift::{run_checksum, ChecksumArgs};
use conflux_cli::languages::{run_languages, LanguagesArgs};
use conflux_cli::map::{run_map, MapArgs};

/// Conflux RAiD engine CLI.
///
/// Checks project snapshots against the registry's structural invariants,
/// maps them to registry payloads, and computes drift checksums.
#[derive(Parser, Debug)]
#[command(name = "conflux", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the compatibility check battery against a project snapshot.
    Check(CheckArgs),

    /// Map a project snapshot to a registry payload.
    Map(MapArgs),

    /// Compute the update payload checksum and report drift.
    Checksum(ChecksumArgs),

    /// Query the ISO 639-3 language table.
    Languages(LanguagesArgs),
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
        .init();

    let result = match cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Map(args) => run_map(args),
        Commands::Checksum(args) => run_checksum(args),
        Commands::Languages(args) => run_languages(args),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
