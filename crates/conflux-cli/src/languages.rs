//! The `languages` subcommand: query the ISO 639-3 table.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::snapshot;

/// Arguments for `conflux languages`.
#[derive(Args, Debug)]
pub struct LanguagesArgs {
    #[command(subcommand)]
    pub command: LanguagesCommand,
}

/// Language table queries.
#[derive(Subcommand, Debug)]
pub enum LanguagesCommand {
    /// Check whether a code is a known ISO 639-3 code.
    Validate {
        /// The code to check.
        code: String,
        /// Local table file; fetched from the published table when not given.
        #[arg(long)]
        table: Option<PathBuf>,
    },
    /// Print every known code, in table order.
    List {
        /// Local table file; fetched from the published table when not given.
        #[arg(long)]
        table: Option<PathBuf>,
    },
}

/// Dispatch the language table query.
pub fn run_languages(args: LanguagesArgs) -> Result<ExitCode> {
    match args.command {
        LanguagesCommand::Validate { code, table } => {
            let registry = snapshot::load_languages(table.as_deref())?;
            if registry.is_valid_code(&code) {
                println!("{code}: valid");
                Ok(ExitCode::SUCCESS)
            } else {
                println!("{code}: unknown");
                Ok(ExitCode::FAILURE)
            }
        }
        LanguagesCommand::List { table } => {
            let registry = snapshot::load_languages(table.as_deref())?;
            for code in registry.all_codes() {
                println!("{code}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
