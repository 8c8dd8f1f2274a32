//! The `check` subcommand: run the compatibility battery and report.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use clap::Args;

use conflux_raid::check_compatibility;

use crate::snapshot;

/// Arguments for `conflux check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the project snapshot JSON file.
    #[arg(long)]
    pub project: PathBuf,

    /// Reference date for title activity (YYYY-MM-DD, defaults to today).
    #[arg(long)]
    pub now: Option<NaiveDate>,
}

/// Print every incompatibility; exit non-zero when any exist.
pub fn run_check(args: CheckArgs) -> Result<ExitCode> {
    let project = snapshot::load_project(&args.project)?;
    let now = args.now.unwrap_or_else(|| Utc::now().date_naive());

    let found = check_compatibility(&project, now);
    if found.is_empty() {
        println!("compatible: every check passed");
        return Ok(ExitCode::SUCCESS);
    }

    eprintln!("{} incompatibilit{} found:", found.len(), plural_y(found.len()));
    for incompatibility in &found {
        eprintln!("  - {incompatibility}");
    }
    Ok(ExitCode::FAILURE)
}

fn plural_y(n: usize) -> &'static str {
    if n == 1 {
        "y"
    } else {
        "ies"
    }
}
