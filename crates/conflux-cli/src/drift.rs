//! The `checksum` subcommand: compute the update payload checksum and
//! report drift against the stored linkage record.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use conflux_raid::{update_checksum, RequestMapper};

use crate::snapshot;

/// Arguments for `conflux checksum`.
#[derive(Args, Debug)]
pub struct ChecksumArgs {
    /// Path to the project snapshot JSON file.
    #[arg(long)]
    pub project: PathBuf,

    /// Local ISO 639-3 table file; fetched from the published table when
    /// not given.
    #[arg(long)]
    pub languages: Option<PathBuf>,
}

/// Print the freshly computed checksum and the drift verdict.
pub fn run_checksum(args: ChecksumArgs) -> Result<ExitCode> {
    let project = snapshot::load_project(&args.project)?;
    let languages = snapshot::load_languages(args.languages.as_deref())?;

    let request = RequestMapper::new(&languages).update_request(&project)?;
    let checksum = update_checksum(&request)?;
    println!("checksum: {checksum}");

    // update_request already failed if the linkage record were absent.
    if let Some(info) = project.raid_info.as_ref() {
        match info.checksum.as_deref() {
            Some(stored) if stored == checksum => println!("state: clean (matches {stored})"),
            Some(stored) => println!("state: dirty (stored {stored})"),
            None => println!("state: dirty (no checksum stored yet)"),
        }
    }
    Ok(ExitCode::SUCCESS)
}
