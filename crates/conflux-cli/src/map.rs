//! The `map` subcommand: print the mapped registry payload as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use conflux_raid::RequestMapper;

use crate::snapshot;

/// Which payload to build.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum PayloadKind {
    /// The creation payload for a first mint.
    Create,
    /// The update payload for a sync (requires a linkage record).
    Update,
}

/// Arguments for `conflux map`.
#[derive(Args, Debug)]
pub struct MapArgs {
    /// Which payload to build.
    #[arg(value_enum)]
    pub kind: PayloadKind,

    /// Path to the project snapshot JSON file.
    #[arg(long)]
    pub project: PathBuf,

    /// Local ISO 639-3 table file; fetched from the published table when
    /// not given.
    #[arg(long)]
    pub languages: Option<PathBuf>,
}

/// Map the snapshot and pretty-print the payload.
pub fn run_map(args: MapArgs) -> Result<ExitCode> {
    let project = snapshot::load_project(&args.project)?;
    let languages = snapshot::load_languages(args.languages.as_deref())?;
    let mapper = RequestMapper::new(&languages);

    let json = match args.kind {
        PayloadKind::Create => {
            let request = mapper.creation_request(&project)?;
            serde_json::to_string_pretty(&request)
        }
        PayloadKind::Update => {
            let request = mapper.update_request(&project)?;
            serde_json::to_string_pretty(&request)
        }
    }
    .context("rendering payload")?;

    println!("{json}");
    Ok(ExitCode::SUCCESS)
}
