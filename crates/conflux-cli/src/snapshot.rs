//! Shared loading helpers: the project snapshot file and the language
//! registry (local table file or one explicit blocking fetch).

use std::path::Path;

use anyhow::{Context, Result};

use conflux_core::ProjectSnapshot;
use conflux_lang::{LanguageRegistry, DEFAULT_TABLE_URL};

/// Load a project snapshot from a JSON file.
pub fn load_project(path: &Path) -> Result<ProjectSnapshot> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading project snapshot {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("parsing project snapshot {}", path.display()))
}

/// Load the language registry from a local table file, or fetch the
/// published table when none is given.
///
/// The fetch blocks on a single-threaded runtime built here, so the
/// one-time network wait is visible at this call site instead of hiding
/// in a constructor.
pub fn load_languages(table: Option<&Path>) -> Result<LanguageRegistry> {
    match table {
        Some(path) => LanguageRegistry::from_path(path)
            .with_context(|| format!("loading language table {}", path.display())),
        None => {
            tracing::info!(url = DEFAULT_TABLE_URL, "fetching language table");
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .context("building fetch runtime")?;
            let client = reqwest::Client::new();
            runtime
                .block_on(LanguageRegistry::fetch(&client, DEFAULT_TABLE_URL))
                .context("fetching language table")
        }
    }
}
