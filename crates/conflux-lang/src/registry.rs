//! Reference-table parsing and the registry itself.
//!
//! The SIL export is a tab-separated table whose first column is the
//! three-letter code. Parsing is tolerant of individual malformed rows
//! (skipped with a log line) but strict about the overall result: an empty
//! code set is a construction failure.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Where SIL publishes the ISO 639-3 code table.
pub const DEFAULT_TABLE_URL: &str =
    "https://iso639-3.sil.org/sites/iso639-3/files/downloads/iso-639-3.tab";

/// Minimum number of tab-separated columns a data row must have.
const MIN_COLUMNS: usize = 2;

/// Error loading the language reference table.
#[derive(Error, Debug)]
pub enum LanguageTableError {
    /// Reading a local table file failed.
    #[error("failed to read language table {path}: {source}")]
    Read {
        /// The file that could not be read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Fetching the published table failed.
    #[error("failed to fetch language table from {url}: {source}")]
    Fetch {
        /// The URL that could not be fetched.
        url: String,
        /// Underlying HTTP error.
        #[source]
        source: reqwest::Error,
    },

    /// The table parsed but contained no usable codes.
    #[error("language table contained no usable codes")]
    EmptyTable,
}

/// The set of known ISO 639-3 language codes.
///
/// Immutable after construction; lookups are case-insensitive.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    /// Lowercased codes for lookup.
    codes: HashSet<String>,
    /// Codes as written in the table, in table order, for diagnostics.
    ordered: Vec<String>,
}

impl LanguageRegistry {
    /// Parse a registry from the tab-separated reference table.
    ///
    /// Rows are skipped when the first column is blank, is not exactly
    /// three characters (this also drops the header row), or the row has
    /// fewer than [`MIN_COLUMNS`] columns.
    ///
    /// # Errors
    ///
    /// Returns [`LanguageTableError::EmptyTable`] when no codes were parsed.
    pub fn from_tsv(text: &str) -> Result<Self, LanguageTableError> {
        let mut codes = HashSet::new();
        let mut ordered = Vec::new();

        for line in text.lines() {
            let mut columns = line.split('\t');
            let code = columns.next().unwrap_or("").trim();
            if code.is_empty() || code.chars().count() != 3 {
                continue;
            }
            if columns.count() + 1 < MIN_COLUMNS {
                tracing::warn!(code, "skipping language table row with too few columns");
                continue;
            }
            if codes.insert(code.to_ascii_lowercase()) {
                ordered.push(code.to_string());
            }
        }

        if codes.is_empty() {
            return Err(LanguageTableError::EmptyTable);
        }
        Ok(Self { codes, ordered })
    }

    /// Load a registry from a local table file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LanguageTableError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LanguageTableError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_tsv(&text)
    }

    /// Fetch the published table and build a registry from it.
    ///
    /// This is the only network call in the engine. Callers decide where
    /// the one-time load happens (startup, lazily, behind a cache); the
    /// registry itself never refreshes.
    pub async fn fetch(client: &reqwest::Client, url: &str) -> Result<Self, LanguageTableError> {
        let fetch_err = |source| LanguageTableError::Fetch {
            url: url.to_string(),
            source,
        };
        let response = client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(fetch_err)?;
        let text = response.text().await.map_err(fetch_err)?;
        Self::from_tsv(&text)
    }

    /// Whether the code is a known ISO 639-3 code. Case-insensitive; only
    /// exactly-three-character inputs can be valid.
    pub fn is_valid_code(&self, code: &str) -> bool {
        code.chars().count() == 3 && self.codes.contains(&code.to_ascii_lowercase())
    }

    /// All known codes, as written in the table, in table order.
    pub fn all_codes(&self) -> &[String] {
        &self.ordered
    }

    /// Number of known codes.
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Whether the registry is empty (never true for a constructed registry).
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FIXTURE: &str = "\
Id\tPart2b\tPart2t\tPart1\tScope\tLanguage_Type\tRef_Name\tComment
nld\tdut\tnld\tnl\tI\tL\tDutch\t
eng\teng\teng\ten\tI\tL\tEnglish\t
fry\tfry\tfry\tfy\tI\tL\tWestern Frisian\t
";

    #[test]
    fn parses_codes_in_table_order() {
        let registry = LanguageRegistry::from_tsv(FIXTURE).unwrap();
        assert_eq!(registry.all_codes(), ["nld", "eng", "fry"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn header_row_is_skipped() {
        let registry = LanguageRegistry::from_tsv(FIXTURE).unwrap();
        assert!(!registry.is_valid_code("Id"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let registry = LanguageRegistry::from_tsv(FIXTURE).unwrap();
        assert!(registry.is_valid_code("nld"));
        assert!(registry.is_valid_code("NLD"));
        assert!(registry.is_valid_code("Eng"));
    }

    #[test]
    fn wrong_length_codes_are_invalid() {
        let registry = LanguageRegistry::from_tsv(FIXTURE).unwrap();
        assert!(!registry.is_valid_code("nl"));
        assert!(!registry.is_valid_code("dutch"));
        assert!(!registry.is_valid_code(""));
    }

    #[test]
    fn unknown_codes_are_invalid() {
        let registry = LanguageRegistry::from_tsv(FIXTURE).unwrap();
        assert!(!registry.is_valid_code("xyz"));
    }

    #[test]
    fn blank_first_column_rows_are_skipped() {
        let table = "\t\t\t\t\t\t\t\nnld\tdut\tnld\tnl\tI\tL\tDutch\t\n";
        let registry = LanguageRegistry::from_tsv(table).unwrap();
        assert_eq!(registry.all_codes(), ["nld"]);
    }

    #[test]
    fn single_column_rows_are_skipped() {
        let table = "abc\nnld\tdut\tnld\tnl\tI\tL\tDutch\t\n";
        let registry = LanguageRegistry::from_tsv(table).unwrap();
        assert_eq!(registry.all_codes(), ["nld"]);
    }

    #[test]
    fn empty_table_fails_construction() {
        assert!(matches!(
            LanguageRegistry::from_tsv(""),
            Err(LanguageTableError::EmptyTable)
        ));
        assert!(matches!(
            LanguageRegistry::from_tsv("Id\tRef_Name\n"),
            Err(LanguageTableError::EmptyTable)
        ));
    }

    #[test]
    fn duplicate_codes_are_deduplicated() {
        let table = "nld\tdut\nNLD\tdut\n";
        let registry = LanguageRegistry::from_tsv(table).unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn from_path_reads_local_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FIXTURE.as_bytes()).unwrap();
        let registry = LanguageRegistry::from_path(file.path()).unwrap();
        assert!(registry.is_valid_code("fry"));
    }

    #[test]
    fn from_path_missing_file_fails() {
        let result = LanguageRegistry::from_path("/nonexistent/iso-639-3.tab");
        assert!(matches!(result, Err(LanguageTableError::Read { .. })));
    }
}
