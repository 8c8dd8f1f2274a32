//! # conflux-lang: ISO 639-3 Language Code Registry
//!
//! The mapper emits language-tagged titles and descriptions, and the
//! registry wire format requires those tags to be known ISO 639-3 codes.
//! This crate loads the canonical code set from the SIL reference table and
//! answers validity queries.
//!
//! ## Construction
//!
//! Loading is an explicit factory step, never hidden in a constructor:
//! [`LanguageRegistry::from_tsv()`] for in-memory text (tests),
//! [`LanguageRegistry::from_path()`] for a local file, and the async
//! [`LanguageRegistry::fetch()`] for the published table. A table that
//! cannot be loaded, or that yields no codes, fails construction; there is
//! no silent empty-set fallback, because downstream mapping correctness
//! depends on the set being complete.
//!
//! After construction the registry is immutable and safe to share across
//! threads without synchronization.

mod registry;

pub use registry::{LanguageRegistry, LanguageTableError, DEFAULT_TABLE_URL};
