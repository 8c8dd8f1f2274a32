//! # conflux CLI handler modules
//!
//! One module per subcommand, each exposing an `Args` struct (clap derive)
//! and a `run_*` handler returning the process exit code. The binary in
//! `main.rs` only parses arguments, sets up tracing, and dispatches.

pub mod check;
pub mod drift;
pub mod languages;
pub mod map;
pub mod snapshot;
