//! Command-line scanner for turnscan.
//!
//! This crate provides:
//! - [`parse_args`] / [`CliConfig`] - Argument parsing for the `turnscan` binary
//! - [`run`] - Loads rules, scans message files and prints the facts
//! - [`tracing_setup`] - Log subscriber wiring (`--verbose`, `--quiet`, `TURNSCAN_LOG`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod scan;
pub mod tracing_setup;

pub use cli::{CliConfig, CliError, help_text, parse_args};
pub use scan::{ScanSummary, build_catalog, build_resolver, run, split_messages};
pub use tracing_setup::{Verbosity, init_subscriber};
