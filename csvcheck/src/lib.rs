// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;
pub mod report;

use anyhow::{Context as _, Result};
use std::env;
use std::io::Write;

pub use cli::Args;
pub use config::{FileConfig, Settings, find_config_file, load_config, resolve_settings};
pub use crate::core::discovery::{Discovered, Excludes, discover};
pub use crate::core::parser::{FieldCount, ParseOptions, parse_file};
pub use crate::core::validator::{validate, validate_file};
pub use error::{ErrorKind, ValidationError};
pub use models::{FileEntry, FileReport, ParseResult, RunOutcome};

/// Resolves settings relative to the current directory and runs the scan,
/// writing the report to `out`.
///
/// # Errors
///
/// This function may return an error if:
/// * The current directory cannot be determined
/// * The configuration is invalid
/// * Writing the report fails
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<RunOutcome> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let settings = resolve_settings(args, &cwd)?;
    validate(&settings, out)
}
