// src/core/validator.rs
use anyhow::{Context as _, Result};
use std::io::Write;
use tracing::{debug, error, info, warn};

use crate::config::Settings;
use crate::core::discovery::{Discovered, Excludes, discover};
use crate::core::parser::{ParseOptions, parse_file};
use crate::models::{FileReport, ParseResult, RunOutcome};
use crate::report::{format_line, format_summary};

/// Checks a single discovered file.
#[must_use]
pub fn validate_file(found: Discovered, opts: &ParseOptions) -> FileReport {
    match found {
        Discovered::File(entry) => {
            debug!(path = %entry.path().display(), "parsing");
            let result = parse_file(entry.path(), opts);
            FileReport { entry, result }
        }
        Discovered::Unreadable(entry, error) => FileReport {
            entry,
            result: ParseResult::Failure { error },
        },
    }
}

/// Validates every matching file and writes one line per file to `out`.
///
/// Per-file problems never stop the scan; they are printed and recorded in the
/// returned [`RunOutcome`].
///
/// # Errors
///
/// This function may return an error if:
/// * An exclude pattern or the file pattern is invalid
/// * Writing to or flushing `out` fails
pub fn validate<W: Write>(settings: &Settings, out: &mut W) -> Result<RunOutcome> {
    let excludes = Excludes::from_patterns(&settings.exclude)?;
    let found = discover(&settings.dir, &settings.pattern, &excludes)
        .with_context(|| format!("Failed to scan directory: {}", settings.dir.display()))?;
    let opts = settings.parse_options();

    let mut outcome = RunOutcome::new();
    for item in found {
        let report = validate_file(item, &opts);
        match &report.result {
            ParseResult::Success { rows, columns } => {
                debug!(path = %report.entry.path().display(), rows, columns, "ok");
            }
            ParseResult::Failure { error } => {
                warn!(path = %report.entry.path().display(), kind = %error.kind(), "failed");
            }
            ParseResult::Skipped { reason } => {
                warn!(path = %report.entry.path().display(), %reason, "skipped");
            }
        }
        outcome.record(&report.result);
        writeln!(out, "{}", format_line(&report, settings.with_path))
            .context("Failed to write report line")?;
    }

    if settings.summary {
        writeln!(out, "{}", format_summary(&outcome)).context("Failed to write summary")?;
    }
    out.flush().context("Failed to flush report")?;

    if settings.require_files && outcome.checked == 0 {
        error!(
            "no files matching {} found in {}",
            settings.pattern,
            settings.dir.display()
        );
        outcome.any_failure = true;
    }

    info!(
        checked = outcome.checked,
        passed = outcome.passed,
        failed = outcome.failed,
        skipped = outcome.skipped,
        "validation finished"
    );
    Ok(outcome)
}
