// src/report.rs
use std::fmt::Write as _;

use crate::models::{FileReport, ParseResult, RunOutcome};

/// Renders the line printed for one file.
#[must_use]
pub fn format_line(report: &FileReport, with_path: bool) -> String {
    let mut out = String::new();
    if with_path {
        let _ = write!(out, "{}: ", report.entry.path().display());
    }
    let _ = match &report.result {
        ParseResult::Success { rows, columns } => {
            write!(out, "OK - {rows} rows, {columns} cols")
        }
        ParseResult::Failure { error } => write!(out, "Failed - {error}"),
        ParseResult::Skipped { reason } => write!(out, "Skipped - {reason}"),
    };
    out
}

#[must_use]
pub fn format_summary(outcome: &RunOutcome) -> String {
    format!(
        "{} files checked: {} ok, {} failed, {} skipped",
        outcome.checked, outcome.passed, outcome.failed, outcome.skipped
    )
}
