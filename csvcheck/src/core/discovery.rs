// src/core/discovery.rs
pub mod exclude;

use anyhow::{Context as _, Result, bail};
use glob::{MatchOptions, Pattern};
use std::path::Path;
use tracing::{debug, info};

use crate::error::ValidationError;
use crate::models::FileEntry;
pub use exclude::Excludes;

/// A file found while enumerating the data directory.
#[derive(Debug)]
pub enum Discovered {
    File(FileEntry),
    /// The directory listing yielded this path but it could not be inspected.
    Unreadable(FileEntry, ValidationError),
}

impl Discovered {
    #[must_use]
    pub const fn entry(&self) -> &FileEntry {
        match self {
            Self::File(entry) | Self::Unreadable(entry, _) => entry,
        }
    }
}

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Lists the files directly under `dir` whose names match `pattern`.
///
/// Results come back sorted by path so repeated runs over the same directory
/// produce the same order. Dot files are not matched by wildcards. Directories
/// that happen to match are ignored, as are files matched by `excludes`. A
/// missing `dir` yields no files.
///
/// # Errors
///
/// This function may return an error if:
/// * `pattern` contains a path separator
/// * `pattern` is not valid glob syntax
pub fn discover(dir: &Path, pattern: &str, excludes: &Excludes) -> Result<Vec<Discovered>> {
    if pattern.contains('/') || pattern.contains('\\') {
        bail!("File pattern must not contain a path separator: {pattern}");
    }

    if !dir.is_dir() {
        info!(dir = %dir.display(), "data directory not found, nothing to check");
    }

    // Metacharacters in the directory name are literal
    let full_pattern = format!("{}/{pattern}", Pattern::escape(&dir.to_string_lossy()));
    let paths = glob::glob_with(&full_pattern, MATCH_OPTIONS)
        .with_context(|| format!("Invalid file pattern: {pattern}"))?;

    let mut found = Vec::new();
    for path in paths {
        match path {
            Ok(path) => {
                if !path.is_file() {
                    debug!(path = %path.display(), "not a regular file, skipping");
                    continue;
                }
                if excludes.matches(&path) {
                    debug!(path = %path.display(), "excluded");
                    continue;
                }
                found.push(Discovered::File(FileEntry::new(path)));
            }
            Err(err) => {
                let entry = FileEntry::new(err.path());
                found.push(Discovered::Unreadable(entry, err.into()));
            }
        }
    }

    found.sort_by(|a, b| a.entry().path.cmp(&b.entry().path));
    Ok(found)
}
