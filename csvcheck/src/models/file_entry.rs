// src/models/file_entry.rs

use std::path::{Path, PathBuf};

use super::ParseResult;

/// A file picked up by discovery. Lives for one iteration of the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
}

impl FileEntry {
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// The outcome for one file, ready to be printed.
#[derive(Debug)]
pub struct FileReport {
    pub entry: FileEntry,
    pub result: ParseResult,
}
