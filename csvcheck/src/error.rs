// src/error.rs
use std::fmt;
use std::io;

/// Coarse category of a per-file failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The bytes were read but could not be interpreted as tabular data.
    Parse,
    /// The file could not be opened, read or enumerated.
    Filesystem,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse => f.write_str("parse"),
            Self::Filesystem => f.write_str("filesystem"),
        }
    }
}

/// Why a single file failed validation.
///
/// These never abort a run; the validator turns each one into a `Failed` line.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("no columns to parse from file")]
    NoColumns,

    #[error("Expected {expected} fields in line {line}, saw {found}")]
    TooManyFields {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("{0}")]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    Io(#[from] io::Error),
}

impl ValidationError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            // The csv reader wraps plain I/O failures in its own error type.
            Self::Csv(err) if err.is_io_error() => ErrorKind::Filesystem,
            Self::NoColumns | Self::TooManyFields { .. } | Self::Csv(_) => ErrorKind::Parse,
            Self::Io(_) => ErrorKind::Filesystem,
        }
    }
}

impl From<glob::GlobError> for ValidationError {
    fn from(err: glob::GlobError) -> Self {
        Self::Io(io::Error::new(err.error().kind(), err.to_string()))
    }
}
