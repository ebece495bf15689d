// src/models/parse_result.rs

use crate::error::ValidationError;

/// What parsing a single file produced.
#[derive(Debug)]
pub enum ParseResult {
    Success { rows: u64, columns: usize },
    Failure { error: ValidationError },
    /// Only produced when a column filter is configured.
    Skipped { reason: String },
}

impl ParseResult {
    #[inline]
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }
}

impl From<ValidationError> for ParseResult {
    fn from(error: ValidationError) -> Self {
        Self::Failure { error }
    }
}
