// src/models/run_outcome.rs

use super::ParseResult;

/// Accumulated over a whole run. `any_failure` alone decides the exit status.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub any_failure: bool,
    pub checked: u64,
    pub passed: u64,
    pub failed: u64,
    pub skipped: u64,
}

impl RunOutcome {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            any_failure: false,
            checked: 0,
            passed: 0,
            failed: 0,
            skipped: 0,
        }
    }

    #[inline]
    pub fn record(&mut self, result: &ParseResult) {
        self.checked = self.checked.saturating_add(1);
        match result {
            ParseResult::Success { .. } => self.passed = self.passed.saturating_add(1),
            ParseResult::Failure { .. } => {
                self.failed = self.failed.saturating_add(1);
                self.any_failure = true;
            }
            ParseResult::Skipped { .. } => self.skipped = self.skipped.saturating_add(1),
        }
    }

    #[inline]
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        if self.any_failure { 1 } else { 0 }
    }
}
