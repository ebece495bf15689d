// src/models.rs
pub mod file_entry;
pub mod parse_result;
pub mod run_outcome;

pub use file_entry::{FileEntry, FileReport};
pub use parse_result::ParseResult;
pub use run_outcome::RunOutcome;
