// src/core/parser.rs
use csv::{ReaderBuilder, StringRecord};
use std::path::Path;

use crate::error::ValidationError;
use crate::models::ParseResult;

/// How records whose field count differs from the header are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldCount {
    /// Short records are padded and counted; records longer than the header fail.
    #[default]
    Lenient,
    /// Every record must have exactly as many fields as the header.
    Strict,
    /// Any field count is accepted.
    Flexible,
}

/// How a single file is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    pub delimiter: u8,
    pub field_count: FieldCount,
    /// Skip files whose header has no column name containing this substring.
    pub column_filter: Option<String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            field_count: FieldCount::default(),
            column_filter: None,
        }
    }
}

/// Parses one file as delimited text with a header row.
///
/// Never fails: every error is folded into [`ParseResult::Failure`]. The file
/// is closed before this returns.
#[must_use]
pub fn parse_file(path: &Path, opts: &ParseOptions) -> ParseResult {
    read_table(path, opts).unwrap_or_else(ParseResult::from)
}

fn read_table(path: &Path, opts: &ParseOptions) -> Result<ParseResult, ValidationError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(opts.delimiter)
        .flexible(opts.field_count != FieldCount::Strict)
        .from_path(path)?;

    let headers = reader.headers()?;
    let columns = headers.len();
    if columns == 0 {
        return Err(ValidationError::NoColumns);
    }

    if let Some(needle) = opts.column_filter.as_deref()
        && !headers.iter().any(|name| name.contains(needle))
    {
        return Ok(ParseResult::Skipped {
            reason: format!("no column name contains \"{needle}\""),
        });
    }

    let mut record = StringRecord::new();
    let mut rows: u64 = 0;
    while reader.read_record(&mut record)? {
        if opts.field_count == FieldCount::Lenient && record.len() > columns {
            return Err(ValidationError::TooManyFields {
                line: record.position().map_or(0, csv::Position::line),
                expected: columns,
                found: record.len(),
            });
        }
        rows = rows.saturating_add(1);
    }

    Ok(ParseResult::Success { rows, columns })
}
