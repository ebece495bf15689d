// src/core/discovery/exclude.rs
use anyhow::{Context as _, Result, bail};
use glob::Pattern;
use std::path::Path;

/// File-name patterns that remove files from a scan.
#[derive(Debug, Default)]
pub struct Excludes {
    /// (pattern, is_negation). A negated pattern re-includes a file that
    /// another pattern excluded.
    patterns: Vec<(Pattern, bool)>,
}

impl Excludes {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Builds the set from a list of raw pattern strings.
    ///
    /// # Errors
    ///
    /// Returns an error if any pattern is not valid glob syntax.
    pub fn from_patterns<S: AsRef<str>>(raw: &[S]) -> Result<Self> {
        let mut excludes = Self::new();
        for pattern in raw {
            excludes.add_pattern(pattern.as_ref())?;
        }
        Ok(excludes)
    }

    /// Adds one pattern.
    ///
    /// Handles:
    /// - blank entries and `#` comments (ignored)
    /// - negation with a `!` prefix
    /// - alternation groups like `*.{bak,tmp}.csv`
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The pattern contains a path separator
    /// * A `{` group is not closed
    /// * The pattern contains invalid glob syntax
    pub fn add_pattern(&mut self, pattern: &str) -> Result<()> {
        let pattern = pattern.trim();
        if pattern.is_empty() || pattern.starts_with('#') {
            return Ok(());
        }

        let (pattern, is_negation) = pattern
            .strip_prefix('!')
            .map_or((pattern, false), |stripped| (stripped, true));

        if pattern.contains('/') || pattern.contains('\\') {
            bail!("Exclude patterns match file names only: {pattern}");
        }

        if let Some((prefix, suffix)) = pattern.split_once('{') {
            let Some((alternatives, rest)) = suffix.split_once('}') else {
                bail!("Invalid pattern: missing closing brace in {pattern}");
            };
            for alternative in alternatives.split(',').map(str::trim) {
                self.push(&format!("{prefix}{alternative}{rest}"), is_negation)?;
            }
            return Ok(());
        }

        self.push(pattern, is_negation)
    }

    fn push(&mut self, pattern: &str, is_negation: bool) -> Result<()> {
        let compiled =
            Pattern::new(pattern).with_context(|| format!("Invalid pattern: {pattern}"))?;
        self.patterns.push((compiled, is_negation));
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether the file at `path` should be left out, judged by its file name.
    pub fn matches(&self, path: impl AsRef<Path>) -> bool {
        let Some(filename) = path.as_ref().file_name().map(|f| f.to_string_lossy()) else {
            return false;
        };

        // Negations win over everything else
        if self
            .patterns
            .iter()
            .any(|(pattern, is_neg)| *is_neg && pattern.matches(&filename))
        {
            return false;
        }

        self.patterns
            .iter()
            .any(|(pattern, is_neg)| !*is_neg && pattern.matches(&filename))
    }
}

/// Splits a comma-separated pattern list, leaving commas inside `{...}` groups
/// alone so `*.{bak,tmp}.csv` stays one pattern.
#[must_use]
pub fn split_patterns(list: &str) -> Vec<String> {
    let mut patterns = Vec::new();
    let mut current = String::new();
    let mut depth: usize = 0;

    for c in list.chars() {
        match c {
            '{' => depth = depth.saturating_add(1),
            '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                patterns.push(std::mem::take(&mut current));
                continue;
            }
            _ => {}
        }
        current.push(c);
    }
    patterns.push(current);
    patterns
}
