// src/config.rs
use anyhow::{Context as _, Result, bail};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::Args;
use crate::core::discovery::exclude::split_patterns;
use crate::core::parser::{FieldCount, ParseOptions};

pub const CONFIG_FILE_NAME: &str = ".csvcheck.toml";

/// Contents of a `.csvcheck.toml` file. Every key is optional.
#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub dir: Option<PathBuf>,
    pub pattern: Option<String>,
    pub exclude: Vec<String>,
    pub delimiter: Option<char>,
    pub flexible: bool,
    pub strict: bool,
    pub column_filter: Option<String>,
    pub require_files: bool,
    pub with_path: bool,
    pub summary: bool,
}

/// Effective settings for one run, after merging the config file and the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub dir: PathBuf,
    pub pattern: String,
    pub exclude: Vec<String>,
    pub delimiter: u8,
    pub field_count: FieldCount,
    pub column_filter: Option<String>,
    pub require_files: bool,
    pub with_path: bool,
    pub summary: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data"),
            pattern: String::from("*.csv"),
            exclude: Vec::new(),
            delimiter: b',',
            field_count: FieldCount::Lenient,
            column_filter: None,
            require_files: false,
            with_path: false,
            summary: false,
        }
    }
}

impl Settings {
    #[must_use]
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            delimiter: self.delimiter,
            field_count: self.field_count,
            column_filter: self.column_filter.clone(),
        }
    }
}

/// Searches `start` and then each parent directory for a `.csvcheck.toml`.
#[must_use]
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current_dir = start.to_path_buf();
    let mut visited = HashSet::new();

    while visited.insert(current_dir.clone()) {
        let candidate = current_dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break,
        }
    }

    None
}

/// Reads and parses a config file.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read
/// * The file is not valid TOML or contains unknown keys
pub fn load_config(path: &Path) -> Result<FileConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

fn delimiter_byte(delimiter: char) -> Result<u8> {
    if !delimiter.is_ascii() {
        bail!("Delimiter must be a single ASCII character, got {delimiter:?}");
    }
    u8::try_from(delimiter).with_context(|| format!("Invalid delimiter: {delimiter:?}"))
}

/// Builds the effective settings for a run started in `cwd`.
///
/// Precedence is CLI, then config file, then defaults. A relative `dir` from
/// the config file is taken relative to the file's own directory; a relative
/// `--dir` stays relative to the working directory.
///
/// # Errors
///
/// This function may return an error if:
/// * An explicit `--config` file is missing or invalid
/// * A discovered `.csvcheck.toml` is invalid
/// * The delimiter is not a single ASCII character
/// * Both strict and flexible field counts are requested
pub fn resolve_settings(args: &Args, cwd: &Path) -> Result<Settings> {
    let config_path = match &args.config {
        Some(path) => Some(path.clone()),
        None => find_config_file(cwd),
    };
    let (file, base_dir) = match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let file = load_config(&path)?;
            let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
            (file, base_dir)
        }
        None => (FileConfig::default(), PathBuf::new()),
    };

    let defaults = Settings::default();

    let mut dir = match (&args.dir, file.dir) {
        (Some(dir), _) => dir.clone(),
        (None, Some(dir)) => base_dir.join(dir),
        (None, None) => defaults.dir,
    };
    // An empty path would turn the pattern into `/<pattern>`
    if dir.as_os_str().is_empty() {
        dir = PathBuf::from(".");
    }

    let mut exclude = file.exclude;
    if let Some(list) = &args.exclude {
        exclude.extend(split_patterns(list));
    }

    let field_count = match (args.strict || file.strict, args.flexible || file.flexible) {
        (true, true) => bail!("Options `strict` and `flexible` cannot be combined"),
        (true, false) => FieldCount::Strict,
        (false, true) => FieldCount::Flexible,
        (false, false) => FieldCount::Lenient,
    };

    let delimiter = match args.delimiter.or(file.delimiter) {
        Some(c) => delimiter_byte(c)?,
        None => defaults.delimiter,
    };

    Ok(Settings {
        dir,
        pattern: args
            .pattern
            .clone()
            .or(file.pattern)
            .unwrap_or(defaults.pattern),
        exclude,
        delimiter,
        field_count,
        column_filter: args.column_filter.clone().or(file.column_filter),
        require_files: args.require_files || file.require_files,
        with_path: args.with_path || file.with_path,
        summary: args.summary || file.summary,
    })
}
