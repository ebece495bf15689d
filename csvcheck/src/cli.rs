// src/cli.rs
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Every option is optional: with none given the tool checks `data/*.csv`
/// relative to the working directory.
#[derive(Parser, Debug, Default, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory holding the files to check [default: data]
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// File name pattern inside the directory [default: *.csv]
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// File name patterns to leave out (comma-separated, e.g. "*.{bak,tmp}.csv,!keep.bak.csv")
    #[arg(short, long)]
    pub exclude: Option<String>,

    /// Field delimiter, a single ASCII character [default: ,]
    #[arg(long)]
    pub delimiter: Option<char>,

    /// Accept records with more fields than the header
    #[arg(long, conflicts_with = "strict")]
    pub flexible: bool,

    /// Require every record to have exactly as many fields as the header
    #[arg(long)]
    pub strict: bool,

    /// Only check files with a column name containing this text; others are skipped
    #[arg(long)]
    pub column_filter: Option<String>,

    /// Fail when no file matches the pattern
    #[arg(long)]
    pub require_files: bool,

    /// Prefix each line with the file path
    #[arg(long)]
    pub with_path: bool,

    /// Print a summary line after the per-file lines
    #[arg(long)]
    pub summary: bool,

    /// Config file to use instead of searching for .csvcheck.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
