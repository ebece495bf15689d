// tests/integration_tests/common.rs
use anyhow::Result;
use csvcheck::{Args, RunOutcome};
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn setup_test_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(temp_dir.path(), "data/a.csv", "x,y\n1,2\n3,4")?;
    create_test_file(temp_dir.path(), "data/b.csv", "x,y\n1")?;
    create_test_file(temp_dir.path(), "data/c.csv", "")?;
    create_test_file(temp_dir.path(), "data/d.csv", "id,name,amount\n1,a,2.5\n")?;
    create_test_file(temp_dir.path(), "data/readme.md", "# not data")?;

    Ok(temp_dir)
}

/// Runs the library entry point against `dir` and captures the report.
pub fn run_in(dir: &Path, args: Args) -> Result<(RunOutcome, String)> {
    let args = Args {
        dir: Some(dir.join("data")),
        ..args
    };
    let mut out = Vec::new();
    let outcome = csvcheck::run(&args, &mut out)?;
    Ok((outcome, String::from_utf8(out)?))
}
