use anyhow::Result;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(&file_path)?;
    file.write_all(content.as_bytes())?;
    Ok(file_path)
}

/// A `data/` directory with one file for each interesting case, plus files the
/// default pattern must not pick up.
pub fn setup_test_directory() -> Result<TempDir> {
    let dir = TempDir::new()?;

    create_test_file(&dir, "data/good.csv", "x,y\n1,2\n3,4\n")?;
    create_test_file(&dir, "data/header_only.csv", "a,b,c\n")?;
    create_test_file(&dir, "data/empty.csv", "")?;
    create_test_file(&dir, "data/ragged.csv", "x,y\n1\n")?;

    create_test_file(&dir, "data/notes.txt", "not a csv")?;
    create_test_file(&dir, "data/nested/deep.csv", "x\n1\n")?;
    create_test_file(&dir, "data/.hidden.csv", "x\n1\n")?;

    Ok(dir)
}
