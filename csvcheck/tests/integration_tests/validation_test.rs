// tests/integration_tests/validation_test.rs
use super::common::{create_test_file, run_in, setup_test_directory};
use anyhow::Result;
use csvcheck::Args;
use tempfile::TempDir;

#[test]
fn test_well_formed_files_only() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "data/a.csv", "x,y\n1,2\n3,4")?;
    create_test_file(temp_dir.path(), "data/b.csv", "k\nv1\nv2\nv3\n")?;

    let (outcome, output) = run_in(temp_dir.path(), Args::default())?;

    assert_eq!(output, "OK - 2 rows, 2 cols\nOK - 3 rows, 1 cols\n");
    assert_eq!(outcome.exit_code(), 0);
    Ok(())
}

#[test]
fn test_one_bad_file_does_not_stop_the_scan() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    let (outcome, output) = run_in(temp_dir.path(), Args::default())?;
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 4, "Every csv file gets a line: {output}");
    assert_eq!(lines[0], "OK - 2 rows, 2 cols");
    assert_eq!(lines[1], "OK - 1 rows, 2 cols", "b.csv's short row is padded");
    assert_eq!(lines[2], "Failed - no columns to parse from file");
    assert_eq!(lines[3], "OK - 1 rows, 3 cols");
    assert_eq!(outcome.exit_code(), 1);
    assert_eq!((outcome.passed, outcome.failed), (3, 1));
    Ok(())
}

#[test]
fn test_strict_rejects_short_records() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let args = Args {
        strict: true,
        with_path: true,
        ..Args::default()
    };

    let (_, output) = run_in(temp_dir.path(), args)?;
    let b_line = output
        .lines()
        .find(|line| line.contains("b.csv"))
        .unwrap_or_default();

    assert!(b_line.contains("b.csv: Failed - "), "got {b_line}");
    Ok(())
}

#[test]
fn test_long_record_fails_unless_flexible() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "data/wide.csv", "x,y\n1,2\n3,4,5\n")?;

    let (outcome, output) = run_in(temp_dir.path(), Args::default())?;
    assert_eq!(output, "Failed - Expected 2 fields in line 3, saw 3\n");
    assert_eq!(outcome.exit_code(), 1);

    let args = Args {
        flexible: true,
        ..Args::default()
    };
    let (outcome, output) = run_in(temp_dir.path(), args)?;
    assert_eq!(output, "OK - 2 rows, 2 cols\n");
    assert_eq!(outcome.exit_code(), 0);
    Ok(())
}

#[test]
fn test_zero_byte_file_alone_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "data/c.csv", "")?;

    let (outcome, output) = run_in(temp_dir.path(), Args::default())?;

    assert_eq!(output, "Failed - no columns to parse from file\n");
    assert_eq!(outcome.exit_code(), 1);
    Ok(())
}

#[test]
fn test_column_filter_does_not_end_the_scan() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let args = Args {
        column_filter: Some(String::from("a")),
        summary: true,
        ..Args::default()
    };

    let (outcome, output) = run_in(temp_dir.path(), args)?;
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "Skipped - no column name contains \"a\"");
    assert_eq!(lines[3], "OK - 1 rows, 3 cols", "d.csv has a matching column");
    assert_eq!(lines[4], "4 files checked: 1 ok, 1 failed, 2 skipped");
    assert_eq!(outcome.skipped, 2);
    Ok(())
}

#[test]
fn test_running_twice_gives_same_result() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    let first = run_in(temp_dir.path(), Args::default())?;
    let second = run_in(temp_dir.path(), Args::default())?;

    assert_eq!(first, second);
    Ok(())
}
