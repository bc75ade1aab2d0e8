//! End-to-end tests of the csv-synth binary.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const SIGNUPS: &str = "\
id,name,signup_date,notes
A100,Alice,2024-01-01,first
A200,Bob,2024-02-10,second
";

fn csv_synth(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_csv-synth"))
        .args(args)
        .env_remove("CSV_SYNTH_SPEC")
        .env_remove("CSV_SYNTH_SEED")
        .env_remove("CSV_SYNTH_TIMEOUT_SECS")
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to run csv-synth")
}

fn write_input(dir: &Path) -> String {
    let path = dir.join("signups.csv");
    std::fs::write(&path, SIGNUPS).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_generate_from_spec_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(temp_dir.path());
    let output = temp_dir.path().join("out.csv");

    let result = csv_synth(&[
        "generate",
        "-i",
        &input,
        "-o",
        output.to_str().unwrap(),
        "--spec",
        "tests/fixtures/signup_spec.yaml",
    ]);

    assert!(result.status.success(), "{result:?}");
    assert_eq!(
        String::from_utf8_lossy(&result.stdout).trim(),
        "File saved with deletions. Wrote 7 rows."
    );
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "\
id,name,signup_date
A100,Alice,2024-01-01
A101,Alice,2024-01-02
A102,Alice,2024-01-03
A200,Bob,2024-02-10
A201,Bob,2024-02-11
A202,Bob,2024-02-12
"
    );
}

#[test]
fn test_generate_with_flags_only() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(temp_dir.path());
    let output = temp_dir.path().join("out.csv");

    let result = csv_synth(&[
        "generate",
        "-i",
        &input,
        "-o",
        output.to_str().unwrap(),
        "--first-row-only",
        "-n",
        "3",
        "--number-step",
        "-10",
        "--increment",
        "id",
        "--value-list",
        "name=Carol|Dave",
        "--seed",
        "7",
    ]);

    assert!(result.status.success(), "{result:?}");
    assert_eq!(
        String::from_utf8_lossy(&result.stdout).trim(),
        "Wrote 5 rows to the new file."
    );

    let written = std::fs::read_to_string(&output).unwrap();
    let rows: Vec<&str> = written.lines().collect();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[1], "A100,Alice,2024-01-01,first");
    for (row, id) in rows[2..].iter().zip(["A090", "A080", "A070"]) {
        let fields: Vec<&str> = row.split(',').collect();
        assert_eq!(fields[0], id);
        assert!(["Carol", "Dave"].contains(&fields[1]), "{row}");
    }
}

#[test]
fn test_count_and_header() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(temp_dir.path());

    let count = csv_synth(&["count", "-i", &input]);
    assert!(count.status.success());
    assert_eq!(String::from_utf8_lossy(&count.stdout).trim(), "2");

    let header = csv_synth(&["header", "-i", &input]);
    assert!(header.status.success());
    assert_eq!(
        String::from_utf8_lossy(&header.stdout)
            .lines()
            .collect::<Vec<_>>(),
        vec!["id", "name", "signup_date", "notes"]
    );
}

#[test]
fn test_failures_report_error_kind() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(temp_dir.path());
    let output = temp_dir.path().join("out.csv");

    let zero_rows = csv_synth(&[
        "generate",
        "-i",
        &input,
        "-o",
        output.to_str().unwrap(),
        "-n",
        "0",
    ]);
    assert!(!zero_rows.status.success());
    let stderr = String::from_utf8_lossy(&zero_rows.stderr);
    assert!(
        stderr.contains("Error [invalid_configuration]:"),
        "{stderr}"
    );

    let missing = csv_synth(&[
        "count",
        "-i",
        temp_dir.path().join("missing.csv").to_str().unwrap(),
    ]);
    assert!(!missing.status.success());
    assert!(String::from_utf8_lossy(&missing.stderr).contains("Error: Failed to open"));

    let bad_range = csv_synth(&[
        "generate",
        "-i",
        &input,
        "-o",
        output.to_str().unwrap(),
        "--delete-rows",
        "5-2",
    ]);
    assert!(!bad_range.status.success());
}
