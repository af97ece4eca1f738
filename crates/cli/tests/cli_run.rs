use assert_cmd::Command;
use growthsum_sheet::{Book, CellValue, Sheet};
use std::path::Path;
use tempfile::tempdir;

fn section(header: &[&str], values: Vec<CellValue>) -> Sheet {
    Sheet::from_data(vec![
        header.iter().map(|h| CellValue::from(*h)).collect(),
        values,
    ])
}

fn write_experiment(dir: &Path, name: &str) {
    let mut book = Book::new();
    book.add_sheet(
        "Overview",
        section(
            &["Sample", "Date", "Film", "Substrate", "Substrate T", "Carrier Gas", "Growth Time"],
            vec![
                "A1".into(),
                "2024-01-01".into(),
                "GaN".into(),
                "sapphire".into(),
                "1050".into(),
                "H2".into(),
                "120".into(),
            ],
        ),
    )
    .unwrap();
    book.add_sheet("GrowthRun", section(&["Reactor"], vec!["R2".into()]))
        .unwrap();
    book.add_sheet("AFMReflectanceSEM", section(&["Thickness"], vec!["600".into()]))
        .unwrap();
    book.add_sheet("HRXRD", section(&["Phase"], vec!["cubic".into()]))
        .unwrap();
    book.add_sheet("SampleCut", section(&["Collaborator"], vec!["X".into()]))
        .unwrap();
    book.save_as_xlsx(dir.join(format!("{name}.xlsx"))).unwrap();
}

#[test]
fn cli_help_smoke() {
    let mut cmd = Command::cargo_bin("growthsum").unwrap();
    cmd.arg("--help");
    cmd.assert().success();
}

#[test]
fn cli_requires_input_file() {
    let mut cmd = Command::cargo_bin("growthsum").unwrap();
    cmd.assert().failure();
}

#[test]
fn cli_missing_input_fails() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("growthsum").unwrap();
    cmd.current_dir(dir.path()).args(["--input-file", "absent"]);

    let output = cmd.output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Input file not found"));
}

#[test]
fn cli_writes_summary_in_working_directory() {
    let dir = tempdir().unwrap();
    write_experiment(dir.path(), "run1");

    let mut cmd = Command::cargo_bin("growthsum").unwrap();
    cmd.current_dir(dir.path()).args(["--input-file", "run1"]);
    cmd.assert().success();

    assert!(dir.path().join("summary_12cols.xlsx").is_file());
}

#[test]
fn cli_json_report() {
    let input = tempdir().unwrap();
    let output_dir = tempdir().unwrap();
    write_experiment(input.path(), "run1");

    let mut cmd = Command::cargo_bin("growthsum").unwrap();
    cmd.arg("--input-file")
        .arg("run1")
        .arg("--input-dir")
        .arg(input.path())
        .arg("--output-dir")
        .arg(output_dir.path())
        .args(["--format", "json", "--on-schema-mismatch", "reject"]);

    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["action"]["action"], "created");
    assert_eq!(report["summary_rows"], 1);
    assert_eq!(report["record"]["Sample"], "A1");
    assert_eq!(report["record"]["Growth Rate"], 5.0);
    assert_eq!(report["record"]["Notes"], "put notes here");
    assert!(output_dir.path().join("summary_12cols.xlsx").is_file());
}

#[test]
fn cli_dry_run_writes_nothing() {
    let dir = tempdir().unwrap();
    write_experiment(dir.path(), "run1");

    let mut cmd = Command::cargo_bin("growthsum").unwrap();
    cmd.current_dir(dir.path())
        .args(["--input-file", "run1", "--dry-run"]);
    cmd.assert().success();

    assert!(!dir.path().join("summary_12cols.xlsx").exists());
}
