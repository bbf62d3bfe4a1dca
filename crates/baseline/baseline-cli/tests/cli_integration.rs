//! Runs the `baseline-scan` binary against temporary trees.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn baseline_scan(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_baseline-scan"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn json_report_goes_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.js"), "const c = new AbortController();\n").unwrap();

    let output = baseline_scan(&[path_str(dir.path())]);
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["summary"]["baseline"], 1);
    assert_eq!(report["features"][0]["name"], "AbortController");
    assert_eq!(report["features"][0]["file"], "a.js");
    assert_eq!(report["features"][0]["line"], 1);
}

#[test]
fn csv_report_written_to_file_with_summary() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b.css"), "div:has(p) { gap: 1rem; }\n").unwrap();
    let out = tempfile::tempdir().unwrap();
    let report_path = out.path().join("report.csv");

    let output = baseline_scan(&[
        path_str(dir.path()),
        "--format",
        "csv",
        "-o",
        path_str(&report_path),
    ]);
    assert!(output.status.success());
    let csv = fs::read_to_string(&report_path).unwrap();
    assert_eq!(
        csv,
        "name,status,file,line\n:has,baseline,b.css,1\ngap,baseline,b.css,1\n"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Baseline"));
    assert!(stdout.contains("Report written to"));
}

#[test]
fn empty_directory_writes_no_report() {
    let dir = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let report_path = out.path().join("report.json");

    let output = baseline_scan(&[path_str(dir.path()), "-o", path_str(&report_path)]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No files found"));
    assert!(!report_path.exists());
}

#[test]
fn unwritable_output_still_prints_summary() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.js"), "fetch('/x');\n").unwrap();
    let out = tempfile::tempdir().unwrap();
    let report_path = out.path().join("missing-dir").join("report.json");

    let output = baseline_scan(&[path_str(dir.path()), "-o", path_str(&report_path)]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Files scanned"));
    assert!(stdout.contains("Baseline"));
    assert!(!stdout.contains("Report written to"));
    assert!(!report_path.exists());
}

#[test]
fn file_type_filter() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.js"), "fetch('/x');\n").unwrap();
    fs::write(dir.path().join("b.css"), "a { aspect-ratio: 1; }\n").unwrap();

    let output = baseline_scan(&[path_str(dir.path()), "-f", "css"]);
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let features = report["features"].as_array().unwrap();
    assert_eq!(features.len(), 1);
    assert_eq!(features[0]["file"], "b.css");
}

#[test]
fn unreadable_config_fails_with_code() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let output = baseline_scan(&[path_str(dir.path()), "-c", path_str(&missing)]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("[CONFIG_ERROR]"));
}

#[test]
fn registry_from_config_changes_classification() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.js"), "fetch('/x');\n").unwrap();
    fs::write(
        dir.path().join("registry.json"),
        r#"{ "features": { "fetch": { "status": { "baseline": false } } } }"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("baseline.toml"),
        "[registry]\npath = \"registry.json\"\n",
    )
    .unwrap();

    let output = baseline_scan(&[path_str(dir.path())]);
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["features"][0]["status"], "non-baseline");
}

#[test]
fn broken_registry_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.js"), "fetch('/x');\n").unwrap();
    fs::write(dir.path().join("registry.json"), "{ not json").unwrap();
    fs::write(
        dir.path().join("baseline.toml"),
        "[registry]\npath = \"registry.json\"\n",
    )
    .unwrap();

    let output = baseline_scan(&[path_str(dir.path())]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("[REGISTRY_ERROR]"));
}
