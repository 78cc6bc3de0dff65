//! End-to-end tests for `catalyst validate`.

use std::process::Command;

mod fixtures;
use fixtures::*;

/// Path to the catalyst binary
fn catalyst_bin() -> &'static str {
    env!("CARGO_BIN_EXE_catalyst")
}

fn validate(args: &[&str]) -> std::process::Output {
    Command::new(catalyst_bin())
        .arg("validate")
        .args(args)
        .env("CATALYST_CONFIG_DIR", "/nonexistent/catalyst-config")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_validate_with_warnings_passes() {
    let (path, _temp_dir) = sample_data_file();
    let output = validate(&["--data", path.to_str().unwrap()]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "Warnings alone should exit 0. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓ Validation passed"));
    assert!(stdout.contains("[orphan] Category 'missing' does not exist"));
}

#[test]
fn test_validate_json() {
    let (path, _temp_dir) = sample_data_file();
    let output = validate(&["--data", path.to_str().unwrap(), "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let result: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output");

    assert_eq!(result["valid"], true);
    assert_eq!(result["categories"], 2);
    assert_eq!(result["apps"], 4);
    let issues = result["issues"].as_array().unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0]["severity"], "warning");
    assert_eq!(issues[0]["kind"], "dangling_category");
    assert_eq!(issues[0]["subject"], "orphan");
}

#[test]
fn test_validate_strict_fails_on_warnings() {
    let (path, _temp_dir) = write_data_file(WARNING_YAML);
    let output = validate(&["--data", path.to_str().unwrap(), "--strict"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("strict"));
}

#[test]
fn test_validate_duplicate_ids_fail() {
    let (path, _temp_dir) = write_data_file(DUPLICATE_YAML);
    let output = validate(&["--data", path.to_str().unwrap(), "--json"]);

    assert_eq!(output.status.code(), Some(1));
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["valid"], false);
    assert_eq!(result["issues"][0]["kind"], "duplicate_app_id");
}

#[test]
fn test_validate_missing_file() {
    let output = validate(&["--data", "/nonexistent/apps.yaml"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read data file"));
}

#[test]
fn test_validate_malformed_yaml() {
    let (path, _temp_dir) = write_data_file("categories: [\n");
    let output = validate(&["--data", path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(2));
}
