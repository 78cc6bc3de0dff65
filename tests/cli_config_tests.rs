//! End-to-end tests for `catalyst config` and the global `--config` flag.

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

mod fixtures;
use fixtures::*;

/// Path to the catalyst binary
fn catalyst_bin() -> &'static str {
    env!("CARGO_BIN_EXE_catalyst")
}

/// Creates a Command with an isolated config directory.
fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(catalyst_bin());
    cmd.env("CATALYST_CONFIG_DIR", config_dir);
    cmd.args(args);
    cmd
}

#[test]
fn test_config_show_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let output = isolated_command(&["config", "show", "--json"], temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["server"]["host"], "127.0.0.1");
    assert_eq!(result["server"]["port"], 3000);
    assert_eq!(result["data"]["path"], "data/apps.yaml");
    assert_eq!(result["site"]["name"], "catalyst");
}

#[test]
fn test_config_init_then_show() {
    let temp_dir = TempDir::new().unwrap();

    let output = isolated_command(&["config", "init"], temp_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));
    assert!(temp_dir.path().join("config.toml").exists());

    // A second init refuses to overwrite
    let output = isolated_command(&["config", "init"], temp_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(1));

    let output = isolated_command(&["config", "init", "--force"], temp_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    let output = isolated_command(&["config", "show"], temp_dir.path())
        .output()
        .expect("Failed to execute command");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[server]"));
    assert!(stdout.contains("port = 3000"));
}

#[test]
fn test_config_file_sets_data_path() {
    let (data_path, _data_dir) = sample_data_file();
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("catalyst.toml");
    fs::write(
        &config_path,
        format!("[data]\npath = {:?}\n", data_path.to_str().unwrap()),
    )
    .unwrap();

    let output = isolated_command(
        &["--config", config_path.to_str().unwrap(), "list", "--json"],
        temp_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["categories"].as_array().unwrap().len(), 2);
}

#[test]
fn test_broken_config_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("catalyst.toml");
    fs::write(&config_path, "[server\n").unwrap();

    let output = isolated_command(
        &["--config", config_path.to_str().unwrap(), "list"],
        temp_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to parse config file"));
}
