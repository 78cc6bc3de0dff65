//! Shared test fixtures for integration tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A small catalog with one dangling category reference (`orphan`).
pub const SAMPLE_YAML: &str = r#"categories:
  - id: design
    name: Design
    description: Visual tools
  - id: dev
    name: Developer Tools
    description: Editors and terminals
apps:
  - id: figma
    name: Figma
    category: design
    icon: /icons/figma.svg
    url: https://figma.com
    description: Collaborative interface design
    overview: Design and prototype together
    pros: [Realtime, Components, Free tier]
    cons: [Pricey]
    screenshots:
      - /shots/figma.png
  - id: penpot
    name: Penpot
    category: design
    url: https://penpot.app
    description: Open source design
  - id: vscode
    name: VS Code
    category: dev
    url: https://code.visualstudio.com
    description: Extensible editor
    overview: Great for design systems work too
  - id: orphan
    name: Orphan
    category: missing
    url: https://example.com
    description: Category does not exist
"#;

/// A catalog that fails validation (duplicate app id).
pub const DUPLICATE_YAML: &str = r#"categories:
  - id: design
    name: Design
apps:
  - id: figma
    name: Figma
    category: design
    url: https://figma.com
    description: One
  - id: figma
    name: Figma Again
    category: design
    url: https://figma.com
    description: Two
"#;

/// A catalog with only a warning (blank description).
pub const WARNING_YAML: &str = r#"categories:
  - id: design
    name: Design
apps:
  - id: figma
    name: Figma
    category: design
    url: https://figma.com
"#;

/// Writes `content` as `apps.yaml` in a fresh temp directory.
///
/// Keep the returned `TempDir` alive for as long as the file is needed.
pub fn write_data_file(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("apps.yaml");
    fs::write(&path, content).expect("Failed to write data file");
    (path, temp_dir)
}

/// Writes the sample catalog.
pub fn sample_data_file() -> (PathBuf, TempDir) {
    write_data_file(SAMPLE_YAML)
}
