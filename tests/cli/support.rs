use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get a Command for roadnet running outside any configured directory
pub fn roadnet() -> Command {
    let mut cmd = cargo_bin_cmd!("roadnet");
    cmd.env_remove("ROADNET_GRAPH")
        .env_remove("ROADNET_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Get a Command for roadnet with `dir` as working directory
pub fn roadnet_in(dir: &Path) -> Command {
    let mut cmd = roadnet();
    cmd.current_dir(dir);
    cmd
}

/// Write a snapshot file into `dir` and return its path
pub fn write_snapshot(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Two separate components: a triangle and a single road
#[allow(dead_code)]
pub const DISCONNECTED_YAML: &str = r#"
roads:
  - { from: A, to: B, km: 1 }
  - { from: B, to: C, km: 2 }
  - { from: C, to: A, km: 3 }
  - { from: X, to: Y, km: 4 }
"#;

/// Parse stdout of a successful command as JSON
pub fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}
