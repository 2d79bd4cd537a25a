use crate::cli::support::{roadnet, roadnet_in, write_snapshot};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const LINE_YAML: &str = r#"
roads:
  - { from: A, to: B, km: 1 }
  - { from: B, to: C, km: 1 }
  - { from: C, to: D, km: 1 }
  - { from: A, to: D, km: 10 }
"#;

#[test]
fn test_config_graph_is_relative_to_config_file() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("data")).unwrap();
    fs::write(dir.path().join("data/roads.yaml"), LINE_YAML).unwrap();
    fs::write(dir.path().join("roadnet.toml"), "graph = \"data/roads.yaml\"\n").unwrap();

    roadnet_in(dir.path())
        .arg("cities")
        .assert()
        .success()
        .stdout("A\nB\nC\nD\n");
}

#[test]
fn test_explicit_config_path() {
    let dir = tempdir().unwrap();
    write_snapshot(&dir, "roads.yaml", LINE_YAML);
    let config = dir.path().join("custom.toml");
    fs::write(&config, "graph = \"roads.yaml\"\n[search]\ndefault_max_nodes = 2\n").unwrap();

    // Only the direct road fits in two cities
    roadnet()
        .arg("--config")
        .arg(&config)
        .args(["bounded-path", "A", "D"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> D"))
        .stdout(predicate::str::contains("distance: 10 km"));

    roadnet()
        .arg("--config")
        .arg(&config)
        .args(["bounded-path", "A", "D", "--max-nodes", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> B -> C -> D"));
}

#[test]
fn test_graph_flag_overrides_config() {
    let dir = tempdir().unwrap();
    let graph = write_snapshot(&dir, "line.json", r#"{"roads": [{"from": "P", "to": "Q", "km": 5}]}"#);
    fs::write(dir.path().join("roadnet.toml"), "graph = \"missing.yaml\"\n").unwrap();

    roadnet_in(dir.path())
        .arg("--graph")
        .arg(&graph)
        .arg("cities")
        .assert()
        .success()
        .stdout("P\nQ\n");
}

#[test]
fn test_invalid_config_value() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("roadnet.toml"), "[limits]\nmax_cycle_nodes = 0\n").unwrap();

    roadnet_in(dir.path())
        .arg("cities")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("limits.max_cycle_nodes"));
}

#[test]
fn test_malformed_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("roadnet.toml"), "graph = [unclosed\n").unwrap();

    roadnet_in(dir.path())
        .arg("cities")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}
