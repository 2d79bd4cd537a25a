use crate::cli::support::{roadnet, write_snapshot};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_unknown_city_exit_code() {
    roadnet()
        .args(["dijkstra", "Atlantis", "Mendoza"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("error: city not found: Atlantis"));
}

#[test]
fn test_unknown_city_json_envelope() {
    let output = roadnet()
        .args(["--format", "json", "bfs", "Atlantis"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "unknown_vertex");
    assert_eq!(json["error"]["code"], 3);
}

#[test]
fn test_quiet_suppresses_error_text() {
    roadnet()
        .args(["--quiet", "greedy-tour", "Atlantis"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_usage_error_json_envelope() {
    let output = roadnet()
        .args(["--format", "json", "dijkstra", "OnlyOne"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_unknown_output_format() {
    roadnet()
        .args(["--format", "xml", "cities"])
        .assert()
        .code(2);
}

#[test]
fn test_empty_graph_rejected() {
    let dir = tempdir().unwrap();
    let graph = write_snapshot(&dir, "empty.yaml", "roads: []\n");

    roadnet()
        .arg("--graph")
        .arg(&graph)
        .arg("cities")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("graph is empty"));
}

#[test]
fn test_unknown_snapshot_extension() {
    let dir = tempdir().unwrap();
    let graph = write_snapshot(&dir, "roads.csv", "A,B,1\n");

    roadnet()
        .arg("--graph")
        .arg(&graph)
        .arg("cities")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn test_missing_snapshot_file() {
    let dir = tempdir().unwrap();

    roadnet()
        .arg("--graph")
        .arg(dir.path().join("absent.yaml"))
        .arg("cities")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read snapshot"));
}

#[test]
fn test_self_loop_in_snapshot() {
    let dir = tempdir().unwrap();
    let graph = write_snapshot(&dir, "loop.yaml", "roads:\n  - { from: A, to: A, km: 1 }\n");

    roadnet()
        .arg("--graph")
        .arg(&graph)
        .arg("cities")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("self loop"));
}
