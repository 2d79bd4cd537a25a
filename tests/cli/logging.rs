use crate::cli::support::roadnet;
use predicates::prelude::*;

#[test]
fn test_log_level_debug_shows_algorithm_events() {
    roadnet()
        .args(["--log-level", "debug", "dijkstra", "Rosario", "Mendoza"])
        .assert()
        .success()
        .stderr(predicate::str::contains("dijkstra_complete"));
}

#[test]
fn test_default_level_hides_debug_events() {
    roadnet()
        .args(["dijkstra", "Rosario", "Mendoza"])
        .assert()
        .success()
        .stderr(predicate::str::contains("dijkstra_complete").not());
}

#[test]
fn test_verbose_shows_debug_events() {
    roadnet()
        .args(["--verbose", "kruskal"])
        .assert()
        .success()
        .stderr(predicate::str::contains("kruskal_complete"))
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let output = roadnet()
        .args(["--log-level", "debug", "--log-json", "bfs", "Rosario"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let line = stderr
        .lines()
        .find(|l| l.contains("bfs_complete"))
        .expect("bfs_complete event");
    let json: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(json["fields"]["message"], "bfs_complete");
}

#[test]
fn test_env_filter_override() {
    roadnet()
        .env("ROADNET_LOG", "roadnet_core=debug")
        .args(["cycles", "Rosario"])
        .assert()
        .success()
        .stderr(predicate::str::contains("cycles_complete"));
}
