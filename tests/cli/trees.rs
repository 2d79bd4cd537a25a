use crate::cli::support::{roadnet, stdout_json, write_snapshot, DISCONNECTED_YAML};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_prim_and_kruskal_total() {
    for command in ["prim", "kruskal"] {
        roadnet()
            .arg(command)
            .assert()
            .success()
            .stdout(predicate::str::contains("total: 1500 km"))
            .stdout(predicate::str::contains("Buenos Aires - Rosario: 300 km"));
    }
}

#[test]
fn test_kruskal_json() {
    let json = stdout_json(roadnet().args(["--format", "json", "kruskal"]));
    assert_eq!(json["total_cost"], 1500);
    let edges = json["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 4);
    assert_eq!(edges[0]["weight"], 300);
}

#[test]
fn test_disconnected_graph_fails() {
    let dir = tempdir().unwrap();
    let graph = write_snapshot(&dir, "roads.yaml", DISCONNECTED_YAML);

    roadnet()
        .arg("--graph")
        .arg(&graph)
        .arg("kruskal")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("graph is disconnected"));

    roadnet()
        .arg("--graph")
        .arg(&graph)
        .args(["--format", "json", "prim"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"disconnected_graph\""));
}

#[test]
fn test_allow_partial_prints_forest() {
    let dir = tempdir().unwrap();
    let graph = write_snapshot(&dir, "roads.yaml", DISCONNECTED_YAML);

    // Kruskal spans both components: 1 + 2 + 4
    roadnet()
        .arg("--graph")
        .arg(&graph)
        .args(["kruskal", "--allow-partial"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total: 7 km"));

    // Prim only grows the first city's component
    roadnet()
        .arg("--graph")
        .arg(&graph)
        .args(["prim", "--allow-partial"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total: 3 km"));
}
