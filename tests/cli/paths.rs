use crate::cli::support::{roadnet, stdout_json, write_snapshot, DISCONNECTED_YAML};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_dijkstra_buenos_aires_to_mendoza() {
    roadnet()
        .args(["dijkstra", "Buenos Aires", "Mendoza"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Buenos Aires -> Córdoba -> Mendoza"))
        .stdout(predicate::str::contains("distance: 800 km"))
        .stdout(predicate::str::contains("explored:"));
}

#[test]
fn test_dijkstra_json() {
    let json = stdout_json(roadnet().args(["--format", "json", "dijkstra", "Buenos Aires", "Mendoza"]));
    assert_eq!(json["total_distance"], 800);
    assert_eq!(
        json["route"],
        serde_json::json!(["Buenos Aires", "Córdoba", "Mendoza"])
    );
    assert!(json["explored"]
        .as_array()
        .unwrap()
        .contains(&serde_json::json!("Buenos Aires")));
}

#[test]
fn test_dijkstra_unreachable_is_not_an_error() {
    let dir = tempdir().unwrap();
    let graph = write_snapshot(&dir, "roads.yaml", DISCONNECTED_YAML);

    roadnet()
        .arg("--graph")
        .arg(&graph)
        .args(["dijkstra", "A", "X"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no route from A to X"));

    let json = stdout_json(
        roadnet()
            .arg("--graph")
            .arg(&graph)
            .args(["--format", "json", "dijkstra", "A", "X"]),
    );
    assert_eq!(json["total_distance"], -1);
    assert_eq!(json["route"], serde_json::json!([]));
}

#[test]
fn test_shortest_path_matches_dijkstra() {
    roadnet()
        .args(["shortest-path", "Mar del Plata", "Mendoza"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Mar del Plata -> Buenos Aires -> Córdoba -> Mendoza",
        ))
        .stdout(predicate::str::contains("distance: 1200 km"));
}

#[test]
fn test_bounded_path_too_tight() {
    roadnet()
        .args(["bounded-path", "Mar del Plata", "Mendoza", "--max-nodes", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no route from Mar del Plata to Mendoza within 3 cities"));

    let json = stdout_json(roadnet().args([
        "--format",
        "json",
        "bounded-path",
        "Mar del Plata",
        "Mendoza",
        "-n",
        "3",
    ]));
    assert_eq!(json["total_distance"], -1);
}

#[test]
fn test_bounded_path_default_bound() {
    // Default bound of 5 cities is enough for the four-city route
    roadnet()
        .args(["bounded-path", "Mar del Plata", "Mendoza"])
        .assert()
        .success()
        .stdout(predicate::str::contains("distance: 1200 km"));
}

#[test]
fn test_bounded_path_huge_bound() {
    roadnet()
        .args([
            "bounded-path",
            "Rosario",
            "Mendoza",
            "--max-nodes",
            "18446744073709551615",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rosario -> Córdoba -> Mendoza"))
        .stdout(predicate::str::contains("distance: 800 km"));
}

#[test]
fn test_bounded_path_rejects_zero() {
    roadnet()
        .args(["bounded-path", "Rosario", "Mendoza", "--max-nodes", "0"])
        .assert()
        .code(2);
}

#[test]
fn test_bfs_and_dfs_visit_every_city() {
    roadnet()
        .args(["bfs", "Buenos Aires"])
        .assert()
        .success()
        .stdout("Buenos Aires\nCórdoba\nMar del Plata\nRosario\nMendoza\n");

    roadnet()
        .args(["dfs", "Buenos Aires"])
        .assert()
        .success()
        .stdout("Buenos Aires\nCórdoba\nMendoza\nRosario\nMar del Plata\n");
}

#[test]
fn test_bfs_partial_component() {
    let dir = tempdir().unwrap();
    let graph = write_snapshot(&dir, "roads.yaml", DISCONNECTED_YAML);

    let json = stdout_json(
        roadnet()
            .arg("--graph")
            .arg(&graph)
            .args(["--format", "json", "bfs", "X"]),
    );
    assert_eq!(json["order"], "breadth");
    assert_eq!(json["visited"], serde_json::json!(["X", "Y"]));

    roadnet()
        .arg("--graph")
        .arg(&graph)
        .args(["dfs", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reached 3 of 5 cities"));
}
