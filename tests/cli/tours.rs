use crate::cli::support::{roadnet, roadnet_in, stdout_json};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_greedy_tour_stops_early_on_sample() {
    roadnet()
        .args(["greedy-tour", "Buenos Aires"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Buenos Aires -> Rosario -> Córdoba -> Mendoza",
        ))
        .stdout(predicate::str::contains("distance: 1100 km"))
        .stdout(predicate::str::contains("stopped early"))
        .stdout(predicate::str::contains("open route"));
}

#[test]
fn test_greedy_tour_json_flags() {
    let json = stdout_json(roadnet().args(["--format", "json", "greedy-tour", "Rosario"]));
    assert_eq!(json["complete"], false);
    assert_eq!(json["route"][0], "Rosario");
}

#[test]
fn test_exact_tour_triangle() {
    roadnet()
        .args(["exact-tour", "Rosario", "Buenos Aires", "Córdoba"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Rosario -> Buenos Aires -> Córdoba -> Rosario",
        ))
        .stdout(predicate::str::contains("distance: 1100 km"));
}

#[test]
fn test_exact_tour_infeasible() {
    roadnet()
        .args(["exact-tour", "Buenos Aires", "Córdoba", "Mendoza"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no tour through"));

    let json = stdout_json(roadnet().args([
        "--format",
        "json",
        "exact-tour",
        "Buenos Aires",
        "Mendoza",
    ]));
    assert_eq!(json["total_distance"], -1);
}

#[test]
fn test_exact_tour_duplicate_city() {
    roadnet()
        .args(["exact-tour", "Rosario", "Rosario"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("duplicate city Rosario"));
}

#[test]
fn test_exact_tour_requires_cities() {
    roadnet().arg("exact-tour").assert().code(2);
}

#[test]
fn test_exact_tour_limit_from_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("roadnet.toml"),
        "[limits]\nmax_tour_cities = 2\n",
    )
    .unwrap();

    roadnet_in(dir.path())
        .args(["exact-tour", "Rosario", "Buenos Aires", "Córdoba"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("max_tour_cities"));
}
