use crate::cli::support::{roadnet, stdout_json};
use predicates::prelude::*;

#[test]
fn test_cities_sorted_by_name() {
    roadnet()
        .arg("cities")
        .assert()
        .success()
        .stdout("Buenos Aires\nCórdoba\nMar del Plata\nMendoza\nRosario\n");
}

#[test]
fn test_roads_listing() {
    roadnet()
        .arg("roads")
        .assert()
        .success()
        .stdout(predicate::str::contains("Buenos Aires - Córdoba: 400 km"))
        .stdout(predicate::str::contains("5 cities, 5 roads"));

    roadnet()
        .args(["--quiet", "roads"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5 cities").not());
}

#[test]
fn test_sort_distance() {
    roadnet()
        .args(["sort-distance", "Buenos Aires"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Rosario\t300 km\n"))
        .stdout(predicate::str::ends_with("Mendoza\t-\n"));
}

#[test]
fn test_sort_distance_json_sentinel() {
    let json = stdout_json(roadnet().args(["--format", "json", "sort-distance", "Córdoba"]));
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[3]["city"], "Mar del Plata");
    assert_eq!(entries[3]["distance"], -1);
}

#[test]
fn test_cycles_through_buenos_aires() {
    roadnet()
        .args(["cycles", "Buenos Aires", "--max-nodes", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Buenos Aires -> Córdoba -> Rosario -> Buenos Aires (1100 km)",
        ))
        .stdout(predicate::str::contains(
            "Buenos Aires -> Rosario -> Córdoba -> Buenos Aires (1100 km)",
        ));
}

#[test]
fn test_cycles_none_found() {
    roadnet()
        .args(["cycles", "Mendoza"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no cycles through Mendoza"));
}

#[test]
fn test_cycles_limit() {
    roadnet()
        .args(["cycles", "Rosario", "--max-nodes", "9"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("max_cycle_nodes"));
}
