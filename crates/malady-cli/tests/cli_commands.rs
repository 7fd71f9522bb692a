//! Integration tests for the malady CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn malady() -> Command {
    Command::cargo_bin("malady").unwrap()
}

/// Write a scenario file into a fresh temp directory.
fn scenario(body: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scenario.json");
    fs::write(&path, body).unwrap();
    (dir, path)
}

// ---------------------------------------------------------------------------
// catalog
// ---------------------------------------------------------------------------

#[test]
fn catalog_lists_every_kind() {
    malady()
        .arg("catalog")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("bite")
                .and(predicate::str::contains("Influenza"))
                .and(predicate::str::contains("per region"))
                .and(predicate::str::contains("37 conditions")),
        );
}

#[test]
fn catalog_filters_by_key_or_name() {
    malady()
        .args(["catalog", "flu"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Influenza")
                .and(predicate::str::contains("1 conditions"))
                .and(predicate::str::contains("Common Cold").not()),
        );
}

#[test]
fn catalog_no_matches() {
    malady()
        .args(["catalog", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No conditions found"));
}

// ---------------------------------------------------------------------------
// inspect
// ---------------------------------------------------------------------------

#[test]
fn inspect_shows_label_and_speed() {
    malady()
        .args(["inspect", "meth", "--duration", "300"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("High on Meth")
                .and(predicate::str::contains("+50"))
                .and(predicate::str::contains("whole body")),
        );
}

#[test]
fn inspect_names_the_region() {
    malady()
        .args(["inspect", "bite", "--duration", "3000", "--region", "arm_l"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Bite - Left Arm")
                .and(predicate::str::contains("You have a nasty bite wound.")),
        );
}

#[test]
fn inspect_unknown_region_means_whole_body() {
    malady()
        .args(["inspect", "bite", "--region", "tail"])
        .assert()
        .success()
        .stdout(predicate::str::contains("whole body"));
}

#[test]
fn inspect_unknown_kind_fails() {
    malady()
        .args(["inspect", "gout"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:").and(predicate::str::contains("unknown condition")));
}

// ---------------------------------------------------------------------------
// simulate
// ---------------------------------------------------------------------------

#[test]
fn simulate_reports_conditions_and_attributes() {
    let (_dir, path) = scenario(
        r#"{
            "actor": { "name": "Rook" },
            "conditions": [ { "kind": "lack_sleep", "duration": 1 } ]
        }"#,
    );
    malady()
        .args(["simulate", path.to_str().unwrap(), "--ticks", "5"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("'Rook'")
                .and(predicate::str::contains("lack_sleep"))
                .and(predicate::str::contains("Intelligence"))
                .and(predicate::str::contains("Attributes")),
        );
}

#[test]
fn simulate_verbose_prints_the_event_log() {
    let (_dir, path) = scenario(r#"{ "conditions": [ { "kind": "cig", "duration": 3 } ] }"#);
    malady()
        .args(["simulate", path.to_str().unwrap(), "-t", "5", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Event Log").and(predicate::str::contains("Nicotine")));
}

#[test]
fn simulate_reports_a_death() {
    let (_dir, path) = scenario(
        r#"{
            "actor": { "name": "Doomed" },
            "conditions": [ { "kind": "infected", "duration": 3, "region": "torso" } ],
            "start_turn": 2
        }"#,
    );
    malady()
        .args(["simulate", path.to_str().unwrap(), "--ticks", "50"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("DEAD")
                .and(predicate::str::contains("3 of 50 ticks"))
                .and(predicate::str::contains("Notable Events")),
        );
}

#[test]
fn simulate_seed_override_is_reported() {
    let (_dir, path) = scenario("{}");
    malady()
        .args(["simulate", path.to_str().unwrap(), "-t", "1", "--seed", "77"])
        .assert()
        .success()
        .stdout(predicate::str::contains("seed=77").and(predicate::str::contains("(none)")));
}

#[test]
fn simulate_missing_file_fails() {
    malady()
        .args(["simulate", "/nonexistent/scenario.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:").and(predicate::str::contains("cannot read")));
}

#[test]
fn simulate_bad_json_fails() {
    let (_dir, path) = scenario("{ this is not json");
    malady()
        .args(["simulate", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid scenario"));
}
