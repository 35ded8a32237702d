//! Integration tests for the `vw` CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn vw() -> Command {
    Command::cargo_bin("vw").unwrap()
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

#[test]
fn help_lists_subcommands() {
    vw().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run").and(predicate::str::contains("play")));
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

#[test]
fn run_prints_grid_and_summary() {
    vw().args(["run", "--rows", "5", "--cols", "8", "--turns", "20"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Vacuum World")
                .and(predicate::str::contains("+--------------------------+"))
                .and(predicate::str::contains("(O)"))
                .and(predicate::str::contains("Summary"))
                .and(predicate::str::contains("Remaining dirt"))
                .and(predicate::str::contains("Obstacles")),
        );
}

#[test]
fn run_rejects_empty_grid() {
    vw().args(["run", "--rows", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn run_rejects_percent_over_hundred() {
    vw().args(["run", "--dirt", "150"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("simulation setup failed"));
}

#[test]
fn run_rejects_oversized_grid() {
    vw().args(["run", "--rows", "4294967296"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn run_reports_obstacle_count() {
    vw().args(["run", "--rows", "1", "--cols", "3", "--obstacles", "0", "--turns", "1"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"Obstacles[^\n0-9]*0").unwrap());
}

#[test]
fn run_without_dirt_is_clean_immediately() {
    vw().args(["run", "--dirt", "0"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("The room is clean")
                .and(predicate::str::contains("after 0 turns"))
                .and(predicate::str::contains("All the dirt has been cleaned up!")),
        );
}

#[test]
fn run_verbose_shows_turn_log() {
    vw().args(["run", "--turns", "3", "--verbose"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Event Log")
                .and(predicate::str::contains("Turn 1"))
                .and(predicate::str::contains("Turn 3")),
        );
}

#[test]
fn run_json_is_parseable() {
    let output = vw()
        .args(["run", "--turns", "10", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["stats"]["turn"], 10);
    assert!(value["events"].is_array());
    assert_eq!(value["events"][0]["kind"]["type"], "turn_started");
}

#[test]
fn run_json_conflicts_with_verbose() {
    vw().args(["run", "--json", "--verbose"]).assert().failure();
}

#[test]
fn run_same_seed_same_output() {
    let first = vw()
        .args(["run", "--seed", "7", "--turns", "50", "--verbose"])
        .output()
        .unwrap();
    let second = vw()
        .args(["run", "--seed", "7", "--turns", "50", "--verbose"])
        .output()
        .unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_quits_on_q() {
    vw().arg("play")
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Simulation stopped.")
                .and(predicate::str::contains("Simulation over.")),
        );
}

#[test]
fn play_ends_at_end_of_input() {
    vw().arg("play")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Simulation over."));
}

#[test]
fn play_ignores_manual_move_in_automatic_mode() {
    vw().arg("play")
        .write_stdin("w\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Switch to manual mode first"));
}

#[test]
fn play_switches_mode_and_reports_unknown_input() {
    vw().arg("play")
        .write_stdin("m\nxyz\nq\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Mode changed to: Manual")
                .and(predicate::str::contains("Unrecognized command: xyz")),
        );
}

#[test]
fn play_advances_turns() {
    vw().arg("play")
        .write_stdin("\nt\nq\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Turn 1")
                .and(predicate::str::contains("Turn 2"))
                .and(predicate::str::contains("Battery:")),
        );
}

#[test]
fn play_maintenance_commands() {
    vw().arg("play")
        .write_stdin("r\nv\nq\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Battery recharged to 100.")
                .and(predicate::str::contains("Bag emptied.")),
        );
}

#[test]
fn play_stops_when_room_is_clean() {
    vw().args(["play", "--dirt", "0"])
        .write_stdin("\n\n\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("All the dirt has been cleaned up!")
                .and(predicate::str::contains("Total steps:"))
                .and(predicate::str::contains("Turn 2").not()),
        );
}
