// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! End-to-end checks of the glass-cli binary.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn glass_cli() -> Command {
    Command::cargo_bin("glass-cli").expect("binary builds")
}

#[test]
fn steps_table_reports_bubble_counts_for_the_standard_deck() {
    glass_cli()
        .args(["steps"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bubble sort: 25 steps"))
        .stdout(predicate::str::contains("10 compares, 10 swaps, 0 writes"))
        .stdout(predicate::str::contains("complete"));
}

#[test]
fn steps_json_is_parseable_and_ends_with_complete() {
    let output = glass_cli()
        .args(["steps", "--json", "--algorithm", "merge", "--values", "3,1"])
        .output()
        .expect("command runs");
    assert!(output.status.success());
    let steps: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    let list = steps.as_array().expect("a JSON array of steps");
    assert_eq!(list.len(), 4);
    assert_eq!(list[0]["Compare"]["left"], 3);
    assert!(list.last().unwrap().get("Complete").is_some());
}

#[test]
fn invalid_values_are_rejected_with_context() {
    glass_cli()
        .args(["steps", "--values", "5,banana,1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value \"banana\""));
}

#[test]
fn unknown_algorithm_is_rejected() {
    glass_cli()
        .args(["steps", "--algorithm", "quick"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected bubble, selection, or merge"));
}

#[test]
fn play_runs_a_tiny_deck_to_completion() {
    glass_cli()
        .args(["play", "--values", "2,1", "--base-ms", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Comparing 2 and 1"))
        .stdout(predicate::str::contains("Sorted! Bubble sort finished"));
}

#[test]
fn random_is_seed_stable() {
    let run = |seed: &str| {
        glass_cli()
            .args(["steps", "--random", "6", "--seed", seed])
            .output()
            .expect("command runs")
            .stdout
    };
    assert_eq!(run("9"), run("9"));
    assert_ne!(run("9"), run("10"));
}
