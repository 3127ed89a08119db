#![cfg(test)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Every invocation gets its own HOME so tests never touch real state.
fn isolated_home() -> TempDir {
    TempDir::new().unwrap()
}

#[test]
fn status_without_a_target_says_so() {
    let home = isolated_home();
    cargo_bin_cmd!("sharewatch")
        .env("HOME", home.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("No target configured"));
}

#[test]
fn watch_without_a_target_does_not_start_a_loop() {
    let home = isolated_home();
    cargo_bin_cmd!("sharewatch")
        .env("HOME", home.path())
        .arg("watch")
        .assert()
        .success()
        .stdout(predicate::str::contains("No target configured"));
}

#[test]
fn config_set_and_show_round_trip() {
    let home = isolated_home();
    cargo_bin_cmd!("sharewatch")
        .env("HOME", home.path())
        .args([
            "config",
            "set",
            "--server",
            "smb://files.example.net",
            "--username",
            "alice",
            "--interval",
            "10",
        ])
        .assert()
        .success();

    cargo_bin_cmd!("sharewatch")
        .env("HOME", home.path())
        .args(["config", "show", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("smb://files.example.net"))
        .stdout(predicate::str::contains("\"check_interval_minutes\": 10"));
}

#[test]
fn config_set_rejects_an_out_of_range_interval() {
    let home = isolated_home();
    cargo_bin_cmd!("sharewatch")
        .env("HOME", home.path())
        .args(["config", "set", "--interval", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("check interval"));
}

#[test]
fn target_set_show_and_clear() {
    let home = isolated_home();
    let watched = home.path().join("watched");
    std::fs::create_dir(&watched).unwrap();

    cargo_bin_cmd!("sharewatch")
        .env("HOME", home.path())
        .args(["target", "set"])
        .arg(&watched)
        .assert()
        .success()
        .stdout(predicate::str::contains("Watching"));

    cargo_bin_cmd!("sharewatch")
        .env("HOME", home.path())
        .args(["target", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("watched"));

    cargo_bin_cmd!("sharewatch")
        .env("HOME", home.path())
        .args(["target", "clear"])
        .assert()
        .success();

    cargo_bin_cmd!("sharewatch")
        .env("HOME", home.path())
        .args(["target", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No target configured"));
}

#[test]
fn target_set_refuses_a_missing_folder() {
    let home = isolated_home();
    cargo_bin_cmd!("sharewatch")
        .env("HOME", home.path())
        .args(["target", "set"])
        .arg(home.path().join("does-not-exist"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
