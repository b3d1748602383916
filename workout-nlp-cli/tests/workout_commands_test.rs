use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

/// A command isolated from the user's config and database
fn workout_log(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("workout-log").unwrap();
    cmd.env("WORKOUT_NLP_CONFIG", dir.join("config.toml"))
        .env("WORKOUT_NLP_DB_PATH", dir.join("db"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn json_workspace() -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "[output]\nformat = \"json\"\n").unwrap();
    dir
}

#[test]
fn test_parse_prints_workouts() {
    let dir = tempdir().unwrap();

    workout_log(dir.path())
        .args(["parse", "스쿼드 80키로그램 4셋트 8회"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Parsed: 스쿼트 80kg 4세트 8회"))
        .stdout(predicate::str::contains("80kg · 4세트 · 8회"))
        .stdout(predicate::str::contains("gym/strength/lower"));
}

#[test]
fn test_parse_shows_adjusted_distance() {
    let dir = tempdir().unwrap();

    workout_log(dir.path())
        .args(["parse", "실내 자전거 10km 30분"])
        .assert()
        .success()
        .stdout(predicate::str::contains("사이클"))
        .stdout(predicate::str::contains("4.00km (×0.4)"));
}

#[test]
fn test_parse_json_output() {
    let dir = tempdir().unwrap();

    let output = workout_log(dir.path())
        .args(["parse", "--format", "json", "러닝 5km 25분"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let workouts: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let first = &workouts[0];
    assert_eq!(first["name"], "러닝");
    assert_eq!(first["type"], "cardio");
    assert_eq!(first["category"], "running");
    assert_eq!(first["distance_km"], 5.0);
    assert_eq!(first["speed_kph"], 12.0);
}

#[test]
fn test_parse_reads_stdin() {
    let dir = tempdir().unwrap();

    workout_log(dir.path())
        .arg("parse")
        .write_stdin("플랭크 1분간\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("플랭크"))
        .stdout(predicate::str::contains("1분"));
}

#[test]
fn test_parse_without_workouts_succeeds() {
    let dir = tempdir().unwrap();

    workout_log(dir.path())
        .args(["parse", "10분, 5세트"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No workouts found"));
}

#[test]
fn test_log_list_and_stats() {
    let dir = tempdir().unwrap();

    workout_log(dir.path())
        .args(["log", "--date", "2024-05-01", "스쿼트 100kg 5x5, 런닝 5km 30분"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged 2 workout(s) for 2024-05-01"));

    workout_log(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-05-01"))
        .stdout(predicate::str::contains("스쿼트"))
        .stdout(predicate::str::contains("러닝"));

    workout_log(dir.path())
        .args(["list", "--category", "snowboard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));

    workout_log(dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("all time, 1 entries"))
        .stdout(predicate::str::contains("5.00km raw"))
        .stdout(predicate::str::contains("Sets:      5"))
        .stdout(predicate::str::contains("2500.0kg"));
}

#[test]
fn test_log_without_workouts_saves_nothing() {
    let dir = json_workspace();

    workout_log(dir.path())
        .args(["log", "오"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing was saved"));

    workout_log(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn test_show_and_delete_entry() {
    let dir = json_workspace();

    workout_log(dir.path())
        .args(["log", "--date", "2024-05-02", "벤치프레스 60kg 3세트 10회"])
        .assert()
        .success();

    let output = workout_log(dir.path()).arg("list").output().unwrap();
    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let id = entries[0]["id"].as_str().unwrap().to_string();

    workout_log(dir.path())
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("벤치프레스"))
        .stdout(predicate::str::contains("\"weight_kg\": 60.0"));

    workout_log(dir.path())
        .args(["delete", "--force", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted entry"));

    workout_log(dir.path())
        .args(["show", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Log entry not found"));
}

#[test]
fn test_config_init_and_show() {
    let dir = tempdir().unwrap();

    workout_log(dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration initialized"));
    assert!(dir.path().join("config.toml").exists());

    workout_log(dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    workout_log(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("normalize = true"))
        .stdout(predicate::str::contains("format = \"table\""));
}
