//! Integration tests for the CLI commands that need no running API.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::PredicateBooleanExt;
use tempfile::TempDir;

fn fitz(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("cli");
    cmd.current_dir(dir.path())
        .env("FITZ_SESSION_PATH", dir.path().join("session.json"))
        .env_remove("FITZ_API_URL")
        .env_remove("FITZ_LOG_LEVEL")
        .timeout(std::time::Duration::from_secs(10));
    cmd
}

#[test]
fn test_help_lists_commands() {
    let mut cmd = cargo_bin_cmd!("cli");
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("Command-line client for the Fitz fitness tracker"))
        .stdout(predicates::str::contains("session"))
        .stdout(predicates::str::contains("routines"))
        .stdout(predicates::str::contains("workouts"))
        .stdout(predicates::str::contains("dashboard"))
        .stdout(predicates::str::contains("--server"));
}

#[test]
fn test_config_generates_json() {
    let dir = tempfile::tempdir().unwrap();
    fitz(&dir).args(["config", "--format", "json"]).assert().success().stdout(
        predicates::str::contains("Configuration file 'config.json' generated successfully."),
    );

    let written = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(written.contains("\"api_base_url\": \"http://localhost:5000/api\""));
    assert!(written.contains("\"log_level\": \"info\""));
}

#[test]
fn test_config_defaults_to_yaml() {
    let dir = tempfile::tempdir().unwrap();
    fitz(&dir).arg("config").assert().success();
    assert!(dir.path().join("config.yaml").exists());
}

#[test]
fn test_config_rejects_unknown_format() {
    let dir = tempfile::tempdir().unwrap();
    fitz(&dir)
        .args(["config", "--format", "toml"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Unsupported configuration format"));
}

#[test]
fn test_completion_script_for_bash() {
    let mut cmd = cargo_bin_cmd!("cli");
    cmd.args(["completion", "--shell", "bash"]);

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("fitz"));
}

#[test]
fn test_me_without_session() {
    let dir = tempfile::tempdir().unwrap();
    fitz(&dir)
        .args(["session", "me"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("no active session"));
}

#[test]
fn test_logout_without_session_is_harmless() {
    let dir = tempfile::tempdir().unwrap();
    fitz(&dir)
        .args(["session", "logout"])
        .assert()
        .success()
        .stdout(predicates::str::contains("No active session."));
}

#[test]
fn test_logout_clears_session_file() {
    let dir = tempfile::tempdir().unwrap();
    let session = dir.path().join("session.json");
    std::fs::write(&session, r#"{"token":"t1","user":"{\"username\":\"lifter\"}"}"#).unwrap();

    fitz(&dir)
        .args(["session", "me"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Logged in as lifter"));

    fitz(&dir)
        .args(["session", "logout"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Logged out."));
    assert!(!session.exists());
}

#[test]
fn test_list_commands_require_session() {
    let dir = tempfile::tempdir().unwrap();
    for args in [&["exercises"][..], &["routines", "list"], &["workouts", "list"], &["dashboard"]] {
        fitz(&dir)
            .args(args)
            .assert()
            .failure()
            .stderr(predicates::str::contains("no active session"));
    }
}

#[test]
fn test_page_zero_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    for args in [
        &["exercises", "--page", "0"][..],
        &["routines", "list", "--page", "0"],
        &["workouts", "list", "--page", "0"],
    ] {
        fitz(&dir)
            .args(args)
            .assert()
            .failure()
            .stderr(predicates::str::contains("invalid value '0'"))
            .stderr(predicates::str::contains("no active session").not());
    }
}

#[test]
fn test_invalid_server_url() {
    let dir = tempfile::tempdir().unwrap();
    fitz(&dir)
        .args(["--server", "ftp://example.com", "session", "me"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Invalid API base URL"));
}

#[test]
fn test_routine_add_validates_before_sending() {
    let dir = tempfile::tempdir().unwrap();
    fitz(&dir)
        .args([
            "--server",
            "http://127.0.0.1:9/api",
            "routines",
            "add",
            "--name",
            "Push day",
            "--description",
            "Chest and shoulders",
            "--difficulty",
            "extreme",
            "--duration",
            "45",
            "--workout-type",
            "Strength",
        ])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Difficulty"))
        .stderr(predicates::str::contains("Exercises is required"))
        .stderr(predicates::str::contains("routine is invalid"));
}

#[test]
fn test_routine_add_rejects_malformed_exercise() {
    let dir = tempfile::tempdir().unwrap();
    fitz(&dir)
        .args([
            "routines",
            "add",
            "--name",
            "Push day",
            "--description",
            "d",
            "--difficulty",
            "Beginner",
            "--duration",
            "30",
            "--workout-type",
            "Strength",
            "--exercise",
            "bench",
        ])
        .assert()
        .failure()
        .stderr(
            predicates::str::contains("expected ID:SETS:REPS:REST")
                .and(predicates::str::contains("--exercise")),
        );
}
