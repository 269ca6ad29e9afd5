//! Command-line integration tests

use assert_cmd::Command;
use predicates::prelude::*;

fn work_lookup() -> Command {
    Command::cargo_bin("work-lookup").unwrap()
}

#[test]
fn test_help_lists_options() {
    work_lookup()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--title"))
        .stdout(predicate::str::contains("--reading-type"))
        .stdout(predicate::str::contains("--endpoint"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_version() {
    work_lookup()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_reading_type_fails_before_ui() {
    let dir = tempfile::tempdir().unwrap();

    work_lookup()
        .args(["--reading-type", "Zine", "--config"])
        .arg(dir.path().join("missing.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown reading type"))
        .stderr(predicate::str::contains("Manga"));
}

#[test]
fn test_reading_type_checked_against_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[form]\nreading_types = [\"Zine\"]\n").unwrap();

    work_lookup()
        .args(["--reading-type", "Manga", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected one of: Zine"));
}
