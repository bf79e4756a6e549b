//! Error scenario integration tests

use assert_cmd::Command;
use predicates::prelude::*;

fn copy_as_file_bin(config_home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("copy-as-file").expect("binary should build");
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("NO_COLOR", "1")
        .env_remove("COPY_AS_FILE_BACKEND");
    cmd
}

#[test]
fn config_get_unknown_key() {
    let home = tempfile::tempdir().unwrap();
    copy_as_file_bin(home.path())
        .args(["config", "get", "unknown_key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn config_set_unknown_key() {
    let home = tempfile::tempdir().unwrap();
    copy_as_file_bin(home.path())
        .args(["config", "set", "unknown_key", "value"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Valid keys"));
}

#[test]
fn config_set_zero_attempts() {
    let home = tempfile::tempdir().unwrap();
    copy_as_file_bin(home.path())
        .args(["config", "set", "attempts", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn config_set_invalid_bool() {
    let home = tempfile::tempdir().unwrap();
    copy_as_file_bin(home.path())
        .args(["config", "set", "notify", "maybe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'true' or 'false'"));
}

#[test]
fn config_set_invalid_backend() {
    let home = tempfile::tempdir().unwrap();
    copy_as_file_bin(home.path())
        .args(["config", "set", "backend", "pbcopy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid backend"));
}

#[test]
fn config_init_twice_fails() {
    let home = tempfile::tempdir().unwrap();
    copy_as_file_bin(home.path())
        .args(["config", "init"])
        .assert()
        .success();

    copy_as_file_bin(home.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn config_list_without_file_shows_unset() {
    let home = tempfile::tempdir().unwrap();
    copy_as_file_bin(home.path())
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("backend"))
        .stdout(predicate::str::contains("(not set)"));
}

#[test]
fn unparseable_config_file_is_ignored_by_copy() {
    let home = tempfile::tempdir().unwrap();
    let dir = home.path().join("copy-as-file");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "attempts = [not toml").unwrap();

    copy_as_file_bin(home.path())
        .arg("copy")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Please select a file"));
}

#[test]
fn invalid_backend_is_usage_error() {
    let home = tempfile::tempdir().unwrap();
    copy_as_file_bin(home.path())
        .args(["copy", "--backend", "clipboard.exe", "file.cs"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid backend"));
}

#[test]
fn invalid_backend_from_env_is_usage_error() {
    let home = tempfile::tempdir().unwrap();
    copy_as_file_bin(home.path())
        .env("COPY_AS_FILE_BACKEND", "bogus")
        .args(["copy", "file.cs"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid backend"));
}

#[test]
fn unreadable_context_file_reports_error() {
    let home = tempfile::tempdir().unwrap();
    copy_as_file_bin(home.path())
        .args(["copy", "--context"])
        .arg(home.path().join("missing.json"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("An error occurred"));
}

#[test]
fn malformed_context_file_reports_error() {
    let home = tempfile::tempdir().unwrap();
    let ctx = home.path().join("ctx.json");
    std::fs::write(&ctx, "{ not json").unwrap();

    copy_as_file_bin(home.path())
        .args(["copy", "--context"])
        .arg(&ctx)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("An error occurred"));
}
