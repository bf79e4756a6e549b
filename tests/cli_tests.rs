//! CLI integration tests

use std::path::Path;
use std::process::Command;

fn copy_as_file_bin(config_home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_copy-as-file"));
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("NO_COLOR", "1")
        .env_remove("COPY_AS_FILE_BACKEND")
        .env_remove("RUST_LOG");
    cmd
}

fn temp_dirs_in(dir: &Path) -> Vec<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("VSExtension_"))
        .collect()
}

#[test]
fn help_output() {
    let home = tempfile::tempdir().unwrap();
    let output = copy_as_file_bin(home.path())
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("copy"));
    assert!(stdout.contains("status"));
    assert!(stdout.contains("commands"));
    assert!(stdout.contains("config"));
}

#[test]
fn copy_help_lists_selection_flags() {
    let home = tempfile::tempdir().unwrap();
    let output = copy_as_file_bin(home.path())
        .args(["copy", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--selected"));
    assert!(stdout.contains("--active-document"));
    assert!(stdout.contains("--context"));
    assert!(stdout.contains("--backend"));
    assert!(stdout.contains("--notify"));
}

#[test]
fn version_output() {
    let home = tempfile::tempdir().unwrap();
    let output = copy_as_file_bin(home.path())
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("copy-as-file"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_path_command() {
    let home = tempfile::tempdir().unwrap();
    let output = copy_as_file_bin(home.path())
        .args(["config", "path"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("copy-as-file"));
    assert!(stdout.contains("config.toml"));
}

#[test]
fn config_set_then_get() {
    let home = tempfile::tempdir().unwrap();

    let set = copy_as_file_bin(home.path())
        .args(["config", "set", "attempts", "5"])
        .output()
        .expect("Failed to execute command");
    assert!(set.status.success());

    let get = copy_as_file_bin(home.path())
        .args(["config", "get", "attempts"])
        .output()
        .expect("Failed to execute command");
    assert!(get.status.success());
    assert_eq!(String::from_utf8_lossy(&get.stdout).trim(), "5");
}

#[test]
fn commands_lists_both_slots() {
    let home = tempfile::tempdir().unwrap();
    let output = copy_as_file_bin(home.path())
        .arg("commands")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("b9c8d5e2-3a4f-4b8c-9d1e-2f5a8b7c9e3f"));
    assert!(stdout.contains("item-node"));
    assert!(stdout.contains("code-window"));
    assert!(stdout.contains("a8b5c3d1-2f4e-4a7b-8c9d-1e3f5a7b9c2d:0x0100"));
    assert!(stdout.contains("a8b5c3d1-2f4e-4a7b-8c9d-1e3f5a7b9c2d:0x0101"));
}

#[test]
fn status_enabled_for_existing_file() {
    let home = tempfile::tempdir().unwrap();
    let file = home.path().join("Program.cs");
    std::fs::write(&file, "class Program {}").unwrap();

    let output = copy_as_file_bin(home.path())
        .arg("status")
        .arg(&file)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "enabled");
}

#[test]
fn status_disabled_for_missing_file() {
    let home = tempfile::tempdir().unwrap();
    let output = copy_as_file_bin(home.path())
        .args(["status", "--command", "code-window"])
        .arg(home.path().join("missing.cs"))
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "disabled");
}

#[test]
fn copy_without_selection_warns() {
    let home = tempfile::tempdir().unwrap();
    let output = copy_as_file_bin(home.path())
        .env("TMPDIR", home.path())
        .arg("copy")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Please select a file or keep a file open in the editor."),
        "Expected no-file warning, got: {}",
        stderr
    );
    assert!(temp_dirs_in(home.path()).is_empty());
}

#[test]
fn copy_falls_back_to_active_document_check() {
    let home = tempfile::tempdir().unwrap();
    let output = copy_as_file_bin(home.path())
        .env("TMPDIR", home.path())
        .args(["copy", "--active-document"])
        .arg(home.path().join("gone.cs"))
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Please select a file"));
    assert!(temp_dirs_in(home.path()).is_empty());
}

#[cfg(target_os = "linux")]
#[test]
fn copy_with_missing_tool_reports_failure_and_cleans_up() {
    let home = tempfile::tempdir().unwrap();
    let file = home.path().join("notes.cs");
    std::fs::write(&file, "// notes").unwrap();

    let output = copy_as_file_bin(home.path())
        .env("TMPDIR", home.path())
        .env("PATH", "")
        .args(["copy", "--backend", "xclip"])
        .arg(&file)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Copying the file failed. Please try again."),
        "Expected copy failure, got: {}",
        stderr
    );
    assert!(temp_dirs_in(home.path()).is_empty());
}

#[test]
fn invalid_command_id_is_usage_error() {
    let home = tempfile::tempdir().unwrap();
    let output = copy_as_file_bin(home.path())
        .args(["status", "--command", "0x0200", "file.cs"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid command") || stderr.contains("invalid"),
        "Expected error about invalid command, got: {}",
        stderr
    );
}
