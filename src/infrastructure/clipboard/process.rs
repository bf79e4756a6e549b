//! Helpers for clipboard tools driven as child processes

use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use crate::application::ports::ClipboardError;

/// Run `program` with `args`, feed `input` on stdin and wait for it to exit.
///
/// `map_failure` turns a spawn, write or exit failure message into the
/// error the caller wants to report.
pub(super) fn run_with_stdin(
    program: &'static str,
    args: &[&str],
    input: &[u8],
    map_failure: fn(String) -> ClipboardError,
) -> Result<(), ClipboardError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ClipboardError::ToolNotFound(program)
            } else {
                map_failure(e.to_string())
            }
        })?;

    // Dropping stdin closes the pipe so the tool sees EOF
    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(input)
            .map_err(|e| map_failure(e.to_string()))?;
    }

    let status = child.wait().map_err(|e| map_failure(e.to_string()))?;

    if !status.success() {
        return Err(map_failure(format!(
            "{} exited with status: {}",
            program, status
        )));
    }

    Ok(())
}

/// Run `program` with `args` and no input, reporting stderr on failure
pub(super) fn run(
    program: &'static str,
    args: &[&str],
    map_failure: fn(String) -> ClipboardError,
) -> Result<(), ClipboardError> {
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ClipboardError::ToolNotFound(program)
            } else {
                map_failure(e.to_string())
            }
        })?;

    if output.status.success() {
        Ok(())
    } else {
        Err(map_failure(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ))
    }
}
