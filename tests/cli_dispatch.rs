//! CLI dispatch tests.
//!
//! Runs the compiled binary to verify argument-error behavior: a usage
//! summary goes to stdout and the process exits successfully. Exit code 2 is
//! reserved for the gate's deny verdict, so a typo'd hook invocation in a
//! host configuration must never be read as "block this write".

// Integration tests use expect/unwrap for simplicity - panics are acceptable in tests
#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run(args: &[&str]) -> Output {
    let dir = tempfile::tempdir().unwrap();
    Command::new(env!("CARGO_BIN_EXE_instinct"))
        .args(args)
        .env("INSTINCT_DATA_DIR", dir.path())
        .output()
        .unwrap()
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let dir = tempfile::tempdir().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_instinct"))
        .args(args)
        .env("INSTINCT_DATA_DIR", dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_unrecognized_subcommand_prints_usage_and_exits_zero() {
    let output = run(&["bogus"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage: instinct"));
}

#[test]
fn test_import_without_path_prints_usage_and_exits_zero() {
    let output = run(&["import"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage: instinct"));
}

#[test]
fn test_misspelled_hook_event_never_reads_as_deny() {
    let output = run_with_stdin(
        &["hook", "pre-tool-us"],
        r#"{"tool_input": {"file_path": "docs/guide.md"}}"#,
    );
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage: instinct"));
}

#[test]
fn test_help_exits_zero() {
    let output = run(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_no_subcommand_defaults_to_status() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(0));
    assert!(
        String::from_utf8_lossy(&output.stdout)
            .contains("No instincts captured yet. Use sessions to build patterns.")
    );
}

#[test]
fn test_hook_deny_exits_two() {
    let output = run_with_stdin(
        &["hook", "pre-tool-use"],
        r#"{"tool_input": {"file_path": "scratch/notes.md"}}"#,
    );
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_hook_allow_exits_zero() {
    let output = run_with_stdin(
        &["hook", "pre-tool-use"],
        r#"{"tool_input": {"file_path": "docs/guide.md"}}"#,
    );
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_hook_malformed_input_exits_one() {
    // A gate crash is neither allow (0) nor deny (2).
    let output = run_with_stdin(&["hook", "pre-tool-use"], "not valid json {{{{");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid input"));
}
