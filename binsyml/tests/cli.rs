//! Integration tests for the syml CLI
//!
//! These tests invoke the built binary and check exit codes and the
//! stdout/stderr contract.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::NamedTempFile;

// ── Helpers ───────────────────────────────────────────────

fn run_syml(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_syml"))
        .args(args)
        .output()
        .expect("failed to execute syml")
}

fn syml_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

fn path_str(file: &NamedTempFile) -> &str {
    file.path().to_str().expect("utf-8 temp path")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

// ── Usage ─────────────────────────────────────────────────

#[test]
fn test_no_arguments_prints_usage() {
    let output = run_syml(&[]);
    assert!(!output.status.success(), "missing FILE should fail");
    assert!(stderr(&output).contains("Usage"), "{}", stderr(&output));
}

#[test]
fn test_version_flag() {
    let output = run_syml(&["--version"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}

// ── Success ───────────────────────────────────────────────

#[test]
fn test_dump_json() {
    let file = syml_file("name: demo\ncount: 42\ntags:\n- a\n- true\n");
    let output = run_syml(&[path_str(&file)]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Parsed 3 top-level keys:\n{\n  \"count\": 42,\n  \"name\": \"demo\",\n  \"tags\": [\n    \"a\",\n    true\n  ]\n}\n"
    );
}

#[test]
fn test_dump_single_key_wording() {
    let file = syml_file("only: 1\n");
    let output = run_syml(&[path_str(&file)]);
    assert!(stdout(&output).starts_with("Parsed 1 top-level key:\n"));
}

#[test]
fn test_dump_yaml() {
    let file = syml_file("name: demo\n");
    let output = run_syml(&["-t", "yaml", path_str(&file)]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("name: demo"), "{}", stdout(&output));
}

#[test]
fn test_dump_toml() {
    let file = syml_file("name: demo\nxs:\n- 1\n- 2\n");
    let output = run_syml(&["--to", "toml", path_str(&file)]);
    assert!(output.status.success(), "{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("name = \"demo\""), "{}", out);
    assert!(out.contains("xs = [1, 2]"), "{}", out);
}

#[test]
fn test_toml_rejects_null() {
    let file = syml_file("gone: null\n");
    let output = run_syml(&["--to", "toml", path_str(&file)]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Cannot convert to TOML"));
}

#[test]
fn test_dump_from_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_syml"))
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn syml");
    child
        .stdin
        .take()
        .expect("piped stdin")
        .write_all(b"a: 1\r\nb:\n- x\n")
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait for syml");

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Parsed 2 top-level keys:\n{\n  \"a\": 1,\n  \"b\": [\n    \"x\"\n  ]\n}\n"
    );
}

#[test]
fn test_check_valid() {
    let file = syml_file("# just a comment\n");
    let output = run_syml(&["--check", path_str(&file)]);
    assert!(output.status.success());
    assert!(stdout(&output).ends_with(": ok\n"));
}

// ── Failure ───────────────────────────────────────────────

#[test]
fn test_parse_error_reports_line() {
    let file = syml_file("ok: 1\n\n- orphan item\n");
    let output = run_syml(&[path_str(&file)]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("Line 3: List item without a key"), "{}", err);
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_check_invalid() {
    let file = syml_file(": value\n");
    let output = run_syml(&["--check", path_str(&file)]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Line 1: Empty key not allowed"));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let missing = dir.path().join("nope.syml");
    let missing = missing.to_str().expect("utf-8 temp path");
    assert!(!Path::new(missing).exists());

    let output = run_syml(&[missing]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("File not found"), "{}", stderr(&output));
}

#[test]
fn test_invalid_utf8_file() {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(b"a: \xff\n").expect("write temp file");

    let output = run_syml(&[path_str(&file)]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("Error: reading"), "{}", err);
    assert!(stdout(&output).is_empty());
}
