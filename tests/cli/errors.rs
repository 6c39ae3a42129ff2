use crate::cli::support::{scalecalc, Fixture};
use predicates::prelude::*;
use std::fs;

// ============================================================================
// Help, version and error handling tests
// ============================================================================

#[test]
fn test_help_flag() {
    scalecalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: scalecalc"))
        .stdout(predicate::str::contains("toggle"))
        .stdout(predicate::str::contains("show"));
}

#[test]
fn test_version_flag() {
    scalecalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("scalecalc"));
}

#[test]
fn test_no_command_prints_banner() {
    let dir = tempfile::tempdir().unwrap();
    scalecalc()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("scalecalc --help"));
}

#[test]
fn test_missing_data_is_data_error() {
    let dir = tempfile::tempdir().unwrap();
    scalecalc()
        .current_dir(dir.path())
        .env_remove("SCALECALC_CONFIG")
        .arg("show")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no data configured"));
}

#[test]
fn test_missing_data_file_is_data_error() {
    let dir = tempfile::tempdir().unwrap();
    scalecalc()
        .current_dir(dir.path())
        .env_remove("SCALECALC_CONFIG")
        .args(["--data", "absent.json", "show"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("scaling data not found"));
}

#[test]
fn test_malformed_data_json_envelope() {
    let fx = Fixture::new();
    fs::write(&fx.data, "{\"subject\": \"Maths\"}").unwrap();

    let output = fx.cmd().args(["--format", "json", "show"]).output().unwrap();
    assert_eq!(output.status.code(), Some(3));

    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["code"], 3);
    assert_eq!(err["error"]["type"], "invalid_input");
}

#[test]
fn test_unknown_format_is_usage_error() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["--format", "yaml", "show"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn test_bad_subcommand_with_json_format() {
    let output = scalecalc()
        .args(["--format", "json", "frobnicate"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "usage_error");
}

#[test]
fn test_bad_subcommand_with_uppercase_json_format() {
    let output = scalecalc()
        .args(["--format=JSON", "frobnicate"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "usage_error");
}

#[test]
fn test_verbose_logs_to_stderr() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["--verbose", "show"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}
