#![cfg(feature = "cli")]

use std::process::Command;
use tempfile::tempdir;

fn bin() -> String {
    env!("CARGO_BIN_EXE_matchdiff").to_string()
}

#[test]
fn cli_text_diff_reports_differences() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    std::fs::write(&a, "one\ntwo\nthree").unwrap();
    std::fs::write(&b, "one\n2\nthree").unwrap();

    let out = Command::new(bin())
        .args(["--no-color", "text"])
        .arg(&a)
        .arg(&b)
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("  one"));
    assert!(stdout.contains("- two"));
    assert!(stdout.contains("+ 2"));
}

#[test]
fn cli_identical_texts_exit_zero() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    std::fs::write(&a, "same").unwrap();
    std::fs::write(&b, "same").unwrap();

    let st = Command::new(bin())
        .args(["--no-color", "text"])
        .arg(&a)
        .arg(&b)
        .status()
        .unwrap();
    assert_eq!(st.code(), Some(0));
}

#[test]
fn cli_values_diff_renders_json_structures() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.json");
    let b = dir.path().join("b.json");
    std::fs::write(&a, r#"{"name": "alice", "age": 30}"#).unwrap();
    std::fs::write(&b, r#"{"name": "alice", "age": 31}"#).unwrap();

    let out = Command::new(bin())
        .args(["--no-color", "values"])
        .arg(&a)
        .arg(&b)
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("\"age\": 30"));
    assert!(stdout.contains("\"age\": 31"));
    assert!(stdout.contains("\"name\": \"alice\""));
}

#[test]
fn cli_invalid_json_exits_two() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.json");
    let b = dir.path().join("b.json");
    std::fs::write(&a, "{broken").unwrap();
    std::fs::write(&b, "{}").unwrap();

    let out = Command::new(bin())
        .args(["values"])
        .arg(&a)
        .arg(&b)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("invalid JSON input"));
}

#[test]
fn cli_missing_file_exits_two() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("missing.txt");
    let b = dir.path().join("also-missing.txt");

    let st = Command::new(bin())
        .args(["text"])
        .arg(&a)
        .arg(&b)
        .status()
        .unwrap();
    assert_eq!(st.code(), Some(2));
}

#[test]
fn cli_quiet_suppresses_output_but_keeps_status() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    std::fs::write(&a, "x").unwrap();
    std::fs::write(&b, "y").unwrap();

    let out = Command::new(bin())
        .args(["--quiet", "text"])
        .arg(&a)
        .arg(&b)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn cli_json_stats_go_to_stderr() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    std::fs::write(&a, "x").unwrap();
    std::fs::write(&b, "y").unwrap();

    let out = Command::new(bin())
        .args(["--no-color", "--json", "chars"])
        .arg(&a)
        .arg(&b)
        .output()
        .unwrap();
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("\"segments\""));
    assert!(stderr.contains("\"deleted\""));
}

#[test]
fn cli_args_diff_omits_expected_only_tokens() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.json");
    let b = dir.path().join("b.json");
    std::fs::write(&a, r#"[1, 2]"#).unwrap();
    std::fs::write(&b, r#"[1, 3]"#).unwrap();

    let out = Command::new(bin())
        .args(["--no-color", "args"])
        .arg(&a)
        .arg(&b)
        .output()
        .unwrap();
    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["1,", "3"]);
}
