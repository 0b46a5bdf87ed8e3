//! CLI tests against the built binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const MINIMAL_CV: &str = "
identity:
  name: Alex Tan
  email: alex.tan@example.com
summary:
  selected: true
  content: Engineer.
";

fn generator() -> Command {
    Command::cargo_bin("mastercv-generator").expect("binary should build")
}

#[test]
fn test_missing_input_fails_and_writes_nothing() {
    let dir = tempdir().unwrap();

    generator()
        .current_dir(dir.path())
        .args(["generate", "--input", "missing.yaml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("missing.yaml"));

    // No output file of any kind was created
    assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
}

#[test]
fn test_generate_default_paths() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("master_cv.yaml"), MINIMAL_CV).unwrap();

    generator()
        .current_dir(dir.path())
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved to:"))
        .stdout(predicate::str::contains("alex_tan_cv.md"));

    let output = fs::read_to_string(dir.path().join("alex_tan_cv.md")).unwrap();
    assert!(output.starts_with("# Alex Tan"));
    assert!(output.contains("## Professional Summary"));
}

#[test]
fn test_generate_explicit_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("master_cv.yaml");
    fs::write(&input, MINIMAL_CV).unwrap();
    let output = dir.path().join("tailored.md");

    generator()
        .arg("generate")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    assert!(output.exists());
}

#[test]
fn test_generate_output_into_missing_directory() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("master_cv.yaml"), MINIMAL_CV).unwrap();

    generator()
        .current_dir(dir.path())
        .args(["generate", "--output", "missing/cv.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Output directory does not exist"));
}

#[test]
fn test_generate_invalid_wrap_width() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("master_cv.yaml"), MINIMAL_CV).unwrap();

    generator()
        .current_dir(dir.path())
        .args(["generate", "--wrap", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid wrap width"));
}

#[test]
fn test_generate_overwrites_existing_output() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("master_cv.yaml"), MINIMAL_CV).unwrap();
    fs::write(dir.path().join("alex_tan_cv.md"), "stale content").unwrap();

    generator()
        .current_dir(dir.path())
        .arg("generate")
        .assert()
        .success();

    let output = fs::read_to_string(dir.path().join("alex_tan_cv.md")).unwrap();
    assert!(!output.contains("stale content"));
}
