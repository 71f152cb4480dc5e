//! Integration tests for the amber CLI.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_amber"))
}

#[test]
fn test_converts_file() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("input.html");
    let output_path = temp_dir.path().join("output.xml");
    fs::write(&input_path, "<p>Hello <b>world</b></p>").unwrap();

    cli()
        .arg(&input_path)
        .arg(&output_path)
        .assert()
        .success();

    let output = fs::read_to_string(&output_path).unwrap();
    assert_eq!(
        output,
        r#"<document version="2.0"><paragraph>Hello <bold>world</bold></paragraph></document>"#
    );
}

#[test]
fn test_missing_arguments() {
    cli()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));

    cli()
        .arg("only-input.html")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_missing_input_file() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("missing.html");
    let output_path = temp_dir.path().join("output.xml");

    cli()
        .arg(&input_path)
        .arg(&output_path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));

    assert!(!output_path.exists());
}

#[test]
fn test_default_language_flag() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("input.html");
    let output_path = temp_dir.path().join("output.xml");
    fs::write(&input_path, "<pre>x</pre>").unwrap();

    cli()
        .arg("--default-language")
        .arg("text")
        .arg(&input_path)
        .arg(&output_path)
        .assert()
        .success();

    let output = fs::read_to_string(&output_path).unwrap();
    assert!(output.contains(r#"<snippet language="text""#));
}

#[test]
fn test_keep_h1_flag() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("input.html");
    let output_path = temp_dir.path().join("output.xml");
    fs::write(&input_path, "<h1>Title</h1>").unwrap();

    cli()
        .arg(&input_path)
        .arg(&output_path)
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(&output_path).unwrap(),
        r#"<document version="2.0"/>"#
    );

    cli()
        .arg("--keep-h1")
        .arg(&input_path)
        .arg(&output_path)
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(&output_path).unwrap(),
        r#"<document version="2.0"><heading level="1">Title</heading></document>"#
    );
}

#[test]
fn test_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Convert an HTML file to Amber XML"));
}
