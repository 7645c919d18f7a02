//! End-to-end tests for the compound-words binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a compound-words Command
fn compound_words() -> Command {
    cargo_bin_cmd!("compound-words")
}

/// Writes `contents` to a word list in a fresh temp dir.
fn word_list(contents: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("words.txt");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn test_help() {
    compound_words().arg("--help").assert().success();
}

#[test]
fn test_version() {
    compound_words().arg("--version").assert().success();
}

#[test]
fn test_prints_longest_compound() {
    let (_dir, path) = word_list("cat\ncats\ndog\ncatsdog\n");
    compound_words()
        .arg(&path)
        .assert()
        .success()
        .stdout("catsdog\n");
}

#[test]
fn test_tie_prints_first_confirmed() {
    let (_dir, path) = word_list("cat\ndog\ncatdog\ndogcat\n");
    compound_words()
        .arg(&path)
        .assert()
        .success()
        .stdout("catdog\n");
}

#[test]
fn test_no_compound_prints_empty_line() {
    let (_dir, path) = word_list("cat\ndog\nbird\n");
    compound_words()
        .arg(&path)
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn test_fixture() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/words.txt");
    compound_words()
        .arg(path)
        .assert()
        .success()
        .stdout("ratcatdogcat\n");
}

#[test]
fn test_stats_go_to_stderr() {
    let (_dir, path) = word_list("rat\ncat\ndog\nratcatdog\n");
    compound_words()
        .arg(&path)
        .arg("--stats")
        .assert()
        .success()
        .stdout("ratcatdog\n")
        .stderr(predicate::str::contains("words: 4"));
}

#[test]
fn test_missing_argument_is_usage_error() {
    compound_words()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("WORDFILE"));
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    compound_words()
        .arg(dir.path().join("missing.txt"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to open"))
        .stderr(predicate::str::contains("failed to open word list"));
}

#[test]
fn test_pound_prefixed_words_are_read() {
    let (_dir, path) = word_list("#\ncat\n#cat\n");
    compound_words()
        .arg(&path)
        .assert()
        .success()
        .stdout("#cat\n");
}

#[test]
fn test_invalid_utf8_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("words.txt");
    fs::write(&path, b"cat\n\xff\n").unwrap();
    compound_words()
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("line 2"));
}
