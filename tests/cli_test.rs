// CLI tests for the wikitoc binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn wikitoc() -> Command {
    let mut cmd = Command::cargo_bin("wikitoc").expect("binary should build");
    cmd.env_remove("WIKITOC_DIRECTORY").env_remove("RUST_LOG");
    cmd
}

fn create_wiki() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Home.md"), "stale").unwrap();
    fs::write(dir.path().join("guide.md"), "").unwrap();
    fs::create_dir(dir.path().join("api")).unwrap();
    fs::write(dir.path().join("api/intro.md"), "").unwrap();
    dir
}

#[test]
fn test_write_command() {
    let wiki = create_wiki();

    wikitoc()
        .args(["write", "--directory"])
        .arg(wiki.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote 1 home files"));

    let home = fs::read_to_string(wiki.path().join("Home.md")).unwrap();
    assert_eq!(home, "[Guide](guide.md)\n# [Api](api)\n[Intro](api/intro)");
}

#[test]
fn test_directory_from_env() {
    let wiki = create_wiki();

    wikitoc()
        .arg("write")
        .env("WIKITOC_DIRECTORY", wiki.path())
        .assert()
        .success();

    let home = fs::read_to_string(wiki.path().join("Home.md")).unwrap();
    assert!(home.starts_with("[Guide](guide.md)"));
}

#[test]
fn test_dry_run_prints_pages() {
    let wiki = create_wiki();

    wikitoc()
        .args(["write", "--dry-run", "-l"])
        .arg(wiki.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[Intro](api/intro)"))
        .stdout(predicate::str::contains("dry run"));

    assert_eq!(fs::read_to_string(wiki.path().join("Home.md")).unwrap(), "stale");
}

#[test]
fn test_json_report() {
    let wiki = create_wiki();

    let output = wikitoc()
        .args(["write", "--json", "-d"])
        .arg(wiki.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["documents"], 2);
    assert_eq!(report["written"].as_array().map(Vec::len), Some(1));
}

#[test]
fn test_config_file() {
    let wiki = create_wiki();
    fs::write(wiki.path().join("Index.md"), "").unwrap();
    let config = wiki.path().join("wikitoc.toml");
    fs::write(&config, "[scan]\nhome_file = \"Index.md\"\n").unwrap();

    wikitoc()
        .args(["write", "--config"])
        .arg(&config)
        .arg("--directory")
        .arg(wiki.path())
        .assert()
        .success();

    let index = fs::read_to_string(wiki.path().join("Index.md")).unwrap();
    assert!(index.contains("[Home](Home.md)"));
    assert_eq!(fs::read_to_string(wiki.path().join("Home.md")).unwrap(), "stale");
}

#[test]
fn test_invalid_config_file_fails() {
    let wiki = create_wiki();
    let config = wiki.path().join("bad.toml");
    fs::write(&config, "[scan]\nhome_file = \"\"\n").unwrap();

    wikitoc()
        .args(["write", "--config"])
        .arg(&config)
        .arg("--directory")
        .arg(wiki.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config validation error"));
}

#[test]
fn test_missing_directory_fails() {
    wikitoc()
        .args(["write", "--directory", "/does/not/exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to find directory /does/not/exist"));
}

#[test]
fn test_missing_home_file_fails() {
    let dir = TempDir::new().unwrap();

    wikitoc()
        .args(["write", "--directory"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to find home file"));
}

#[test]
fn test_version() {
    wikitoc()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("wikitoc "));
}
