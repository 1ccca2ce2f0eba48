//! Tests driving the compiled binary end to end.

use std::fs;
use std::path::Path;

use predicates::prelude::*;
use tempfile::TempDir;

fn indexer_command(cwd: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("article-indexer").unwrap();
    cmd.current_dir(cwd);
    cmd
}

fn seed_pages(root: &Path) {
    let pages = root.join("pages");
    fs::create_dir(&pages).unwrap();
    fs::write(pages.join("about.md"), "welcome to the site").unwrap();
    fs::write(pages.join("changelog.md"), "release history").unwrap();
    fs::write(pages.join("guide.md"), "sample code inside").unwrap();
}

#[test]
fn bare_invocation_generates_the_index() {
    let tmp = TempDir::new().unwrap();
    seed_pages(tmp.path());

    indexer_command(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated:"))
        .stdout(predicate::str::contains("3 articles"));

    let raw = fs::read_to_string(tmp.path().join("articles.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let dev = json["Development"].as_array().unwrap();
    assert_eq!(dev.len(), 1);
    assert_eq!(dev[0]["title"], "about");
    assert_eq!(dev[0]["file"], "pages/about.md");

    let prog = json["Programming"].as_array().unwrap();
    let titles: Vec<_> = prog.iter().map(|e| e["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["changelog", "guide"]);

    // key order is fixed in the raw bytes
    let dev_pos = raw.find("\"Development\"").unwrap();
    let prog_pos = raw.find("\"Programming\"").unwrap();
    assert!(dev_pos < prog_pos);
}

#[test]
fn generate_subcommand_matches_bare_invocation() {
    let tmp = TempDir::new().unwrap();
    seed_pages(tmp.path());

    indexer_command(tmp.path()).arg("generate").assert().success();

    let first = fs::read(tmp.path().join("articles.json")).unwrap();
    indexer_command(tmp.path()).assert().success();
    let second = fs::read(tmp.path().join("articles.json")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn index_uses_four_space_indent() {
    let tmp = TempDir::new().unwrap();
    seed_pages(tmp.path());

    indexer_command(tmp.path()).assert().success();

    let raw = fs::read_to_string(tmp.path().join("articles.json")).unwrap();
    assert!(raw.starts_with("{\n    \"Development\""));
    assert!(raw.contains("\n        {\n            \"title\""));
    assert!(!raw.ends_with('\n'));
}

#[test]
fn missing_pages_dir_fails_without_output() {
    let tmp = TempDir::new().unwrap();

    indexer_command(tmp.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Failed to read source directory"))
        .stderr(predicate::str::contains("pages"));

    assert!(!tmp.path().join("articles.json").exists());
}

#[test]
fn unreadable_document_fails_without_output() {
    let tmp = TempDir::new().unwrap();
    let pages = tmp.path().join("pages");
    fs::create_dir(&pages).unwrap();
    fs::write(pages.join("about.md"), "fine").unwrap();
    fs::create_dir(pages.join("trap.md")).unwrap();

    indexer_command(tmp.path())
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Failed to read document"))
        .stderr(predicate::str::contains("trap.md"));

    assert!(!tmp.path().join("articles.json").exists());
}

#[test]
fn list_shows_articles_without_writing() {
    let tmp = TempDir::new().unwrap();
    seed_pages(tmp.path());

    indexer_command(tmp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Development (1)"))
        .stdout(predicate::str::contains("Programming (2)"))
        .stdout(predicate::str::contains("Total: 3 articles"));

    assert!(!tmp.path().join("articles.json").exists());
}

#[test]
fn completions_cover_the_subcommands() {
    let tmp = TempDir::new().unwrap();

    indexer_command(tmp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("article-indexer"));
}
