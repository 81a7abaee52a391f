//! Integration tests for the booknav binary.
//!
//! These tests run the CLI against books in temporary directories. `HOME`
//! and `XDG_CONFIG_HOME` point into the temp dir so no user settings leak in.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command for running booknav in an isolated environment.
fn booknav(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("booknav").unwrap();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("BOOKNAV_CONFIG");
    cmd
}

/// Create a book at `<home>/book` and return its path.
fn make_book(home: &Path) -> std::path::PathBuf {
    let root = home.join("book");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("_toc.yml"), "chapters:\n  - file: intro\n").unwrap();
    fs::write(root.join("_config.yml"), "title: CLI Book\nauthor: Ann\n").unwrap();
    fs::write(root.join("intro.md"), "# Welcome\n").unwrap();
    root
}

#[test]
fn version_flag_works() {
    let home = TempDir::new().unwrap();
    booknav(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("booknav"));
}

#[test]
fn toc_prints_markup() {
    let home = TempDir::new().unwrap();
    let root = make_book(home.path());

    booknav(home.path())
        .args(["--cwd", root.to_str().unwrap(), "toc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("data-file-path=\"intro.md\">Welcome</button>"))
        .stdout(predicate::str::contains("Author: Ann"));
}

#[test]
fn toc_json_shape() {
    let home = TempDir::new().unwrap();
    let root = make_book(home.path());

    let output = booknav(home.path())
        .args(["--cwd", root.to_str().unwrap(), "toc", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["browser_dir"], "book");
    assert_eq!(json["cwd"], root.to_str().unwrap());
    assert!(json["data"].as_str().unwrap().contains("CLI Book"));
}

#[test]
fn toc_outside_book_prints_notice() {
    let home = TempDir::new().unwrap();
    let work = home.path().join("plain");
    fs::create_dir_all(&work).unwrap();

    booknav(home.path())
        .args(["--cwd", work.to_str().unwrap(), "toc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not a Jupyter-Book"));
}

#[test]
fn toc_warnings_go_to_stderr() {
    let home = TempDir::new().unwrap();
    let root = make_book(home.path());
    fs::write(root.join("_toc.yml"), "chapters:\n  - file: intro\n  - 7\n").unwrap();

    booknav(home.path())
        .args(["--cwd", root.to_str().unwrap(), "toc"])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning:"));

    booknav(home.path())
        .args(["--cwd", root.to_str().unwrap(), "--quiet", "toc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("jbook-toc"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn locate_finds_manifest_from_subdirectory() {
    let home = TempDir::new().unwrap();
    let root = make_book(home.path());
    let nested = root.join("chapters/deep");
    fs::create_dir_all(&nested).unwrap();

    booknav(home.path())
        .args(["--cwd", nested.to_str().unwrap(), "locate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_toc.yml"));
}

#[test]
fn locate_fails_outside_book() {
    let home = TempDir::new().unwrap();

    booknav(home.path())
        .args(["--cwd", home.path().to_str().unwrap(), "locate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No _toc.yml found"));
}

#[test]
fn title_command() {
    let home = TempDir::new().unwrap();
    let root = make_book(home.path());

    booknav(home.path())
        .args(["--cwd", root.to_str().unwrap(), "title", "intro.md"])
        .assert()
        .success()
        .stdout("Welcome\n");
}

#[test]
fn meta_command() {
    let home = TempDir::new().unwrap();
    let root = make_book(home.path());

    booknav(home.path())
        .args(["--cwd", root.to_str().unwrap(), "meta"])
        .assert()
        .success()
        .stdout("CLI Book\nAuthor: Ann\n");
}

#[test]
fn invalid_settings_fail() {
    let home = TempDir::new().unwrap();
    let settings = home.path().join("settings.toml");
    fs::write(&settings, "max_ascent = 0").unwrap();

    booknav(home.path())
        .env("BOOKNAV_CONFIG", &settings)
        .arg("locate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load settings"));
}
