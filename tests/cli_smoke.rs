#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! These tests ensure that the binary starts correctly and responds to
//! basic commands without reaching any network service.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn langassist() -> Command {
    Command::cargo_bin("langassist").unwrap()
}

#[test]
fn test_help_displays_usage() {
    langassist()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Language detection and translation"))
        .stdout(predicate::str::contains("--endpoint"))
        .stdout(predicate::str::contains("--storage-url"))
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_version_displays_version() {
    langassist()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_serve_help() {
    langassist()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--dir"))
        .stdout(predicate::str::contains("--port"));
}

#[test]
fn test_chat_without_key_fails() {
    let config_home = TempDir::new().unwrap();

    langassist()
        .env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("AZURE_TRANSLATOR_KEY")
        .arg("chat")
        .assert()
        .failure()
        .stderr(predicate::str::contains("AZURE_TRANSLATOR_KEY"));
}

#[test]
fn test_configure_show_without_config() {
    let config_home = TempDir::new().unwrap();

    langassist()
        .env("XDG_CONFIG_HOME", config_home.path())
        .env("NO_COLOR", "1")
        .args(["configure", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration"))
        .stdout(predicate::str::contains("(not set)"));
}

#[test]
fn test_invalid_config_is_reported() {
    let config_home = TempDir::new().unwrap();
    let dir = config_home.path().join("langassist");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[storage\nport = ").unwrap();

    langassist()
        .env("XDG_CONFIG_HOME", config_home.path())
        .args(["configure", "--show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_serve_rejects_bad_host() {
    let config_home = TempDir::new().unwrap();
    let files = TempDir::new().unwrap();

    langassist()
        .env("XDG_CONFIG_HOME", config_home.path())
        .args(["serve", "--host", "not-an-ip", "--dir"])
        .arg(files.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid host address"));
}

#[test]
fn test_chat_options_before_serve_are_rejected() {
    let config_home = TempDir::new().unwrap();

    langassist()
        .env("XDG_CONFIG_HOME", config_home.path())
        .args(["--region", "eastus", "serve", "--host", "not-an-ip"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("only apply to the chat assistant"));
}
