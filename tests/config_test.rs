//! Integration tests for Settings loading from a config file.
//!
//! These tests point `load_from` at temp files, so no global config is read.
//! They assume `STATE_RECONSTRUCTION_FILE` is unset; the env override has its
//! own test binary (`config_env_test.rs`).

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use dirtree::config::Settings;

#[test]
fn given_no_config_file_when_loading_then_uses_default_state_file() {
    let settings = Settings::load_from(None).expect("load defaults");
    assert_eq!(settings.state_file, PathBuf::from("state"));
}

#[test]
fn given_missing_config_file_when_loading_then_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let settings =
        Settings::load_from(Some(temp.path().join("dirtree.toml").as_path())).expect("load settings");
    assert_eq!(settings.state_file, PathBuf::from("state"));
}

#[test]
fn given_config_file_with_state_file_when_loading_then_overrides_default() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("dirtree.toml");
    fs::write(&config_path, "state_file = \"snapshot.txt\"\n").unwrap();

    let settings = Settings::load_from(Some(config_path.as_path())).expect("load settings");

    assert_eq!(settings.state_file, PathBuf::from("snapshot.txt"));
}

#[test]
fn given_malformed_config_file_when_loading_then_config_error() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("dirtree.toml");
    fs::write(&config_path, "state_file = [unterminated\n").unwrap();

    let err = Settings::load_from(Some(config_path.as_path())).unwrap_err();

    assert!(err.to_string().starts_with("config error:"), "got: {err}");
}

#[test]
fn given_loaded_settings_when_cli_override_then_cli_wins() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("dirtree.toml");
    fs::write(&config_path, "state_file = \"from-config\"\n").unwrap();

    let settings = Settings::load_from(Some(config_path.as_path()))
        .unwrap()
        .with_state_file(Some(PathBuf::from("from-cli")));

    assert_eq!(settings.state_file, PathBuf::from("from-cli"));
}
