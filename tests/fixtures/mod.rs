//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the karabiner-config binary
pub fn karabiner_config_bin() -> &'static str {
    env!("CARGO_BIN_EXE_karabiner-config")
}

/// Creates a temp directory holding a config file with `contents`.
///
/// Tests always pass `--config` so the developer's own config is never read.
pub fn temp_config(contents: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, contents).expect("Failed to write config");
    (config_path, temp_dir)
}

/// Config that relies entirely on defaults.
pub fn default_config() -> (PathBuf, TempDir) {
    temp_config("")
}

/// Runs the binary in `dir` with `--config <config>` followed by `args`.
pub fn run_in(dir: &Path, config: &Path, args: &[&str]) -> Output {
    Command::new(karabiner_config_bin())
        .current_dir(dir)
        .arg("--config")
        .arg(config)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Reads and parses a generated file.
pub fn read_json(path: &Path) -> serde_json::Value {
    let content = fs::read_to_string(path).expect("Failed to read output");
    serde_json::from_str(&content).expect("Output should be valid JSON")
}
