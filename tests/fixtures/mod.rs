//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the palettegen binary (set by cargo at compile time)
pub fn palettegen_bin() -> &'static str {
    env!("CARGO_BIN_EXE_palettegen")
}

/// Creates a Command that reads and writes config in `config_dir` only.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(palettegen_bin());
    cmd.env("PALETTEGEN_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs the binary with a fresh, empty config directory.
pub fn run(args: &[&str]) -> Output {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    isolated_command(args, temp_dir.path())
        .output()
        .expect("Failed to execute command")
}

/// Runs the binary against an existing config directory.
pub fn run_in(args: &[&str], config_dir: &Path) -> Output {
    isolated_command(args, config_dir)
        .output()
        .expect("Failed to execute command")
}

/// Creates a config directory holding `content` as config.toml.
pub fn temp_config_dir(content: &str) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("config.toml"), content).expect("Failed to write config");
    temp_dir
}

/// Parses stdout as JSON, failing with stderr on error.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout should be JSON ({e}). stdout: {} stderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    })
}

/// Asserts the process exit code, printing stderr on mismatch.
pub fn assert_exit(output: &Output, code: i32) {
    assert_eq!(
        output.status.code(),
        Some(code),
        "unexpected exit code. stdout: {} stderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}
