//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation. This is a standard pattern
//! for Rust integration test fixtures.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".teamfit");

        fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            _temp_dir: temp_dir,
            data_dir,
        }
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("teamfit");
        cmd.env_remove("TEAMFIT_PATH")
            .arg("--data-dir")
            .arg(self.data_dir())
            .arg("--format")
            .arg("plain");
        cmd
    }

    /// Command without `--data-dir`, for exercising env-based resolution.
    pub fn bare_command(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("teamfit");
        cmd.env_remove("TEAMFIT_PATH")
            .arg("--format")
            .arg("plain");
        cmd
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    pub fn pending_path(&self) -> PathBuf {
        self.data_dir.join("pending-analysis.json")
    }

    pub fn run_init(&self) -> anyhow::Result<()> {
        let mut cmd = self.command();
        let output = cmd.arg("init").output()?;

        if !output.status.success() {
            anyhow::bail!("init failed: {}", String::from_utf8_lossy(&output.stderr));
        }
        Ok(())
    }
}
