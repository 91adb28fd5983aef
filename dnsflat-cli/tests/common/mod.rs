//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers that keep the host's dnsmasq files out of the run
//! - Fixture writers for config files and directories

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated configuration tree.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// Environment variables that influence the run are cleared so the
    /// test controls every input.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("dnsflat").expect("Failed to find dnsflat binary");
        cmd.env_remove("DNSFLAT_DEFAULTS_FILE")
            .env_remove("DNSFLAT_OUTPUT_FORMAT")
            .env_remove("DNSFLAT_LOG_MODE");
        cmd
    }

    /// Get a command builder that never consults `/etc/default/dnsmasq`.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--no-defaults");
        cmd
    }

    /// Get a command builder that reads defaults from `defaults`.
    pub fn command_with_defaults(&self, defaults: &Path) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--defaults-file").arg(defaults);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write `contents` to `name` under the test environment.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Run `cmd` and return its stdout split into lines.
    ///
    /// # Panics
    /// Panics if the command fails or prints invalid UTF-8.
    pub fn run_lines(mut cmd: Command) -> Vec<String> {
        let output = cmd.output().expect("Failed to run dnsflat");

        assert!(
            output.status.success(),
            "dnsflat failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8 in output");
        stdout.lines().map(str::to_string).collect()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
