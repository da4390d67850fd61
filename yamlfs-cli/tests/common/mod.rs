//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers
//! - Fixture files for YAML trees

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated working directory.
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

    /// Get a command builder for the yamlfs binary.
    ///
    /// The command runs inside the temporary directory with the log mode
    /// environment variable cleared, so relative paths and default
    /// verbosity are predictable.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("yamlfs").expect("Failed to find yamlfs binary");
        cmd.current_dir(&self.temp_path);
        cmd.env_remove("YAMLFS_LOG_MODE");
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

    /// Write a file (creating parent directories) and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Lay out the standard tree: `a.yaml`, `b.yml`, `c.txt` and `d/e.yaml`
    /// under `root`, returning the root path.
    pub fn standard_tree(&self, root: &str) -> PathBuf {
        self.write_file(&format!("{root}/a.yaml"), "name: a\n");
        self.write_file(&format!("{root}/b.yml"), "name: b\n");
        self.write_file(&format!("{root}/c.txt"), "plain text\n");
        self.write_file(&format!("{root}/d/e.yaml"), "name: e\n");
        self.temp_path.join(root)
    }

    /// Run a command expected to succeed and return its stdout.
    ///
    /// # Panics
    /// Panics if the command fails.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run yamlfs");

        assert!(
            output.status.success(),
            "Command {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
