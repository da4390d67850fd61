//! Common test utilities for integration tests.
//!
//! This module provides a fixture builder for laying out small directory
//! trees of YAML and non-YAML files.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for a temporary directory tree.
///
/// # Examples
///
/// ```no_run
/// # use common::TreeFixture;
/// let tree = TreeFixture::new()
///     .with_file("a.yaml", "a: 1\n")
///     .with_dir("empty")
///     .build();
/// ```
#[allow(dead_code)]
pub struct TreeFixture {
    files: Vec<(PathBuf, String)>,
    dirs: Vec<PathBuf>,
}

#[allow(dead_code)]
impl TreeFixture {
    /// Creates a new fixture builder with no entries.
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            dirs: Vec::new(),
        }
    }

    /// Adds a file at `relative` with the given contents.
    pub fn with_file(mut self, relative: impl Into<PathBuf>, contents: &str) -> Self {
        self.files.push((relative.into(), contents.to_string()));
        self
    }

    /// Adds an empty directory at `relative`.
    pub fn with_dir(mut self, relative: impl Into<PathBuf>) -> Self {
        self.dirs.push(relative.into());
        self
    }

    /// The layout most tests start from: two YAML files, a text file and a
    /// nested YAML file.
    pub fn standard() -> Self {
        Self::new()
            .with_file("a.yaml", "name: a\n")
            .with_file("b.yml", "name: b\n")
            .with_file("c.txt", "not yaml\n")
            .with_file("d/e.yaml", "name: e\n")
    }

    /// Writes the tree into a fresh temporary directory.
    ///
    /// # Panics
    ///
    /// Panics if the tree cannot be written. This is acceptable in test code
    /// where we want to fail fast on broken fixtures.
    pub fn build(self) -> Tree {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        for relative in &self.dirs {
            fs::create_dir_all(dir.path().join(relative)).expect("Failed to create directory");
        }

        for (relative, contents) in &self.files {
            let path = dir.path().join(relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("Failed to create parent directory");
            }
            fs::write(&path, contents).expect("Failed to write fixture file");
        }

        Tree { dir }
    }
}

impl Default for TreeFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A built fixture tree, removed when dropped.
pub struct Tree {
    dir: TempDir,
}

#[allow(dead_code)]
impl Tree {
    /// Root of the tree.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of an entry in the tree.
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Absolute path of an entry as a string, for the `&str` based APIs.
    pub fn join_str(&self, relative: impl AsRef<Path>) -> String {
        self.join(relative).to_string_lossy().into_owned()
    }
}
