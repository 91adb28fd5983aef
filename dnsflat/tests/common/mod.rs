//! Common test utilities for integration tests.
//!
//! This module provides a fixture builder for configuration trees laid out
//! under a temporary directory.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A configuration tree under a temporary directory.
///
/// The directory is removed when the fixture is dropped.
pub struct ConfigTree {
    dir: TempDir,
}

#[allow(dead_code)]
impl ConfigTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Root of the tree.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of `name` inside the tree.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Writes `contents` to `name`, creating parent directories as needed.
    pub fn file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, contents).expect("Failed to write fixture file");
        path
    }

    /// Creates the directory `name`.
    pub fn dir(&self, name: &str) -> PathBuf {
        let path = self.path(name);
        fs::create_dir_all(&path).expect("Failed to create fixture directory");
        path
    }
}

impl Default for ConfigTree {
    fn default() -> Self {
        Self::new()
    }
}
