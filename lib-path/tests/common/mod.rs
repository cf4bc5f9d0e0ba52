//! Common test utilities for integration tests.
//!
//! This module provides a fixture builder for temporary directory trees and
//! helpers to spell their paths the way the library returns them.

use std::fs;
use std::path::Path;

use lib_path::PathNormalizer;
use tempfile::TempDir;

/// Canonical absolute form of `path`, as produced by the library.
#[allow(dead_code)]
pub fn canonical(path: &Path) -> String {
    PathNormalizer::default()
        .format_abs_norm_path(&path.to_string_lossy())
        .unwrap()
}

/// Builder for a temporary directory tree.
///
/// # Examples
///
/// ```no_run
/// # use common::TreeFixture;
/// let tree = TreeFixture::new()
///     .with_file("a.txt")
///     .with_file("sub/b.txt")
///     .with_dir("empty");
/// ```
#[allow(dead_code)]
pub struct TreeFixture {
    dir: TempDir,
}

#[allow(dead_code)]
impl TreeFixture {
    /// Creates an empty temporary root.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Adds a file (and its parent directories) below the root.
    pub fn with_file(self, relative: &str) -> Self {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, relative).unwrap();
        self
    }

    /// Adds a directory (and its parents) below the root.
    pub fn with_dir(self, relative: &str) -> Self {
        fs::create_dir_all(self.dir.path().join(relative)).unwrap();
        self
    }

    /// Adds a symbolic link at `relative` pointing to `target`.
    #[cfg(unix)]
    pub fn with_symlink(self, target: &Path, relative: &str) -> Self {
        std::os::unix::fs::symlink(target, self.dir.path().join(relative)).unwrap();
        self
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// The raw (OS-spelled) path of an entry, as a string.
    pub fn raw(&self, relative: &str) -> String {
        self.dir.path().join(relative).to_string_lossy().to_string()
    }

    /// The canonical form of an entry, as the library would return it.
    pub fn canonical(&self, relative: &str) -> String {
        canonical(&self.dir.path().join(relative))
    }
}

impl Default for TreeFixture {
    fn default() -> Self {
        Self::new()
    }
}
