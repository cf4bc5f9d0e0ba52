//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with an isolated home directory
//! - Command builder helpers
//! - Fixture helpers for files and directories

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak the caller's settings into tests.
const ISOLATED_VARS: [&str; 6] = [
    "LIB_PATH_CONFIG",
    "LIB_PATH_EXPAND_SUBDIRS",
    "LIB_PATH_FOLLOW_LINKS",
    "LIB_PATH_PLATFORM",
    "LIB_PATH_OUTPUT_FORMAT",
    "LIB_PATH_LOG_MODE",
];

/// Test environment with an isolated home directory.
///
/// The binary never sees the real user configuration: `HOME` points into
/// the temporary directory and all `LIB_PATH_*` variables are removed.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Home directory used by the binary
    pub home_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let home_dir = temp_path.join("home");
        std::fs::create_dir_all(&home_dir).expect("Failed to create home dir");

        Self {
            temp_dir,
            temp_path,
            home_dir,
        }
    }

    /// Get a command builder for the binary with an isolated environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("lib-path").expect("Failed to find lib-path binary");
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd.env("HOME", &self.home_dir);
        cmd.env("USERPROFILE", &self.home_dir);
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

    /// Create a file (and its parent directories) in the test environment.
    pub fn create_file(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, name).expect("Failed to write test file");
        path
    }

    /// Write the user configuration file (`~/.lib-path/config.yaml`).
    pub fn write_user_config(&self, content: &str) -> PathBuf {
        let dir = self.home_dir.join(".lib-path");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        let path = dir.join("config.yaml");
        std::fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Canonical form of `path`, as the binary prints it.
    pub fn canonical(&self, path: &Path) -> String {
        lib_path::PathNormalizer::default()
            .format_abs_norm_path(&path.to_string_lossy())
            .expect("Failed to normalize path")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
