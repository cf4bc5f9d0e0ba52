//! Filesystem predicates and guards.
//!
//! Guards (`ensure_*`, `check_*`) return a typed error naming the offending
//! path. Predicates answer a yes/no question and only fail when the question
//! does not apply (asking a file whether it has subdirectories).

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::path::PathNormalizer;

/// Fails with [`Error::NotFound`] if `path` does not exist.
///
/// Dangling symbolic links count as missing.
///
/// # Errors
///
/// [`Error::NotFound`] when nothing exists at `path`.
pub fn ensure_path_exists(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        Ok(())
    } else {
        Err(Error::NotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Fails with [`Error::NotADirectory`] unless `path` is a directory.
///
/// # Errors
///
/// [`Error::NotADirectory`] when `path` is missing or not a directory.
pub fn ensure_is_directory(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.is_dir() {
        Ok(())
    } else {
        Err(Error::NotADirectory {
            path: path.to_path_buf(),
        })
    }
}

/// Fails with [`Error::NotAFile`] unless `path` is a regular file.
///
/// # Errors
///
/// [`Error::NotAFile`] when `path` is missing, unreadable or not a file.
pub fn ensure_is_file(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.is_file() {
        Ok(())
    } else {
        Err(Error::NotAFile {
            path: path.to_path_buf(),
        })
    }
}

/// Whether `dir` directly contains at least one directory.
///
/// Symbolic links to directories count as directories.
///
/// # Errors
///
/// [`Error::NotADirectory`] if `dir` is not a directory, or an I/O error if
/// it cannot be listed.
pub fn has_subdirectories(dir: impl AsRef<Path>) -> Result<bool> {
    let dir = dir.as_ref();
    ensure_is_directory(dir)?;

    for entry in fs::read_dir(dir)? {
        if entry?.path().is_dir() {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Whether `dir` has no entries at all.
///
/// # Errors
///
/// [`Error::NotADirectory`] if `dir` is not a directory, or an I/O error if
/// it cannot be listed.
pub fn is_directory_empty(dir: impl AsRef<Path>) -> Result<bool> {
    let dir = dir.as_ref();
    ensure_is_directory(dir)?;
    Ok(fs::read_dir(dir)?.next().is_none())
}

/// Best-effort probe whether files can be created in `dir`.
///
/// Creates a uniquely named file inside `dir` and removes it again. An empty
/// path is invalid, not the working directory. Any failure along the way
/// yields `false`; this function never errors.
///
/// # Examples
///
/// ```
/// use lib_path::fs::is_directory_writable;
///
/// let dir = tempfile::tempdir().unwrap();
/// assert!(is_directory_writable(dir.path()));
/// assert!(!is_directory_writable(dir.path().join("missing")));
/// ```
#[must_use]
pub fn is_directory_writable(dir: impl AsRef<Path>) -> bool {
    let dir = dir.as_ref();
    if dir.to_string_lossy().trim().is_empty() {
        log::debug!("empty path is not a writable directory");
        return false;
    }

    match tempfile::Builder::new()
        .prefix(".lib-path-probe-")
        .tempfile_in(dir)
    {
        Ok(probe) => match probe.close() {
            Ok(()) => true,
            Err(e) => {
                log::debug!("write probe in {} not removed: {e}", dir.display());
                false
            }
        },
        Err(e) => {
            log::debug!("{} is not writable: {e}", dir.display());
            false
        }
    }
}

/// Whether `target` is `source` or lies beneath it, using the rules of the
/// host platform.
///
/// See [`PathNormalizer::is_target_directory_within_source_directory`] to
/// apply another platform's rules.
///
/// # Errors
///
/// Returns an error if the working directory is needed and unavailable.
///
/// # Examples
///
/// ```
/// use lib_path::fs::is_target_directory_within_source_directory;
///
/// assert!(is_target_directory_within_source_directory("/test", "/test/test2").unwrap());
/// assert!(!is_target_directory_within_source_directory("/test", "/test2/test").unwrap());
/// ```
pub fn is_target_directory_within_source_directory(source: &str, target: &str) -> Result<bool> {
    PathNormalizer::default().is_target_directory_within_source_directory(source, target)
}

/// Fails with [`Error::TargetWithinSource`] if `target` is `source` or lies
/// beneath it, using the rules of the host platform.
///
/// # Errors
///
/// [`Error::TargetWithinSource`] as described, or an error from
/// [`is_target_directory_within_source_directory`].
///
/// # Examples
///
/// ```
/// use lib_path::fs::check_target_not_within_source;
///
/// assert!(check_target_not_within_source("/test", "/other").is_ok());
/// assert!(check_target_not_within_source("/test", "/test/sub").is_err());
/// ```
pub fn check_target_not_within_source(source: &str, target: &str) -> Result<()> {
    PathNormalizer::default().check_target_not_within_source(source, target)
}
