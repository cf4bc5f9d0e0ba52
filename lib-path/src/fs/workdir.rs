//! Process working directory helpers.
//!
//! The working directory is process-global state. Callers that change it
//! from several threads must serialize those calls themselves.

use std::env;
use std::fs;
use std::path::PathBuf;

use super::checks::{ensure_is_directory, ensure_path_exists};
use crate::error::{Error, Result};
use crate::path::PathNormalizer;

/// The current working directory in canonical form, with symbolic links
/// resolved.
///
/// # Errors
///
/// Returns an I/O error if the working directory is gone or unreadable.
pub fn current_dir() -> Result<String> {
    let cwd = fs::canonicalize(env::current_dir()?)?;
    let cwd = strip_verbatim_prefix(&cwd.to_string_lossy());
    Ok(PathNormalizer::default().format_norm_path(&cwd))
}

/// Change the working directory to `path`.
///
/// # Errors
///
/// [`Error::NotFound`] if `path` does not exist, [`Error::NotADirectory`] if
/// it is not a directory, or an I/O error if the change is refused.
pub fn change_dir(path: &str) -> Result<()> {
    ensure_path_exists(path)?;
    ensure_is_directory(path)?;
    env::set_current_dir(path)?;
    log::debug!("changed working directory to {path}");
    Ok(())
}

/// Change the working directory to the directory containing `path`.
///
/// # Errors
///
/// Any error from [`change_dir`] for the parent directory.
pub fn change_dir_to_parent_of(path: &str) -> Result<()> {
    let parent = PathNormalizer::default().get_absolute_dirname(path)?;
    change_dir(&parent)
}

/// Change the working directory to the user's home directory, returning
/// the directory that was current before.
///
/// # Errors
///
/// [`Error::NotFound`] if no home directory is known, or any error from
/// [`current_dir`] and [`change_dir`].
pub fn current_dir_and_change_to_home() -> Result<String> {
    let previous = current_dir()?;
    let home = home::home_dir().ok_or_else(|| Error::NotFound {
        path: PathBuf::from("~"),
    })?;
    change_dir(&home.to_string_lossy())?;
    Ok(previous)
}

/// Drops the `\\?\` prefix Windows puts on canonicalized paths.
fn strip_verbatim_prefix(path: &str) -> String {
    if let Some(rest) = path.strip_prefix(r"\\?\UNC\") {
        format!(r"\\{rest}")
    } else if let Some(rest) = path.strip_prefix(r"\\?\") {
        rest.to_string()
    } else {
        path.to_string()
    }
}
