//! Error types for the lib-path library.
//!
//! Every failure carries the offending path(s) as structured context so that
//! callers can decide how to report it. The library itself never logs on the
//! error path.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a lib-path error.
///
/// # Examples
///
/// ```
/// use lib_path::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/tmp".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the lib-path library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path does not exist.
    #[error("path does not exist: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// A path exists but is not a directory.
    #[error("not a directory: {}", path.display())]
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// A path does not exist or is not a regular file.
    #[error("file does not exist or no permission: {}", path.display())]
    NotAFile {
        /// The offending path.
        path: PathBuf,
    },

    /// A target directory lies inside (or is) the source directory.
    #[error(
        "target directory: \"{}\" is within the source directory \"{}\"",
        target.display(),
        source_dir.display()
    )]
    TargetWithinSource {
        /// The source directory.
        source_dir: PathBuf,
        /// The target directory nested within it.
        target: PathBuf,
    },

    /// An operation is only available on a different platform.
    #[error("{operation} is not supported on {platform}")]
    PlatformUnsupported {
        /// The operation that was requested.
        operation: &'static str,
        /// The platform the operation was requested on.
        platform: String,
    },

    /// A symbolic link loop was found while walking a directory tree.
    #[error("symlink loop detected: {} points back to {}", path.display(), ancestor.display())]
    CycleDetected {
        /// The link that closes the loop.
        path: PathBuf,
        /// The directory the link resolves back to.
        ancestor: PathBuf,
    },

    /// The Windows system drive could not be determined.
    #[error("can not determine Windows system drive: {reason}")]
    SystemDriveUnavailable {
        /// Why the lookup failed.
        reason: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib_path::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::NotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error reports a path of the wrong kind (file vs directory).
    #[must_use]
    pub fn is_wrong_kind(&self) -> bool {
        matches!(self, Self::NotADirectory { .. } | Self::NotAFile { .. })
    }

    /// Maps a `walkdir` failure onto the library error type.
    pub(crate) fn from_walk(err: walkdir::Error, root: &std::path::Path) -> Self {
        if let Some(ancestor) = err.loop_ancestor() {
            return Self::CycleDetected {
                path: err.path().unwrap_or(root).to_path_buf(),
                ancestor: ancestor.to_path_buf(),
            };
        }

        let path = err.path().unwrap_or(root).to_path_buf();
        match err.into_io_error() {
            Some(io) if io.kind() == std::io::ErrorKind::NotFound => Self::NotFound { path },
            Some(io) => Self::Io(io),
            None => Self::NotFound { path },
        }
    }
}
