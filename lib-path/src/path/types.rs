//! Path classification.

use std::fmt;

use super::normalize::{
    is_windows_network_unc, path_starts_with_windows_drive_letter, strip_and_replace_backslashes,
};

/// The syntactic kind of a path string.
///
/// Derived from the spelling alone; the filesystem is never consulted.
/// [`PathNormalizer`](super::PathNormalizer) uses it to pick its branch: a
/// [`Unc`](Self::Unc) path keeps its `//` prefix under Windows rules.
///
/// # Examples
///
/// ```
/// use lib_path::path::PathClassification;
///
/// assert_eq!(PathClassification::of(r"\\server\share"), PathClassification::Unc);
/// assert_eq!(PathClassification::of("C:/Windows"), PathClassification::AbsoluteDrive);
/// assert_eq!(PathClassification::of("/usr/lib"), PathClassification::AbsolutePosix);
/// assert_eq!(PathClassification::of("src/lib.rs"), PathClassification::Relative);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathClassification {
    /// Relative to some working directory (including drive-relative `c:foo`).
    Relative,
    /// Rooted POSIX path such as `/usr/lib`.
    AbsolutePosix,
    /// Windows drive path such as `c:/Windows`.
    AbsoluteDrive,
    /// Windows network path such as `//server/share`.
    Unc,
}

impl PathClassification {
    /// Classifies a raw path string.
    #[must_use]
    pub fn of(path: &str) -> Self {
        if is_windows_network_unc(path) {
            Self::Unc
        } else if path_starts_with_windows_drive_letter(path) {
            Self::AbsoluteDrive
        } else if strip_and_replace_backslashes(path).starts_with('/') {
            Self::AbsolutePosix
        } else {
            Self::Relative
        }
    }
}

impl fmt::Display for PathClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Relative => write!(f, "relative"),
            Self::AbsolutePosix => write!(f, "absolute-posix"),
            Self::AbsoluteDrive => write!(f, "absolute-drive"),
            Self::Unc => write!(f, "unc"),
        }
    }
}
