//! Platform-aware path normalization.
//!
//! [`PathNormalizer`] turns any raw path spelling into the canonical form:
//! forward slashes, `.`/`..` resolved, no trailing slash, UNC `//` prefix
//! kept. The host platform and working directory are injected so that both
//! the POSIX and Windows branches behave deterministically on any machine.

use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::platform::HostPlatform;

use super::normalize::{
    dirname, is_windows_network_unc, path_remove_trailing_slashes,
    path_starts_with_windows_drive_letter, posix_absolutize, posix_normpath,
    strip_and_replace_backslashes, subtract_windows_drive_letter, windows_absolutize,
    windows_normpath,
};
use super::{PathClassification, PathRelationship};

/// Normalizes paths according to the rules of a [`HostPlatform`].
///
/// # Examples
///
/// ```
/// use lib_path::path::PathNormalizer;
/// use lib_path::HostPlatform;
///
/// let normalizer = PathNormalizer::new(HostPlatform::Linux);
/// assert_eq!(normalizer.format_norm_path("main/test/../test2"), "main/test2");
/// assert_eq!(normalizer.path_join_posix("//main", ["test"]), "//main/test");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathNormalizer {
    platform: HostPlatform,
    /// Fixed working directory; `None` means the process CWD at call time.
    working_dir: Option<String>,
}

impl PathNormalizer {
    /// Create a normalizer for `platform` that resolves against the process CWD.
    #[must_use]
    pub fn new(platform: HostPlatform) -> Self {
        Self {
            platform,
            working_dir: None,
        }
    }

    /// Resolve relative paths against `dir` instead of the process CWD.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib_path::path::PathNormalizer;
    /// use lib_path::HostPlatform;
    ///
    /// let normalizer = PathNormalizer::new(HostPlatform::Windows)
    ///     .with_working_dir(r"C:\Users\me");
    /// assert_eq!(normalizer.format_abs_norm_path("docs").unwrap(), "c:/Users/me/docs");
    /// ```
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl AsRef<str>) -> Self {
        self.working_dir = Some(strip_and_replace_backslashes(dir.as_ref()));
        self
    }

    /// The platform whose rules this normalizer applies.
    #[must_use]
    pub const fn platform(&self) -> HostPlatform {
        self.platform
    }

    /// Collapse separators and `.`/`..` segments, preserving relativity.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib_path::path::PathNormalizer;
    /// use lib_path::HostPlatform;
    ///
    /// for platform in [HostPlatform::Linux, HostPlatform::Windows] {
    ///     let n = PathNormalizer::new(platform);
    ///     assert_eq!(n.format_norm_path(r"\\main"), "//main");
    ///     assert_eq!(n.format_norm_path("//main/test/../test2"), "//main/test2");
    ///     assert_eq!(n.format_norm_path("c:/test/../test2/test.txt"), "c:/test2/test.txt");
    /// }
    /// ```
    #[must_use]
    pub fn format_norm_path(&self, path: &str) -> String {
        let path = strip_and_replace_backslashes(path);

        let normalized = if self.unc_needs_preserving(&path) {
            let rooted = format!("/{}", path.trim_start_matches('/'));
            format!("/{}", subtract_windows_drive_letter(&windows_normpath(&rooted)))
        } else {
            self.normpath(&path)
        };

        strip_and_replace_backslashes(&normalized)
    }

    /// Like [`format_norm_path`](Self::format_norm_path), then resolve against
    /// the working directory if the result is not absolute.
    ///
    /// # Errors
    ///
    /// Returns an error if no working directory was injected and the process
    /// CWD cannot be determined.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib_path::path::PathNormalizer;
    /// use lib_path::HostPlatform;
    ///
    /// let n = PathNormalizer::new(HostPlatform::Linux).with_working_dir("/work");
    /// assert_eq!(n.format_abs_norm_path("main/test/../test2").unwrap(), "/work/main/test2");
    /// assert_eq!(n.format_abs_norm_path("//main").unwrap(), "//main");
    /// ```
    pub fn format_abs_norm_path(&self, path: &str) -> Result<String> {
        let path = strip_and_replace_backslashes(path);
        let cwd = self.working_dir()?;

        let normalized = if self.unc_needs_preserving(&path) {
            let rooted = format!("/{}", path.trim_start_matches('/'));
            format!("/{}", windows_normpath(&rooted))
        } else if self.platform.is_windows() {
            windows_absolutize(&windows_normpath(&path), &cwd)
        } else {
            posix_absolutize(&posix_normpath(&path), &cwd)
        };

        Ok(strip_and_replace_backslashes(&normalized))
    }

    /// Alias of [`format_abs_norm_path`](Self::format_abs_norm_path).
    ///
    /// # Errors
    ///
    /// See [`format_abs_norm_path`](Self::format_abs_norm_path).
    pub fn get_absolute_path(&self, path: &str) -> Result<String> {
        self.format_abs_norm_path(path)
    }

    /// Join `base` with `segments`, always producing a forward-slash path.
    ///
    /// Leading slashes of every segment are stripped, so a segment never
    /// resets the path to the root. A UNC base keeps its `//` prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib_path::path::PathNormalizer;
    /// use lib_path::HostPlatform;
    ///
    /// let n = PathNormalizer::new(HostPlatform::Linux);
    /// assert_eq!(n.path_join_posix(r"\\main", ["test"]), "//main/test");
    /// assert_eq!(n.path_join_posix("//main", ["/test/test2", "test2"]), "//main/test/test2/test2");
    /// assert_eq!(n.path_join_posix(r"c:\test", ["test"]), "c:/test/test");
    /// ```
    #[must_use]
    pub fn path_join_posix<I, S>(&self, base: &str, segments: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let is_unc = is_windows_network_unc(base);
        let mut joined = strip_and_replace_backslashes(&self.normpath(
            &strip_and_replace_backslashes(base),
        ));

        for segment in segments {
            let segment = segment.as_ref().replace('\\', "/");
            let segment = segment.trim_start_matches('/');
            if !joined.is_empty() && !joined.ends_with('/') {
                joined.push('/');
            }
            joined.push_str(segment);
        }

        let joined = strip_and_replace_backslashes(&self.normpath(&joined));
        if is_unc {
            format!("//{}", joined.trim_start_matches('/'))
        } else {
            joined
        }
    }

    /// Whether `path` is relative on this platform.
    ///
    /// The normalized directory part of `path` is compared with its absolute
    /// form; a drive letter on the absolute form is ignored unless the path
    /// itself carries one.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib_path::path::PathNormalizer;
    /// use lib_path::HostPlatform;
    ///
    /// let posix = PathNormalizer::new(HostPlatform::Linux);
    /// assert!(!posix.is_relative_path("/test/test.txt").unwrap());
    /// assert!(!posix.is_relative_path("//main/install").unwrap());
    /// assert!(posix.is_relative_path("c:/test/test.txt").unwrap());
    ///
    /// let windows = PathNormalizer::new(HostPlatform::Windows);
    /// assert!(!windows.is_relative_path("c:/test/test.txt").unwrap());
    /// assert!(windows.is_relative_path("../../../test/test.txt").unwrap());
    /// ```
    pub fn is_relative_path(&self, path: &str) -> Result<bool> {
        let path = strip_and_replace_backslashes(path);
        let dir = self.format_norm_path(dirname(&path));
        let mut absolute = self.format_abs_norm_path(&dir)?;
        if !path_starts_with_windows_drive_letter(&dir) {
            absolute = subtract_windows_drive_letter(&absolute);
        }
        Ok(dir != absolute)
    }

    /// The absolute directory containing `path`, without trailing slashes.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib_path::path::PathNormalizer;
    /// use lib_path::HostPlatform;
    ///
    /// let n = PathNormalizer::new(HostPlatform::Linux);
    /// assert_eq!(n.get_absolute_dirname("//main/test/../test2/lib_path.py").unwrap(), "//main/test2");
    /// ```
    pub fn get_absolute_dirname(&self, path: &str) -> Result<String> {
        let absolute = self.format_abs_norm_path(path)?;
        Ok(path_remove_trailing_slashes(dirname(&absolute)))
    }

    /// Resolve `path2` relative to the directory of `path`.
    ///
    /// An absolute `path2` is only normalized.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib_path::path::PathNormalizer;
    /// use lib_path::HostPlatform;
    ///
    /// let n = PathNormalizer::new(HostPlatform::Linux).with_working_dir("/work");
    /// assert_eq!(
    ///     n.get_absolute_path_relative_from_path("./a/b/c/some_file.txt", "../../d/test.txt").unwrap(),
    ///     "/work/a/d/test.txt"
    /// );
    /// assert_eq!(
    ///     n.get_absolute_path_relative_from_path("./a/b/c/some_file.txt", "/f/test.txt").unwrap(),
    ///     "/f/test.txt"
    /// );
    /// ```
    pub fn get_absolute_path_relative_from_path(&self, path: &str, path2: &str) -> Result<String> {
        if self.is_relative_path(path2)? {
            let base = self.get_absolute_dirname(path)?;
            self.format_abs_norm_path(&format!("{base}/{path2}"))
        } else {
            self.format_abs_norm_path(path2)
        }
    }

    /// Whether `target` is `source` or lies beneath it.
    ///
    /// Both paths are brought into canonical absolute form with this
    /// normalizer's rules; symbolic links are not resolved.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory is needed and unavailable.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib_path::path::PathNormalizer;
    /// use lib_path::HostPlatform;
    ///
    /// let windows = PathNormalizer::new(HostPlatform::Windows);
    /// assert!(windows.is_target_directory_within_source_directory(r"C:\src", "c:/src/out").unwrap());
    /// ```
    pub fn is_target_directory_within_source_directory(
        &self,
        source: &str,
        target: &str,
    ) -> Result<bool> {
        let source = self.format_abs_norm_path(source)?;
        let target = self.format_abs_norm_path(target)?;
        Ok(PathRelationship::is_within(&target, &source))
    }

    /// Fails with [`Error::TargetWithinSource`] if `target` is `source` or
    /// lies beneath it.
    ///
    /// # Errors
    ///
    /// [`Error::TargetWithinSource`] as described, or an error from
    /// [`is_target_directory_within_source_directory`](Self::is_target_directory_within_source_directory).
    pub fn check_target_not_within_source(&self, source: &str, target: &str) -> Result<()> {
        if self.is_target_directory_within_source_directory(source, target)? {
            return Err(Error::TargetWithinSource {
                source_dir: PathBuf::from(source),
                target: PathBuf::from(target),
            });
        }
        Ok(())
    }

    fn unc_needs_preserving(&self, path: &str) -> bool {
        self.platform.is_windows() && PathClassification::of(path) == PathClassification::Unc
    }

    fn normpath(&self, path: &str) -> String {
        if self.platform.is_windows() {
            windows_normpath(path)
        } else {
            posix_normpath(path)
        }
    }

    fn working_dir(&self) -> Result<String> {
        if let Some(dir) = &self.working_dir {
            return Ok(dir.clone());
        }
        let cwd = env::current_dir().map_err(Error::Io)?;
        Ok(strip_and_replace_backslashes(&cwd.to_string_lossy()))
    }
}
