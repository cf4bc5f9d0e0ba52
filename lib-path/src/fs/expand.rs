//! File list expansion.
//!
//! Turns a mixed list of file and directory paths into the set of files
//! they denote. Directories contribute every regular file beneath them,
//! hidden files included. All results are canonical absolute paths, so a
//! file named twice (or named directly and found inside a listed directory)
//! appears once.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use super::checks::{ensure_is_directory, ensure_is_file, ensure_path_exists};
use crate::error::{Error, Result};
use crate::path::PathNormalizer;

/// A set of canonical absolute file paths, iterated in sorted order.
pub type FileSet = BTreeSet<String>;

/// A set of canonical absolute directory paths, iterated in sorted order.
pub type DirectorySet = BTreeSet<String>;

/// Options controlling [`FileListExpander::expand`].
///
/// # Examples
///
/// ```
/// use lib_path::ExpandOptions;
///
/// let options = ExpandOptions::default().with_follow_links(false);
/// assert!(options.expand_subdirs);
/// assert!(!options.follow_links);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandOptions {
    /// Whether listed directories contribute the files beneath them. When
    /// `false`, directories are dropped from the result.
    pub expand_subdirs: bool,

    /// Whether symbolic links to directories are descended into.
    pub follow_links: bool,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            expand_subdirs: true,
            follow_links: true,
        }
    }
}

impl ExpandOptions {
    /// Set whether directories are expanded.
    #[must_use]
    pub const fn with_expand_subdirs(mut self, expand_subdirs: bool) -> Self {
        self.expand_subdirs = expand_subdirs;
        self
    }

    /// Set whether directory symlinks are followed.
    #[must_use]
    pub const fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }
}

/// Expands file and directory paths into a set of files.
///
/// The expander owns a [`PathNormalizer`]; relative inputs are resolved
/// against its working directory.
///
/// # Examples
///
/// ```
/// use lib_path::{ExpandOptions, FileListExpander};
///
/// let dir = tempfile::tempdir().unwrap();
/// std::fs::create_dir(dir.path().join("sub")).unwrap();
/// std::fs::write(dir.path().join("a.txt"), "").unwrap();
/// std::fs::write(dir.path().join("sub").join("b.txt"), "").unwrap();
///
/// let expander = FileListExpander::default();
/// let root = dir.path().to_string_lossy().to_string();
/// let files = expander.expand([root.as_str()], &ExpandOptions::default()).unwrap();
/// assert_eq!(files.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FileListExpander {
    normalizer: PathNormalizer,
}

impl FileListExpander {
    /// Create an expander using the given normalizer.
    #[must_use]
    pub const fn new(normalizer: PathNormalizer) -> Self {
        Self { normalizer }
    }

    /// The normalizer used for all paths.
    #[must_use]
    pub const fn normalizer(&self) -> &PathNormalizer {
        &self.normalizer
    }

    /// Split `paths` into files and directories.
    ///
    /// Every path is canonicalized before classification. Anything that
    /// exists and is not a directory counts as a file.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] for the first path that does not exist.
    pub fn classify<I, S>(&self, paths: I) -> Result<(FileSet, DirectorySet)>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut files = FileSet::new();
        let mut dirs = DirectorySet::new();

        for path in paths {
            let canonical = self.normalizer.format_abs_norm_path(path.as_ref())?;
            ensure_path_exists(&canonical)?;

            if Path::new(&canonical).is_dir() {
                dirs.insert(canonical);
            } else {
                files.insert(canonical);
            }
        }

        Ok((files, dirs))
    }

    /// Every regular file beneath `dir`, at any depth.
    ///
    /// Hidden files are included. Dangling symbolic links, and links to
    /// directories when `follow_links` is `false`, are skipped. Symbolic
    /// links to files are always included.
    ///
    /// # Errors
    ///
    /// - [`Error::NotADirectory`] if `dir` is not a directory
    /// - [`Error::CycleDetected`] if following links leads back into an ancestor
    /// - [`Error::NotAFile`] if an entry stops being a file while it is listed
    /// - [`Error::Io`] if a directory cannot be read
    pub fn list_files_recursive(&self, dir: &str, follow_links: bool) -> Result<FileSet> {
        let root = self.normalizer.format_abs_norm_path(dir)?;
        ensure_is_directory(&root)?;

        let mut files = FileSet::new();
        for entry in WalkDir::new(&root).follow_links(follow_links).min_depth(1) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if is_dangling_link(&err) => {
                    log::debug!("skipping dangling link {}", display_walk_path(&err));
                    continue;
                }
                Err(err) => return Err(Error::from_walk(err, Path::new(&root))),
            };

            let is_file = if entry.file_type().is_symlink() {
                fs::metadata(entry.path()).is_ok_and(|meta| meta.is_file())
            } else {
                entry.file_type().is_file()
            };
            if !is_file {
                continue;
            }

            let canonical = self
                .normalizer
                .format_abs_norm_path(&entry.path().to_string_lossy())?;
            ensure_is_file(&canonical)?;
            files.insert(canonical);
        }

        log::debug!("found {} files below {root}", files.len());
        Ok(files)
    }

    /// Expand `paths` into the set of files they denote.
    ///
    /// Files are taken as they are. Directories are replaced by every file
    /// beneath them, or dropped entirely when `options.expand_subdirs` is
    /// `false`. An empty input yields an empty set.
    ///
    /// # Errors
    ///
    /// Any error from [`classify`](Self::classify) or
    /// [`list_files_recursive`](Self::list_files_recursive).
    pub fn expand<I, S>(&self, paths: I, options: &ExpandOptions) -> Result<FileSet>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (mut files, dirs) = self.classify(paths)?;

        if options.expand_subdirs {
            for dir in &dirs {
                files.extend(self.list_files_recursive(dir, options.follow_links)?);
            }
        } else if !dirs.is_empty() {
            log::debug!("dropping {} directories, expansion disabled", dirs.len());
        }

        Ok(files)
    }
}

/// Expand `paths` relative to the process working directory.
///
/// Shorthand for [`FileListExpander::expand`] with a default expander.
///
/// # Errors
///
/// See [`FileListExpander::expand`].
pub fn expand_filelist_subdirectories<I, S>(paths: I, options: &ExpandOptions) -> Result<FileSet>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    FileListExpander::default().expand(paths, options)
}

/// A link whose target is gone. `walkdir` reports these as errors when
/// following links.
fn is_dangling_link(err: &walkdir::Error) -> bool {
    if err.loop_ancestor().is_some() {
        return false;
    }
    err.path().is_some_and(|path| {
        path.symlink_metadata()
            .is_ok_and(|meta| meta.file_type().is_symlink())
            && !path.exists()
    })
}

fn display_walk_path(err: &walkdir::Error) -> String {
    err.path()
        .map_or_else(String::new, |p| p.display().to_string())
}
