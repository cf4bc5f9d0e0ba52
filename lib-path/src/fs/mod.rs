//! Filesystem operations: file list expansion, predicates and working
//! directory helpers.

mod checks;
mod expand;
mod workdir;

pub use checks::{
    check_target_not_within_source, ensure_is_directory, ensure_is_file, ensure_path_exists,
    has_subdirectories, is_directory_empty, is_directory_writable,
    is_target_directory_within_source_directory,
};
pub use expand::{
    expand_filelist_subdirectories, DirectorySet, ExpandOptions, FileListExpander, FileSet,
};
pub use workdir::{change_dir, change_dir_to_parent_of, current_dir, current_dir_and_change_to_home};
