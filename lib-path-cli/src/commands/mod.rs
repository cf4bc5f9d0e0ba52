//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `info`: Show program information
//! - `normalize`: Normalize paths to canonical form
//! - `join`: Join path segments onto a base path
//! - `is_relative`: Tell whether a path is relative
//! - `expand`: Expand files and directories into a list of files
//! - `check_within`: Fail if a target directory is within a source directory
//! - `writable`: Probe whether a directory is writable
//! - `dir_info`: Report emptiness and subdirectories of a directory
//! - `system_drive`: Print the Windows system drive letter
//! - `completions`: Generate shell completion scripts

pub mod check_within;
pub mod completions;
pub mod dir_info;
pub mod expand;
pub mod info;
pub mod is_relative;
pub mod join;
pub mod normalize;
pub mod system_drive;
pub mod writable;

pub use check_within::CheckWithinCommand;
pub use completions::CompletionsCommand;
pub use dir_info::DirInfoCommand;
pub use expand::ExpandCommand;
pub use info::InfoCommand;
pub use is_relative::IsRelativeCommand;
pub use join::JoinCommand;
pub use normalize::NormalizeCommand;
pub use system_drive::SystemDriveCommand;
pub use writable::WritableCommand;
