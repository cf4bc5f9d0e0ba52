#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # lib-path
//!
//! Cross-platform path normalization and file list expansion.
//!
//! Paths are handled as strings in one canonical form: forward slashes,
//! `.`/`..` resolved, no trailing slash, UNC prefixes (`//server/share`)
//! preserved on every platform and Windows drive letters lowercased.
//!
//! ## Core Types
//!
//! - [`PathNormalizer`]: canonicalization under Windows or POSIX rules
//! - [`FileListExpander`] and [`ExpandOptions`]: turn a mixed list of files
//!   and directories into a deduplicated set of files
//! - [`HostPlatform`]: the platform whose path rules apply
//! - [`Config`] and [`ConfigBuilder`]: layered configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use lib_path::{HostPlatform, PathNormalizer};
//!
//! let windows = PathNormalizer::new(HostPlatform::Windows);
//! assert_eq!(windows.format_norm_path(r"C:\test\..\test2\test.txt"), "c:/test2/test.txt");
//! assert_eq!(windows.format_norm_path(r"\\main\test\..\test2"), "//main/test2");
//!
//! let posix = PathNormalizer::new(HostPlatform::Linux).with_working_dir("/home/user");
//! assert_eq!(posix.format_abs_norm_path("docs/../src").unwrap(), "/home/user/src");
//! ```

pub mod config;
pub mod error;
pub mod fs;
pub mod logging;
pub mod output;
pub mod path;
pub mod platform;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use fs::{ExpandOptions, FileListExpander, FileSet};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::OutputFormat;
pub use path::{PathClassification, PathNormalizer, PathRelationship};
pub use platform::{get_windows_system_drive_letter, HostPlatform};
