//! Cross-platform path normalization.
//!
//! Paths are handled as plain strings in one canonical representation:
//!
//! - forward slashes only
//! - `.` and `..` segments resolved
//! - no trailing slash, except for a bare root (`/`) or UNC root (`//`)
//! - a UNC prefix (`//server/share`) is preserved on every platform
//! - on Windows, drive letters are lowercase (`c:/Windows`)
//!
//! Canonicalization is idempotent: normalizing a canonical path returns it
//! unchanged.
//!
//! # Platform rules
//!
//! POSIX and Windows disagree on a handful of spellings (`c:/x` is relative
//! on POSIX, `//server` needs special care on Windows). Instead of asking the
//! operating system, [`PathNormalizer`] is handed a
//! [`HostPlatform`](crate::HostPlatform), so both rule sets can be exercised
//! on any machine:
//!
//! ```
//! use lib_path::path::PathNormalizer;
//! use lib_path::HostPlatform;
//!
//! let posix = PathNormalizer::new(HostPlatform::Linux);
//! let windows = PathNormalizer::new(HostPlatform::Windows);
//!
//! assert!(posix.is_relative_path("c:/test/test.txt").unwrap());
//! assert!(!windows.is_relative_path("c:/test/test.txt").unwrap());
//! ```
//!
//! The stateless string rules (backslash replacement, drive letter and UNC
//! detection, trailing slash removal) live in [`normalize`].

pub mod normalize;
pub mod normalizer;
pub mod relationship;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use normalizer::PathNormalizer;
pub use relationship::PathRelationship;
pub use types::PathClassification;
