//! Library exports for lib-path-cli.
//!
//! The binary in `main.rs` is a thin dispatcher over these modules, which
//! keeps command parsing and exit code mapping unit-testable.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
