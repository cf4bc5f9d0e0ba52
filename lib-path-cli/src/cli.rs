//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CheckWithinCommand, CompletionsCommand, DirInfoCommand, ExpandCommand, InfoCommand,
    IsRelativeCommand, JoinCommand, NormalizeCommand, SystemDriveCommand, WritableCommand,
};
use clap::{Parser, Subcommand};
use lib_path::HostPlatform;
use std::path::PathBuf;

/// Cross-platform path normalization and file list expansion.
#[derive(Parser)]
#[command(name = "lib-path")]
#[command(
    version,
    about = "Cross-platform path normalization and file list expansion",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read an additional configuration file
    #[arg(long, value_name = "PATH", global = true, env = "LIB_PATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Apply the path rules of this platform
    #[arg(long, value_enum, global = true)]
    pub platform: Option<HostPlatform>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Show program information
    Info(InfoCommand),

    /// Normalize paths to canonical form
    Normalize(NormalizeCommand),

    /// Join path segments onto a base path
    Join(JoinCommand),

    /// Tell whether a path is relative
    IsRelative(IsRelativeCommand),

    /// Expand files and directories into a list of files
    Expand(ExpandCommand),

    /// Fail if a target directory is (within) a source directory
    CheckWithin(CheckWithinCommand),

    /// Tell whether files can be created in a directory
    Writable(WritableCommand),

    /// Show whether a directory is empty or has subdirectories
    DirInfo(DirInfoCommand),

    /// Print the Windows system drive letter
    SystemDrive(SystemDriveCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
