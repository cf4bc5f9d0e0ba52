//! Build script for lib-path-cli.
//!
//! This script generates the man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("lib-path")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Cross-platform path normalization and file list expansion")
        .long_about(
            "Normalize Windows, UNC and POSIX paths into one canonical form and expand \
             mixed lists of files and directories into deduplicated file lists",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read an additional configuration file")
                .value_name("PATH")
                .global(true)
                .env("LIB_PATH_CONFIG"),
        )
        .arg(
            Arg::new("platform")
                .long("platform")
                .help("Apply the path rules of this platform")
                .value_name("PLATFORM")
                .value_parser(["windows", "linux", "macos", "other"])
                .global(true),
        )
        .subcommands(vec![
            Command::new("info").about("Show program information"),
            Command::new("normalize")
                .about("Normalize paths to canonical form")
                .long_about("Collapse separators and dot segments; --absolute resolves relative paths"),
            Command::new("join")
                .about("Join path segments onto a base path")
                .long_about("Append segments to a base path, keeping UNC prefixes intact"),
            Command::new("is-relative")
                .about("Tell whether a path is relative")
                .long_about("Print true or false according to the selected platform's rules"),
            Command::new("expand")
                .about("Expand files and directories into a list of files")
                .long_about(
                    "List every file named directly or found beneath a named directory, \
                     deduplicated and sorted",
                ),
            Command::new("check-within")
                .about("Fail if a target directory is within a source directory")
                .long_about("Exit with 1 if TARGET is SOURCE or lies beneath it"),
            Command::new("writable")
                .about("Tell whether files can be created in a directory")
                .long_about("Probe a directory by creating and removing a temporary file"),
            Command::new("dir-info")
                .about("Show whether a directory is empty or has subdirectories"),
            Command::new("system-drive")
                .about("Print the Windows system drive letter")
                .long_about("Print the lowercase drive letter of the Windows system directory"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("lib-path.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
