//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands:
//! configuration loading, normalizer construction and output formatting.

use crate::error::CliError;
use lib_path::{
    Config, ConfigBuilder, FileListExpander, FileSet, HostPlatform, OutputFormat, PathNormalizer,
};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Additional configuration file.
    pub config: Option<PathBuf>,

    /// Path rules to apply instead of the configured or native ones.
    pub platform: Option<HostPlatform>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables
/// 2. The `--config` file
/// 3. The user configuration file
/// 4. Built-in defaults (lowest priority)
///
/// Command-line flags are applied on top by each command.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(path) = &global.config {
        builder = builder.with_config_file(path);
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// The platform to use: `--platform`, then configuration, then native.
pub fn resolve_platform(global: &GlobalOptions, config: &Config) -> HostPlatform {
    global.platform.unwrap_or_else(|| config.platform())
}

/// Build a normalizer for the resolved platform.
pub fn build_normalizer(global: &GlobalOptions) -> Result<PathNormalizer, CliError> {
    let config = load_configuration(global)?;
    Ok(PathNormalizer::new(resolve_platform(global, &config)))
}

/// Build an expander for the resolved platform.
pub fn build_expander(global: &GlobalOptions, config: &Config) -> FileListExpander {
    FileListExpander::new(PathNormalizer::new(resolve_platform(global, config)))
}

/// Render a path set in the given format and print it.
///
/// Nothing is printed for an empty set in plain format.
pub fn print_paths(paths: &FileSet, format: OutputFormat) -> Result<(), CliError> {
    let output = format.create_formatter().format(paths)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_flag_wins_over_config() {
        let global = GlobalOptions {
            platform: Some(HostPlatform::Windows),
            ..Default::default()
        };
        let config = Config {
            platform: Some(HostPlatform::Linux),
            ..Default::default()
        };
        assert_eq!(resolve_platform(&global, &config), HostPlatform::Windows);
    }

    #[test]
    fn test_platform_falls_back_to_config() {
        let config = Config {
            platform: Some(HostPlatform::Linux),
            ..Default::default()
        };
        assert_eq!(
            resolve_platform(&GlobalOptions::default(), &config),
            HostPlatform::Linux
        );
        assert_eq!(
            resolve_platform(&GlobalOptions::default(), &Config::default()),
            HostPlatform::current()
        );
    }
}
