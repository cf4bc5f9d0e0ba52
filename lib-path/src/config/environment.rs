//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `LIB_PATH_*` environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::output::OutputFormat;
use crate::platform::HostPlatform;
use std::env;

/// Overrides [`Config::expand_subdirs`].
pub const EXPAND_SUBDIRS_ENV: &str = "LIB_PATH_EXPAND_SUBDIRS";
/// Overrides [`Config::follow_links`].
pub const FOLLOW_LINKS_ENV: &str = "LIB_PATH_FOLLOW_LINKS";
/// Overrides [`Config::platform`].
pub const PLATFORM_ENV: &str = "LIB_PATH_PLATFORM";
/// Overrides [`Config::output_format`].
pub const OUTPUT_FORMAT_ENV: &str = "LIB_PATH_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use lib_path::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the variable if any value is
    /// invalid.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(EXPAND_SUBDIRS_ENV) {
            config.expand_subdirs = Some(Self::parse_bool(EXPAND_SUBDIRS_ENV, &val)?);
        }

        if let Ok(val) = env::var(FOLLOW_LINKS_ENV) {
            config.follow_links = Some(Self::parse_bool(FOLLOW_LINKS_ENV, &val)?);
        }

        if let Ok(val) = env::var(PLATFORM_ENV) {
            config.platform = Some(HostPlatform::parse(PLATFORM_ENV, &val)?);
        }

        if let Ok(val) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format = Some(OutputFormat::parse(OUTPUT_FORMAT_ENV, &val)?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
