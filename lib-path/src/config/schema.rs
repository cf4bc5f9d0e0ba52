//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::fs::ExpandOptions;
use crate::output::OutputFormat;
use crate::platform::HostPlatform;

/// Complete configuration structure.
///
/// Every field is optional so that partial files and environment overrides
/// can be layered; the accessor methods fill in the defaults.
///
/// # Examples
///
/// ```
/// use lib_path::config::Config;
/// use lib_path::OutputFormat;
///
/// let config = Config {
///     follow_links: Some(false),
///     output_format: Some(OutputFormat::Json),
///     ..Default::default()
/// };
/// assert!(config.expand_options().expand_subdirs);
/// assert!(!config.expand_options().follow_links);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Expand listed directories into the files beneath them.
    pub expand_subdirs: Option<bool>,

    /// Descend into symbolic links to directories while expanding.
    pub follow_links: Option<bool>,

    /// Path rules to apply instead of the compile target's.
    pub platform: Option<HostPlatform>,

    /// Output format for path listings.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Expansion options with defaults filled in.
    #[must_use]
    pub fn expand_options(&self) -> ExpandOptions {
        let defaults = ExpandOptions::default();
        ExpandOptions {
            expand_subdirs: self.expand_subdirs.unwrap_or(defaults.expand_subdirs),
            follow_links: self.follow_links.unwrap_or(defaults.follow_links),
        }
    }

    /// The configured platform, or the current one.
    #[must_use]
    pub fn platform(&self) -> HostPlatform {
        self.platform.unwrap_or_default()
    }

    /// The configured output format, or plain.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.expand_subdirs.is_none());
        assert_eq!(config.expand_options(), ExpandOptions::default());
        assert_eq!(config.platform(), HostPlatform::current());
        assert_eq!(config.output_format(), OutputFormat::Plain);
    }

    #[test]
    fn test_full_config() {
        let yaml = r"
expand_subdirs: false
follow_links: false
platform: windows
output_format: json
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.expand_subdirs, Some(false));
        assert_eq!(config.follow_links, Some(false));
        assert_eq!(config.platform, Some(HostPlatform::Windows));
        assert_eq!(config.output_format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_macos_spelling() {
        let config: Config = serde_yaml::from_str("platform: macos").unwrap();
        assert_eq!(config.platform, Some(HostPlatform::MacOs));
    }

    #[test]
    fn test_config_deny_unknown_fields() {
        let yaml = r"
follow_links: true
unknown_field: value
";
        let result: Result<Config, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(serde_yaml::from_str::<Config>("platform: beos").is_err());
        assert!(serde_yaml::from_str::<Config>("output_format: csv").is_err());
        assert!(serde_yaml::from_str::<Config>("follow_links: maybe").is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = Config {
            expand_subdirs: Some(true),
            platform: Some(HostPlatform::Linux),
            ..Default::default()
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }
}
