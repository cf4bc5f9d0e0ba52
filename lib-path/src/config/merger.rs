//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use lib_path::config::{Config, ConfigMerger};
///
/// let low = Config { follow_links: Some(true), ..Default::default() };
/// let high = Config { follow_links: Some(false), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.follow_links, Some(false));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge configuration sources into a final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target. Every field set in `source` wins.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.expand_subdirs.is_some() {
            target.expand_subdirs = source.expand_subdirs;
        }

        if source.follow_links.is_some() {
            target.follow_links = source.follow_links;
        }

        if source.platform.is_some() {
            target.platform = source.platform;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}
