//! Layered configuration assembly.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::error::Result;

/// Builds a [`Config`] from files, environment and programmatic overrides.
///
/// # Examples
///
/// ```
/// use lib_path::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { expand_subdirs: Some(false), ..Default::default() })
///     .build()
///     .unwrap();
/// assert_eq!(config.expand_subdirs, Some(false));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config_file: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder reading the user file and the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Also read `path`, which takes precedence over the user file and must
    /// exist.
    #[must_use]
    pub fn with_config_file(mut self, path: impl AsRef<Path>) -> Self {
        self.config_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Look for the user file in `dir` instead of `~/.lib-path`.
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Do not read any configuration file.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `LIB_PATH_*` environment variables.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Programmatic overrides, applied last.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Merge all sources.
    ///
    /// Precedence, highest first: programmatic overrides, environment,
    /// explicit file, user file, defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be loaded or an environment value
    /// is invalid.
    pub fn build(self) -> Result<Config> {
        let sources = if self.skip_files {
            Vec::new()
        } else {
            ConfigLoader::load_all(self.config_file.as_deref(), self.data_dir.as_deref())?
        };
        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        Ok(config)
    }
}
