//! Configuration file discovery and loading.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-user configuration directory inside the home directory.
pub const USER_CONFIG_DIR: &str = ".lib-path";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from the user file and an optional explicit file.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load every configuration file that applies.
    ///
    /// 1. User config at `~/.lib-path/config.yaml`, or `{data_dir}/config.yaml`
    ///    when `data_dir` is given (precedence 1). Skipped if absent.
    /// 2. The explicit `config_file` (precedence 2). Must exist.
    ///
    /// Sources are returned lowest precedence first.
    ///
    /// # Errors
    ///
    /// Returns an error if the explicit file is missing, or if any file that
    /// exists cannot be read or parsed.
    pub fn load_all(
        config_file: Option<&Path>,
        data_dir: Option<&Path>,
    ) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(data_dir)? {
            sources.push(user_config);
        }

        if let Some(path) = config_file {
            let config = Self::load_file(path)?;
            sources.push(ConfigSource {
                path: path.to_path_buf(),
                precedence: 2,
                config,
            });
        }

        sources.sort_by_key(|s| s.precedence);
        Ok(sources)
    }

    fn load_user_config(data_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match data_dir {
            Some(dir) => dir.join("config.yaml"),
            None => match Self::user_config_path() {
                Some(path) => path,
                None => return Ok(None),
            },
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty file yields the default configuration.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if the file does not exist, [`Error::Io`] if it
    /// cannot be read, [`Error::Configuration`] if the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                Error::Io(e)
            }
        })?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// `~/.lib-path/config.yaml`, if a home directory is known.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(USER_CONFIG_DIR).join("config.yaml"))
    }
}
