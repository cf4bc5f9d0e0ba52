//! Integration tests for the configuration system.
//!
//! Tests that modify environment variables are marked with `#[serial]` to ensure
//! they run sequentially and don't interfere with each other.

use lib_path::config::environment::{
    EXPAND_SUBDIRS_ENV, FOLLOW_LINKS_ENV, OUTPUT_FORMAT_ENV, PLATFORM_ENV,
};
use lib_path::config::{Config, ConfigBuilder};
use lib_path::{Error, FileListExpander, HostPlatform, OutputFormat, PathNormalizer};
use serial_test::serial;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper to create a temporary config file.
fn create_temp_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).unwrap();
    path
}

/// RAII guard for setting and restoring environment variables.
struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

impl EnvGuard {
    fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

/// Clears all `LIB_PATH_*` configuration variables for the guard's lifetime.
fn clear_env_vars() -> Vec<EnvGuard> {
    [
        EXPAND_SUBDIRS_ENV,
        FOLLOW_LINKS_ENV,
        PLATFORM_ENV,
        OUTPUT_FORMAT_ENV,
    ]
    .iter()
    .map(|key| EnvGuard::remove(key))
    .collect()
}

#[test]
#[serial]
fn test_user_file_only() {
    let _env = clear_env_vars();
    let data_dir = TempDir::new().unwrap();
    create_temp_config(
        data_dir.path(),
        "config.yaml",
        "expand_subdirs: false\noutput_format: json\n",
    );

    let config = ConfigBuilder::new()
        .with_data_dir(data_dir.path())
        .build()
        .unwrap();
    assert!(!config.expand_options().expand_subdirs);
    assert!(config.expand_options().follow_links);
    assert_eq!(config.output_format(), OutputFormat::Json);
}

#[test]
#[serial]
fn test_full_precedence_chain() {
    let _env = clear_env_vars();
    let data_dir = TempDir::new().unwrap();
    create_temp_config(
        data_dir.path(),
        "config.yaml",
        "expand_subdirs: false\nfollow_links: false\nplatform: linux\noutput_format: json\n",
    );
    let explicit = create_temp_config(
        data_dir.path(),
        "explicit.yaml",
        "follow_links: true\nplatform: macos\n",
    );
    let _platform = EnvGuard::new(PLATFORM_ENV, "windows");

    let config = ConfigBuilder::new()
        .with_data_dir(data_dir.path())
        .with_config_file(&explicit)
        .with_config(Config {
            output_format: Some(OutputFormat::Plain),
            ..Default::default()
        })
        .build()
        .unwrap();

    // user file
    assert_eq!(config.expand_subdirs, Some(false));
    // explicit file over user file
    assert_eq!(config.follow_links, Some(true));
    // environment over explicit file
    assert_eq!(config.platform, Some(HostPlatform::Windows));
    // programmatic over everything
    assert_eq!(config.output_format, Some(OutputFormat::Plain));
}

#[test]
#[serial]
fn test_invalid_env_value_fails_build() {
    let _env = clear_env_vars();
    let data_dir = TempDir::new().unwrap();
    let _bad = EnvGuard::new(EXPAND_SUBDIRS_ENV, "sometimes");

    let err = ConfigBuilder::new()
        .with_data_dir(data_dir.path())
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::Validation { ref field, .. } if field == EXPAND_SUBDIRS_ENV));
}

#[test]
fn test_unknown_key_is_configuration_error() {
    let data_dir = TempDir::new().unwrap();
    let explicit = create_temp_config(data_dir.path(), "bad.yaml", "recurse: true\n");

    let err = ConfigBuilder::new()
        .with_data_dir(data_dir.path())
        .with_config_file(&explicit)
        .skip_env()
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
}

#[test]
fn test_configured_platform_drives_normalizer() {
    let data_dir = TempDir::new().unwrap();
    let explicit = create_temp_config(data_dir.path(), "win.yaml", "platform: windows\n");

    let config = ConfigBuilder::new()
        .with_data_dir(data_dir.path())
        .with_config_file(&explicit)
        .skip_env()
        .build()
        .unwrap();

    let expander = FileListExpander::new(
        PathNormalizer::new(config.platform()).with_working_dir("c:/work"),
    );
    assert_eq!(
        expander.normalizer().format_abs_norm_path(r"sub\..\file.txt").unwrap(),
        "c:/work/file.txt"
    );
}
