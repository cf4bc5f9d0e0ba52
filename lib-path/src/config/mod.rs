//! Configuration system for lib-path.
//!
//! Configuration controls how file lists are expanded, which platform's
//! path rules apply, and how results are printed.
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`LIB_PATH_*`)
//! 3. An explicit configuration file (`ConfigBuilder::with_config_file`)
//! 4. User config (`~/.lib-path/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use lib_path::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new()
//!     .with_config_file("lib-path.yaml")
//!     .build()
//!     .unwrap();
//!
//! println!("following links: {}", config.expand_options().follow_links);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
