//! Output formatting for path sets.
//!
//! Expansion results are sorted sets of canonical paths. Front ends render
//! them either one path per line or as a JSON array.

mod formatters;

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Result;

pub use formatters::{JsonFormatter, PlainFormatter};

/// Trait for rendering a set of paths.
pub trait OutputFormatter {
    /// Render `paths`, in their iteration order.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, paths: &BTreeSet<String>) -> Result<String>;
}

/// Available output formats.
///
/// # Examples
///
/// ```
/// use lib_path::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One path per line.
    #[default]
    Plain,
    /// A JSON array of strings.
    Json,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Plain => Box::new(PlainFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }

    /// Parses a format name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns a validation error naming `field` for unknown formats.
    pub fn parse(field: &str, s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            _ => Err(crate::Error::Validation {
                field: field.into(),
                message: format!("Invalid output format: '{s}' (expected plain/json)"),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
        }
    }
}
