//! Command to normalize paths.

use crate::error::CliError;
use crate::utils::{build_normalizer, GlobalOptions};
use clap::Args;
use lib_path::path::normalize::classify_path;

/// Normalize paths to canonical form.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Paths to normalize
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Resolve relative paths against the working directory
    #[arg(long)]
    pub absolute: bool,
}

impl NormalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let normalizer = build_normalizer(global)?;

        for path in &self.paths {
            if global.verbose {
                eprintln!("{path}: {}", classify_path(path));
            }
            let normalized = if self.absolute {
                normalizer.format_abs_norm_path(path)?
            } else {
                normalizer.format_norm_path(path)
            };
            println!("{normalized}");
        }
        Ok(())
    }
}
