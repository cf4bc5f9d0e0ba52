//! Command to tell whether a path is relative.

use crate::error::CliError;
use crate::utils::{build_normalizer, GlobalOptions};
use clap::Args;

/// Tell whether a path is relative.
///
/// Prints `true` or `false`. Drive paths such as `c:/x` are relative unless
/// Windows rules apply.
#[derive(Args)]
pub struct IsRelativeCommand {
    /// Path to check
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl IsRelativeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let normalizer = build_normalizer(global)?;
        println!("{}", normalizer.is_relative_path(&self.path)?);
        Ok(())
    }
}
