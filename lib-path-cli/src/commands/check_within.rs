//! Command to refuse a target directory inside a source directory.

use crate::error::CliError;
use crate::utils::{build_normalizer, GlobalOptions};
use clap::Args;

/// Fail if the target directory is the source directory or lies beneath it.
///
/// Exits with 1 when it does, 0 otherwise.
#[derive(Args)]
pub struct CheckWithinCommand {
    /// Source directory
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Target directory
    #[arg(value_name = "TARGET")]
    pub target: String,
}

impl CheckWithinCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        build_normalizer(global)?.check_target_not_within_source(&self.source, &self.target)?;
        if !global.quiet {
            println!("ok");
        }
        Ok(())
    }
}
