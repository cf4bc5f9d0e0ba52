//! Command to probe whether a directory is writable.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use lib_path::fs::is_directory_writable;

/// Tell whether files can be created in a directory.
///
/// Prints `true` or `false`; a missing directory is simply not writable.
#[derive(Args)]
pub struct WritableCommand {
    /// Directory to probe
    #[arg(value_name = "DIR")]
    pub dir: String,

    /// Exit with 1 if the directory is not writable
    #[arg(long)]
    pub assert: bool,
}

impl WritableCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let writable = is_directory_writable(&self.dir);
        println!("{writable}");

        if self.assert && !writable {
            return Err(CliError::SemanticFailure(format!(
                "Assertion failed: {} is not writable",
                self.dir
            )));
        }
        Ok(())
    }
}
