//! Command to print the Windows system drive.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use lib_path::get_windows_system_drive_letter;

/// Print the lowercase Windows system drive letter, e.g. `c:`.
///
/// Fails on other platforms.
#[derive(Args)]
pub struct SystemDriveCommand {}

impl SystemDriveCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", get_windows_system_drive_letter()?);
        Ok(())
    }
}
