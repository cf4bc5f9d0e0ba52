//! Command to show program information.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

const TITLE: &str = "Cross-platform path normalization and file list expansion";
const URL: &str = env!("CARGO_PKG_REPOSITORY");
const NAME: &str = "lib-path";

/// Show program information.
#[derive(Args)]
pub struct InfoCommand {}

impl InfoCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!();
        println!("Info for {NAME}:");
        println!();
        println!("    {TITLE}");
        println!();
        println!("    Version : v{}", env!("CARGO_PKG_VERSION"));
        println!("    Url     : {URL}");
        Ok(())
    }
}
