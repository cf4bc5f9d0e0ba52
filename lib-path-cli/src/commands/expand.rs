//! Command to expand files and directories into a list of files.

use crate::error::CliError;
use crate::utils::{build_expander, load_configuration, print_paths, GlobalOptions};
use clap::Args;
use lib_path::OutputFormat;

/// Expand files and directories into a deduplicated, sorted list of files.
#[derive(Args)]
pub struct ExpandCommand {
    /// Files and directories to expand
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Drop directories instead of listing the files beneath them
    #[arg(long)]
    pub no_subdirs: bool,

    /// Do not descend into symbolic links to directories
    #[arg(long)]
    pub no_follow_links: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl ExpandCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        let mut options = config.expand_options();
        if self.no_subdirs {
            options.expand_subdirs = false;
        }
        if self.no_follow_links {
            options.follow_links = false;
        }

        let files = build_expander(global, &config).expand(&self.paths, &options)?;
        if global.verbose {
            eprintln!("{} files", files.len());
        }

        print_paths(&files, self.format.unwrap_or_else(|| config.output_format()))
    }
}
