//! Command to join path segments.

use crate::error::CliError;
use crate::utils::{build_normalizer, GlobalOptions};
use clap::Args;

/// Join path segments onto a base path.
///
/// Segments never reset the base: a leading `/` on a segment is dropped.
#[derive(Args)]
pub struct JoinCommand {
    /// Base path
    #[arg(value_name = "BASE")]
    pub base: String,

    /// Segments to append
    #[arg(value_name = "SEGMENT", allow_hyphen_values = true)]
    pub segments: Vec<String>,
}

impl JoinCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let normalizer = build_normalizer(global)?;
        println!("{}", normalizer.path_join_posix(&self.base, &self.segments));
        Ok(())
    }
}
