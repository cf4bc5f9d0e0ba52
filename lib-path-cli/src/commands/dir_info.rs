//! Command to describe a directory.

use crate::error::CliError;
use crate::utils::{build_normalizer, GlobalOptions};
use clap::Args;
use lib_path::fs::{has_subdirectories, is_directory_empty, is_directory_writable};
use lib_path::{Error as LibError, OutputFormat};

/// Show whether a directory is empty, has subdirectories and is writable.
#[derive(Args)]
pub struct DirInfoCommand {
    /// Directory to inspect
    #[arg(value_name = "DIR")]
    pub dir: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,
}

impl DirInfoCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = build_normalizer(global)?.format_abs_norm_path(&self.dir)?;
        let empty = is_directory_empty(&path)?;
        let subdirs = has_subdirectories(&path)?;
        let writable = is_directory_writable(&path);

        match self.format {
            OutputFormat::Plain => {
                println!("path               : {path}");
                println!("empty              : {empty}");
                println!("has subdirectories : {subdirs}");
                println!("writable           : {writable}");
            }
            OutputFormat::Json => {
                let info = serde_json::json!({
                    "path": path,
                    "empty": empty,
                    "has_subdirectories": subdirs,
                    "writable": writable,
                });
                let rendered =
                    serde_json::to_string_pretty(&info).map_err(|e| LibError::Validation {
                        field: "json_output".to_string(),
                        message: format!("failed to serialize to JSON: {e}"),
                    })?;
                println!("{rendered}");
            }
        }
        Ok(())
    }
}
