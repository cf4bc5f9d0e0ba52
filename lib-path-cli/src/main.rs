//! Main entry point for the lib-path CLI.
//!
//! It exposes the lib-path library operations as subcommands:
//! - `normalize`, `join`, `is-relative`: path string rules
//! - `expand`: turn files and directories into a list of files
//! - `check-within`, `writable`, `dir-info`: directory checks
//! - `system-drive`: Windows system drive lookup

use clap::Parser;
use lib_path_cli::cli::{Cli, Command};
use lib_path_cli::error::CliError;
use lib_path_cli::utils::GlobalOptions;

fn main() {
    // Parse CLI arguments; help and version exit normally, errors with 4
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(CliError::InvalidArguments(String::new()).exit_code());
        }
        Err(e) => e.exit(),
    };

    // Route library diagnostics to stderr based on verbosity
    let logger = lib_path::init_logger(cli.verbose, cli.quiet);
    if logger.install().is_err() {
        eprintln!("Warning: a logger was already installed");
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        platform: cli.platform,
    };

    // Execute the command
    let result = match cli.command {
        Command::Info(cmd) => cmd.execute(&global),
        Command::Normalize(cmd) => cmd.execute(&global),
        Command::Join(cmd) => cmd.execute(&global),
        Command::IsRelative(cmd) => cmd.execute(&global),
        Command::Expand(cmd) => cmd.execute(&global),
        Command::CheckWithin(cmd) => cmd.execute(&global),
        Command::Writable(cmd) => cmd.execute(&global),
        Command::DirInfo(cmd) => cmd.execute(&global),
        Command::SystemDrive(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
