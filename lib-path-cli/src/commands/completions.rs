//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary
const BIN_NAME: &str = "lib-path";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            Self::print_instructions(self.shell);
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }

    fn print_instructions(shell: Shell) {
        eprintln!("# Generating {shell} completion script");
        eprintln!("# Run the following command to enable completions:");

        match shell {
            Shell::Bash => {
                eprintln!(
                    "#   {BIN_NAME} completions bash > ~/.local/share/bash-completion/completions/{BIN_NAME}"
                );
                eprintln!("# Or source it directly in ~/.bashrc:");
                eprintln!("#   eval \"$({BIN_NAME} completions bash)\"");
            }
            Shell::Zsh => {
                eprintln!("#   {BIN_NAME} completions zsh > ~/.zsh/completions/_{BIN_NAME}");
                eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
            }
            Shell::Fish => {
                eprintln!(
                    "#   {BIN_NAME} completions fish > ~/.config/fish/completions/{BIN_NAME}.fish"
                );
            }
            Shell::PowerShell => {
                eprintln!("#   {BIN_NAME} completions powershell > $PROFILE");
            }
            _ => {}
        }

        eprintln!();
    }
}
