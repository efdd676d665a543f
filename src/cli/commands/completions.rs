//! Shell completion generation
//!
//! Generates shell completion scripts for bash, zsh, fish, and PowerShell.
//!
//! # Usage
//!
//! ```bash
//! # Bash - add to ~/.bashrc
//! source <(stockgen completions bash)
//!
//! # Zsh - add to ~/.zshrc
//! source <(stockgen completions zsh)
//!
//! # Fish - add to ~/.config/fish/completions/stockgen.fish
//! stockgen completions fish > ~/.config/fish/completions/stockgen.fish
//!
//! # PowerShell - add to $PROFILE
//! stockgen completions powershell >> $PROFILE
//! ```

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use miette::Result;
use std::io;

use crate::cli::Cli;

#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

pub fn run(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "stockgen", &mut io::stdout());
    Ok(())
}
