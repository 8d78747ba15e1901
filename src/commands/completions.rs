//! # Completions Command Implementation
//!
//! Generates shell completion scripts with `clap_complete` for bash, zsh,
//! fish, powershell and elvish.
//!
//! ```bash
//! github-workflow-migrator completions bash > ~/.local/share/bash-completion/completions/github-workflow-migrator
//! github-workflow-migrator completions zsh > ~/.zfunc/_github-workflow-migrator
//! ```

use std::io::{self, Write};

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};

use crate::cli::Cli;

/// Generate shell completion scripts
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// The shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Execute the `completions` command, writing the script to stdout.
pub fn execute(args: CompletionsArgs) -> Result<()> {
    write_completions(args.shell, &mut io::stdout())
}

fn write_completions(shell: Shell, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(shell: Shell) -> String {
        let mut buf = Vec::new();
        write_completions(shell, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_bash_completions_mention_subcommands() {
        let script = script(Shell::Bash);
        assert!(script.contains("github-workflow-migrator"));
        assert!(script.contains("migrate"));
        assert!(script.contains("validate"));
    }

    #[test]
    fn test_zsh_completions_header() {
        assert!(script(Shell::Zsh).contains("#compdef github-workflow-migrator"));
    }
}
