//! `cdnimg completions <shell>` – shell completion script generation.

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;

pub fn run_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "cdnimg", &mut std::io::stdout());
}
