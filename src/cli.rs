use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI. Running without a subcommand generates the scaffold.
#[derive(Parser, Debug)]
#[command(
    name = "auth-scaffold",
    version,
    about = "Scaffold the auth-service configuration module"
)]
pub struct Cli {
    #[arg(short = 'C', long = "chdir")]
    pub chdir: Option<PathBuf>,
    /// Configuration file (defaults to `auth-scaffold.toml` when present).
    #[arg(short = 'f', long = "file")]
    pub file: Option<PathBuf>,
    /// Base directory of the generated service tree.
    #[arg(long = "base", global = true)]
    pub base: Option<PathBuf>,
    #[arg(short = 'n', long = "dry-run", global = true)]
    pub dry_run: bool,
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, Eq, PartialEq)]
pub enum Command {
    /// Create the directory tree and write every template (default).
    Generate,
    /// Print the directories and files that would be produced.
    List,
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}
