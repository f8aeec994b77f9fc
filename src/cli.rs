//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for gamedex using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive genre filter over the fetched catalog (default)
//! - **list**: One-shot fetch and render, optionally filtered by genre
//! - **genres**: Print the genres present in the catalog
//! - **completions**: Generate shell completion scripts
//!
//! # Design Features
//!
//! - Global `--quiet` flag for scripting-friendly output
//! - Command aliases (e.g., `b` for `browse`, `ls` for `list`)

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

/// Terminal browser for the FreeToGame catalog
#[derive(Parser, Debug)]
#[command(name = "gamedex", version, about)]
pub struct Cli {
    /// Suppress informational output (only print results)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Browse the catalog interactively, filtering by genre (default)
    #[command(visible_alias = "b")]
    Browse,

    /// Fetch the catalog once and print it
    #[command(visible_alias = "ls")]
    List {
        /// Only show games of this genre (exact match)
        #[arg(short, long)]
        genre: Option<String>,
    },

    /// Print the genres present in the catalog
    #[command(visible_alias = "g")]
    Genres,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The selected command, defaulting to browse
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse)
    }

    /// Write a completion script for `shell` to stdout
    pub fn generate_completions(shell: Shell) {
        let mut cmd = Self::command();
        clap_complete::generate(shell, &mut cmd, "gamedex", &mut std::io::stdout());
    }
}
