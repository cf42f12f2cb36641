//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Use this directory as the working-copy root
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Open the GitHub page of a working copy, or of one of its files
#[derive(Parser, Debug)]
#[command(name = "oig")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use this directory as the working-copy root instead of the current one
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output; suppresses warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the repository, or a file in it, on GitHub
    #[command(
        name = "open",
        long_about = "Open the GitHub page for the working copy.\n\n\
            Without a path, opens the repository home page derived from the \
            \"origin\" remote in .git/config. With a path, opens the file's page \
            on the branch checked out in .git/HEAD, falling back to the default \
            branch when HEAD does not name one.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Open the repository home page
    oig open

    # Open a file on the current branch
    oig open src/main.rs

    # Print the URL instead of launching a browser
    oig open src/main.rs --print"
    )]
    Open {
        /// File to open, relative to the working-copy root or absolute
        path: Option<PathBuf>,

        /// Print the URL instead of opening a browser
        #[arg(long)]
        print: bool,
    },

    /// Print the GitHub URL without opening it
    #[command(name = "url")]
    Url {
        /// File to link to, relative to the working-copy root or absolute
        path: Option<PathBuf>,
    },

    /// Show the resolved remote, repository URL, and branch
    #[command(name = "info")]
    Info,

    /// Get, set, or list configuration values
    #[command(
        name = "config",
        long_about = "View or modify open-in-github configuration.\n\n\
            Configuration is stored in ~/.open-in-github/config.toml, or in the \
            file named by $OIG_CONFIG.",
        after_help = "\
WORKFLOW EXAMPLES:
    # List all configuration values
    oig config list

    # Use a different fallback branch
    oig config set default_branch trunk

    # Always print instead of opening
    oig config set print_only true"
    )]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(name = "completion")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Value to set
        value: String,
    },
    /// List all configuration values
    List,
    /// Show where configuration is read from and written to
    Path,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
