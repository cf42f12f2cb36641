//! cli
//!
//! Command-line interface layer for open-in-github.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Install the diagnostic log subscriber
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is the trigger adapter. It turns a subcommand into a
//! [`crate::engine::Target`], hands it to the engine, and renders the
//! outcome as one notice or one opened URL.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::io::IsTerminal;

use crate::engine;
use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "OIG_LOG";

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.debug, cli.quiet);

    let ctx = engine::Context {
        cwd: cli.cwd.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
    };

    commands::dispatch(cli.command, &ctx)
}

/// Install the stderr log subscriber.
///
/// `$OIG_LOG` wins when set. Otherwise `--debug` selects `debug`, `--quiet`
/// turns logging off, and the default is `warn`.
fn init_logging(debug: bool, quiet: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(default_filter(debug, quiet))
    });

    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

/// Filter directive used when `$OIG_LOG` is unset.
fn default_filter(debug: bool, quiet: bool) -> &'static str {
    if debug {
        "debug"
    } else if quiet {
        "off"
    } else {
        "warn"
    }
}
