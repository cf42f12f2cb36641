//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Loads configuration and the working-copy root
//! 2. Calls the engine or resolver
//! 3. Formats and displays output
//!
//! Handlers return `anyhow::Result`; a returned error is the one notice
//! `main` prints for a failed action.

mod completion;
mod config_cmd;
mod info;
mod open;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use config_cmd::{get as config_get, list as config_list, path as config_path, set as config_set};
pub use info::info;
pub use open::{open, url};

use crate::cli::args::{Command, ConfigAction};
use crate::engine::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Open { path, print } => open::open(ctx, path.as_deref(), print),
        Command::Url { path } => open::url(ctx, path.as_deref()),
        Command::Info => info::info(ctx),
        Command::Config { action } => match action {
            ConfigAction::Get { key } => config_cmd::get(ctx, &key),
            ConfigAction::Set { key, value } => config_cmd::set(ctx, &key, &value),
            ConfigAction::List => config_cmd::list(ctx),
            ConfigAction::Path => config_cmd::path(ctx),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}
