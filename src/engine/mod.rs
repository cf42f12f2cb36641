//! engine
//!
//! Runs the resolver-backed workflows on behalf of the CLI.
//!
//! # Architecture
//!
//! The engine sits between the trigger layer ([`crate::cli`]) and the pure
//! pieces ([`crate::git`], [`crate::forge`]). It owns the caller policies:
//! branch fallback, one open per success, nothing opened on failure.
//!
//! - [`open`] - Target resolution and the open workflow

pub mod open;

pub use open::{
    branch_or_default, fallback_notice, relative_file_path, resolve_target_url, BranchSource,
    OpenError, OpenPlan, Target,
};

use std::path::PathBuf;

/// Execution context for commands.
///
/// This captures global flags and environment that affect command execution.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Working-copy root override. Defaults to the current directory.
    pub cwd: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
}

impl Context {
    /// The working-copy root for this invocation.
    ///
    /// The root is taken as given; parent directories are never searched.
    pub fn root(&self) -> std::io::Result<PathBuf> {
        match &self.cwd {
            Some(cwd) => Ok(cwd.clone()),
            None => std::env::current_dir(),
        }
    }
}
