//! core::paths
//!
//! Centralized path routing for the Git metadata files the resolver reads.
//!
//! # Architecture
//!
//! Every location is expressed relative to the working-copy root so that it
//! can be handed to a [`crate::git::WorkingCopy`] unchanged. No other module
//! should spell out `.git/...` literals.
//!
//! # Layout
//!
//! - `.git/` - Git directory (must be a directory or file that exists)
//! - `.git/config` - INI-like config holding `[remote "origin"]`
//! - `.git/HEAD` - current ref (`ref: refs/heads/<name>` or a raw hash)
//!
//! # Example
//!
//! ```
//! use open_in_github::core::paths::GitPaths;
//! use std::path::PathBuf;
//!
//! let paths = GitPaths::standard();
//! assert_eq!(paths.config_path(), PathBuf::from(".git/config"));
//! ```

use std::path::{Path, PathBuf};

/// Name of the Git directory inside a working copy.
pub const GIT_DIR_NAME: &str = ".git";

/// Root-relative locations of the Git metadata files.
///
/// # Invariants
///
/// - All returned paths are relative; joining them onto a root is the job
///   of the working-copy implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitPaths {
    /// Path to the Git directory relative to the working-copy root.
    pub git_dir: PathBuf,
}

impl GitPaths {
    /// Paths for a standard, non-bare working copy (`.git` at the root).
    pub fn standard() -> Self {
        Self {
            git_dir: PathBuf::from(GIT_DIR_NAME),
        }
    }

    /// Get the git_dir as a Path reference.
    pub fn git_dir(&self) -> &Path {
        &self.git_dir
    }

    /// Get the path to the repository config file.
    ///
    /// This is `<git_dir>/config`.
    pub fn config_path(&self) -> PathBuf {
        self.git_dir.join("config")
    }

    /// Get the path to the HEAD file.
    ///
    /// This is `<git_dir>/HEAD`.
    pub fn head_path(&self) -> PathBuf {
        self.git_dir.join("HEAD")
    }
}

impl Default for GitPaths {
    fn default() -> Self {
        Self::standard()
    }
}
