//! git::resolver
//!
//! Repository URL and branch resolution from `.git/config` and `.git/HEAD`.
//!
//! # Design
//!
//! Both files are read fresh on every call through a [`WorkingCopy`], so the
//! result always reflects the current on-disk state. Parsing is pattern
//! matching over text; no INI parser is involved because only two narrow
//! shapes are needed:
//!
//! - the `url` key inside the `[remote "origin"]` block, where the block ends
//!   at the next `[` section marker
//! - a `ref: refs/heads/<name>` line in HEAD
//!
//! # Error Handling
//!
//! Every failure is a [`ResolveError`] variant. I/O failures keep their
//! source for diagnostics; [`ResolveError::notice`] gives the single line a
//! user should see.
//!
//! # Example
//!
//! ```
//! use open_in_github::git::{InMemoryWorkingCopy, Resolver};
//!
//! let wc = InMemoryWorkingCopy::new()
//!     .with_file(".git/config", "[remote \"origin\"]\n\turl = git@github.com:o/r.git\n")
//!     .with_file(".git/HEAD", "ref: refs/heads/feature/login\n");
//! let resolver = Resolver::new(wc);
//!
//! assert_eq!(resolver.repo_url().unwrap().to_string(), "https://github.com/o/r");
//! assert_eq!(resolver.current_branch().unwrap().as_str(), "feature/login");
//! ```

use std::io;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::working_copy::{DiskWorkingCopy, WorkingCopy};
use crate::core::paths::GitPaths;
use crate::core::types::{BranchName, RepoUrl};
use crate::forge::github::normalize_remote_url;

/// Message shown for failures whose detail only belongs in diagnostics.
pub const GENERIC_FAILURE_NOTICE: &str = "Failed to open GitHub repository.";

/// `url = ...` inside the origin block. `[^\[]` keeps the match from
/// running past the next section header.
static ORIGIN_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)\[remote "origin"\][^\[]*?^[ \t]*url[ \t]*=[ \t]*(.*)$"#)
        .expect("origin url pattern is valid")
});

/// Symbolic HEAD pointing at a local branch.
static HEAD_BRANCH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ref: refs/heads/(.+)").expect("head pattern is valid"));

/// Errors from resolving repository metadata.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No `.git` at the working-copy root.
    #[error("No .git directory found in {root}.")]
    NoGitDirectory {
        /// The working-copy root that was checked
        root: PathBuf,
    },

    /// `.git/config` is missing.
    #[error("No .git/config file found.")]
    NoConfigFile,

    /// The config has no `url` under `[remote "origin"]`.
    #[error("No remote \"origin\" found in .git/config.")]
    NoOriginRemote,

    /// The origin URL is not an HTTPS or SSH GitHub URL.
    #[error("Could not determine GitHub repository URL from remote '{url}'.")]
    UnrecognizedRemoteFormat {
        /// The trimmed remote value
        url: String,
    },

    /// `.git/HEAD` is missing.
    #[error("No .git/HEAD file found.")]
    NoHeadFile,

    /// HEAD does not name a local branch (for example a detached HEAD).
    #[error("HEAD does not point at a branch: '{content}'.")]
    UnparsableHead {
        /// The trimmed HEAD contents
        content: String,
    },

    /// A file-scoped action had no usable file.
    #[error("Not found file relative path: {reason}.")]
    NoActiveFile {
        /// Why the file could not be used
        reason: String,
    },

    /// An `exists` or `read` call failed.
    #[error("failed to access {path}: {source}")]
    Io {
        /// Root-relative path being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },
}

impl ResolveError {
    /// The single line shown to the user for this failure.
    ///
    /// I/O failures collapse to a generic message; their detail is only
    /// written to the diagnostic log.
    pub fn notice(&self) -> String {
        match self {
            ResolveError::Io { .. } => GENERIC_FAILURE_NOTICE.to_string(),
            other => other.to_string(),
        }
    }
}

/// Resolves repository URL and branch for one working copy.
///
/// Holds no parsed state between calls.
#[derive(Debug, Clone)]
pub struct Resolver<W: WorkingCopy> {
    working_copy: W,
    paths: GitPaths,
}

impl Resolver<DiskWorkingCopy> {
    /// Resolver for a working copy on disk.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self::new(DiskWorkingCopy::new(root))
    }
}

impl<W: WorkingCopy> Resolver<W> {
    /// Create a resolver over any working copy.
    pub fn new(working_copy: W) -> Self {
        Self {
            working_copy,
            paths: GitPaths::standard(),
        }
    }

    /// The working copy this resolver reads from.
    pub fn working_copy(&self) -> &W {
        &self.working_copy
    }

    /// Raw `url` value of the origin remote, trimmed.
    ///
    /// # Errors
    ///
    /// `NoGitDirectory`, `NoConfigFile`, `NoOriginRemote`, or `Io`.
    pub fn origin_url(&self) -> Result<String, ResolveError> {
        self.require_git_dir()?;

        let config_path = self.paths.config_path();
        if !self.exists(&config_path)? {
            return Err(ResolveError::NoConfigFile);
        }

        let contents = self.read(&config_path)?;
        let url = parse_origin_url(&contents).ok_or(ResolveError::NoOriginRemote)?;
        tracing::debug!(remote = %url, "found origin remote");
        Ok(url)
    }

    /// Canonical `https://github.com/<owner>/<repo>` for the origin remote.
    ///
    /// # Errors
    ///
    /// Any error from [`Resolver::origin_url`], or `UnrecognizedRemoteFormat`
    /// if the remote is not a GitHub URL.
    pub fn repo_url(&self) -> Result<RepoUrl, ResolveError> {
        let url = self.origin_url()?;
        normalize_remote_url(&url).ok_or(ResolveError::UnrecognizedRemoteFormat { url })
    }

    /// Branch checked out in the working copy.
    ///
    /// # Errors
    ///
    /// `NoGitDirectory`, `NoHeadFile`, `UnparsableHead`, or `Io`. Callers
    /// treat all of these as "use the default branch".
    pub fn current_branch(&self) -> Result<BranchName, ResolveError> {
        self.require_git_dir()?;

        let head_path = self.paths.head_path();
        if !self.exists(&head_path)? {
            return Err(ResolveError::NoHeadFile);
        }

        let contents = self.read(&head_path)?;
        let head = contents.trim();
        let branch = parse_head_branch(head)
            .and_then(|name| BranchName::new(name).ok())
            .ok_or_else(|| ResolveError::UnparsableHead {
                content: head.to_string(),
            })?;
        tracing::debug!(branch = %branch, "resolved current branch");
        Ok(branch)
    }

    fn require_git_dir(&self) -> Result<(), ResolveError> {
        if self.exists(self.paths.git_dir())? {
            Ok(())
        } else {
            Err(ResolveError::NoGitDirectory {
                root: self.working_copy.root().to_path_buf(),
            })
        }
    }

    fn exists(&self, path: &Path) -> Result<bool, ResolveError> {
        self.working_copy
            .exists(path)
            .map_err(|source| ResolveError::Io {
                path: path.to_path_buf(),
                source,
            })
    }

    fn read(&self, path: &Path) -> Result<String, ResolveError> {
        self.working_copy
            .read(path)
            .map_err(|source| ResolveError::Io {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// Extract the origin `url` value from `.git/config` text.
///
/// Returns the trimmed value, or `None` if the origin block is absent or has
/// no `url` key before the next section.
pub fn parse_origin_url(config: &str) -> Option<String> {
    let caps = ORIGIN_URL.captures(config)?;
    let url = caps[1].trim();
    (!url.is_empty()).then(|| url.to_string())
}

/// Extract the branch name from trimmed `.git/HEAD` text.
pub fn parse_head_branch(head: &str) -> Option<&str> {
    HEAD_BRANCH
        .captures(head)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim_end())
}
