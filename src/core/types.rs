//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`BranchName`] - Validated Git branch name
//! - [`RepoUrl`] - Canonical GitHub repository identity
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, so a `RepoUrl` always renders as
//! `https://github.com/<owner>/<repo>`.
//!
//! # Examples
//!
//! ```
//! use open_in_github::core::types::{BranchName, RepoUrl};
//!
//! let branch = BranchName::new("feature/my-branch").unwrap();
//! let repo = RepoUrl::new("octocat", "hello-world").unwrap();
//! assert_eq!(repo.to_string(), "https://github.com/octocat/hello-world");
//!
//! assert!(BranchName::new("invalid..name").is_err());
//! assert!(RepoUrl::new("octo/cat", "hello").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Host every canonical repository URL points at.
pub const GITHUB_WEB_BASE: &str = "https://github.com";

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("invalid repository path: {0}")]
    InvalidRepoPath(String),
}

/// A validated Git branch name.
///
/// Branch names must conform to Git's refname rules (see `git check-ref-format`):
/// - Cannot be empty
/// - Cannot start with `.` or `-`
/// - Cannot end with `.lock` or `/`
/// - Cannot contain `..`, `@{`, `//`, or ASCII control characters
/// - Cannot contain spaces, `~`, `^`, `:`, `\`, `?`, `*`, `[`
/// - Cannot be exactly `@`
///
/// Names may contain `/` (`feature/login`); they are kept verbatim.
///
/// # Example
///
/// ```
/// use open_in_github::core::types::BranchName;
///
/// let name = BranchName::new("feature/login").unwrap();
/// assert_eq!(name.as_str(), "feature/login");
///
/// assert!(BranchName::new("").is_err());
/// assert!(BranchName::new("has space").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BranchName(String);

impl BranchName {
    /// Create a new validated branch name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidBranchName` if the name violates Git's refname rules.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    fn validate(name: &str) -> Result<(), TypeError> {
        let reject = |reason: &str| Err(TypeError::InvalidBranchName(reason.to_string()));

        if name.is_empty() {
            return reject("branch name cannot be empty");
        }
        if name == "@" {
            return reject("branch name cannot be '@' (reserved)");
        }
        if name.starts_with('.') || name.starts_with('-') {
            return reject("branch name cannot start with '.' or '-'");
        }
        if name.ends_with(".lock") || name.ends_with('/') {
            return reject("branch name cannot end with '.lock' or '/'");
        }
        for sequence in ["..", "@{", "//"] {
            if name.contains(sequence) {
                return Err(TypeError::InvalidBranchName(format!(
                    "branch name cannot contain '{sequence}'"
                )));
            }
        }

        const INVALID_CHARS: [char; 8] = [' ', '~', '^', ':', '\\', '?', '*', '['];
        if let Some(c) = name.chars().find(|c| INVALID_CHARS.contains(c)) {
            return Err(TypeError::InvalidBranchName(format!(
                "branch name cannot contain '{c}'"
            )));
        }
        if name.chars().any(|c| c.is_ascii_control()) {
            return reject("branch name cannot contain control characters");
        }

        for component in name.split('/') {
            if component.starts_with('.') {
                return reject("path component cannot start with '.'");
            }
            if component.ends_with(".lock") {
                return reject("path component cannot end with '.lock'");
            }
        }

        Ok(())
    }

    /// Get the branch name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BranchName {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<BranchName> for String {
    fn from(name: BranchName) -> Self {
        name.0
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A GitHub repository identified by owner and name.
///
/// Displays as the canonical web URL, without a `.git` suffix or a
/// trailing slash. Both segments are non-empty and never contain `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoUrl {
    owner: String,
    repo: String,
}

impl RepoUrl {
    /// Create a repository identity from its owner and name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidRepoPath` if either segment is empty or
    /// contains `/`.
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Result<Self, TypeError> {
        let owner = owner.into();
        let repo = repo.into();
        for segment in [&owner, &repo] {
            if segment.is_empty() || segment.contains('/') {
                return Err(TypeError::InvalidRepoPath(format!("{owner}/{repo}")));
            }
        }
        Ok(Self { owner, repo })
    }

    /// Repository owner (user or organization).
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name.
    pub fn repo(&self) -> &str {
        &self.repo
    }
}

impl std::fmt::Display for RepoUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", GITHUB_WEB_BASE, self.owner, self.repo)
    }
}
