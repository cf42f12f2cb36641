//! engine::open
//!
//! The "open in GitHub" workflow.
//!
//! # Lifecycle
//!
//! ```text
//! Target -> resolve repo URL -> [resolve branch, fall back] -> compose URL -> open once
//! ```
//!
//! # Invariants
//!
//! - A failure opens nothing; the caller shows exactly one notice for it.
//! - A success calls [`UrlOpener::open`] exactly once.
//! - Branch resolution never fails the action. Its failure is collected as
//!   a warning and the default branch is used instead. A missing `.git`
//!   at that point is only logged, since the repository URL step already
//!   reports that case.

use std::path::{Component, Path, PathBuf};

use thiserror::Error;

use crate::core::types::BranchName;
use crate::forge::github::build_file_url;
use crate::git::{ResolveError, Resolver, WorkingCopy};
use crate::ui::browser::{BrowserError, UrlOpener};

/// What to open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// The repository home page.
    Repository,
    /// A file page; forward-slash path relative to the working-copy root.
    File(String),
}

/// Where the branch in a file URL came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchSource {
    /// Read from `.git/HEAD`.
    Head(BranchName),
    /// HEAD was unusable; the configured default was used.
    Fallback(String),
}

impl BranchSource {
    /// The branch name to put in URLs.
    pub fn name(&self) -> &str {
        match self {
            BranchSource::Head(branch) => branch.as_str(),
            BranchSource::Fallback(name) => name,
        }
    }
}

/// A resolved URL ready to be opened.
#[derive(Debug)]
pub struct OpenPlan {
    /// The URL to open.
    pub url: String,
    /// Branch used, for file targets.
    pub branch: Option<BranchSource>,
    /// Non-fatal problems hit along the way (branch fallbacks).
    pub warnings: Vec<ResolveError>,
}

/// Errors that abort the workflow.
#[derive(Debug, Error)]
pub enum OpenError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Browser(#[from] BrowserError),
}

impl OpenError {
    /// The single line shown to the user.
    pub fn notice(&self) -> String {
        match self {
            OpenError::Resolve(err) => err.notice(),
            OpenError::Browser(err) => err.to_string(),
        }
    }
}

/// Resolve the branch, falling back to `default_branch` on any failure.
///
/// Returns the branch used and the failure that caused a fallback, if any
/// should be shown to the user.
pub fn branch_or_default<W: WorkingCopy>(
    resolver: &Resolver<W>,
    default_branch: &str,
) -> (BranchSource, Option<ResolveError>) {
    match resolver.current_branch() {
        Ok(branch) => (BranchSource::Head(branch), None),
        Err(err) => {
            let fallback = BranchSource::Fallback(default_branch.to_string());
            if let ResolveError::Io { path, source } = &err {
                tracing::error!(path = %path.display(), error = %source, "failed to read HEAD");
            }
            match err {
                ResolveError::NoGitDirectory { .. } => {
                    tracing::debug!(error = %err, "no git directory while resolving branch");
                    (fallback, None)
                }
                other => {
                    tracing::debug!(error = %other, default_branch, "falling back to default branch");
                    (fallback, Some(other))
                }
            }
        }
    }
}

/// Notice for a branch failure that caused a fallback.
///
/// An unreadable HEAD does not fail the action, so it gets its own message
/// instead of the generic failure notice.
pub fn fallback_notice(warning: &ResolveError) -> String {
    match warning {
        ResolveError::Io { .. } => HEAD_UNREADABLE_NOTICE.to_string(),
        other => other.notice(),
    }
}

/// Shown when `.git/HEAD` exists but could not be read.
pub const HEAD_UNREADABLE_NOTICE: &str = "Could not read .git/HEAD.";

/// Resolve the URL for a target without opening it.
///
/// # Errors
///
/// Any repository URL failure. Branch failures become warnings.
pub fn resolve_target_url<W: WorkingCopy>(
    resolver: &Resolver<W>,
    target: &Target,
    default_branch: &str,
) -> Result<OpenPlan, ResolveError> {
    let repo_url = resolver.repo_url()?.to_string();

    match target {
        Target::Repository => Ok(OpenPlan {
            url: repo_url,
            branch: None,
            warnings: Vec::new(),
        }),
        Target::File(path) => {
            let (branch, warning) = branch_or_default(resolver, default_branch);
            Ok(OpenPlan {
                url: build_file_url(&repo_url, branch.name(), path),
                branch: Some(branch),
                warnings: warning.into_iter().collect(),
            })
        }
    }
}

/// Resolve the URL for a target and hand it to `opener` once.
///
/// # Errors
///
/// Resolution failures (nothing is opened) or a launcher failure.
pub fn open<W: WorkingCopy>(
    resolver: &Resolver<W>,
    target: &Target,
    default_branch: &str,
    opener: &dyn UrlOpener,
) -> Result<OpenPlan, OpenError> {
    let plan = resolve_target_url(resolver, target, default_branch).map_err(|err| {
        if let ResolveError::Io { path, source } = &err {
            tracing::error!(path = %path.display(), error = %source, "failed to read git metadata");
        }
        err
    })?;
    tracing::info!(url = %plan.url, "opening");
    opener.open(&plan.url)?;
    Ok(plan)
}

/// Turn a user-supplied path into a forward-slash path relative to `root`.
///
/// Relative paths are taken relative to the root. Absolute paths must lie
/// under it.
///
/// # Errors
///
/// `NoActiveFile` if the path is outside the root, climbs with `..`, is not
/// valid UTF-8, or names the root itself.
pub fn relative_file_path(root: &Path, path: &Path) -> Result<String, ResolveError> {
    let no_file = |reason: &str| ResolveError::NoActiveFile {
        reason: format!("{} ({})", reason, path.display()),
    };

    let relative: PathBuf = if path.is_absolute() {
        strip_root(root, path).ok_or_else(|| no_file("path is outside the working copy"))?
    } else {
        path.to_path_buf()
    };

    let mut segments = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(segment) => {
                let segment = segment
                    .to_str()
                    .ok_or_else(|| no_file("path is not valid UTF-8"))?;
                segments.push(segment);
            }
            Component::CurDir => {}
            Component::ParentDir => return Err(no_file("path may not contain '..'")),
            Component::RootDir | Component::Prefix(_) => {
                return Err(no_file("path is outside the working copy"))
            }
        }
    }

    if segments.is_empty() {
        return Err(no_file("path names the working copy itself"));
    }
    Ok(segments.join("/"))
}

fn strip_root(root: &Path, path: &Path) -> Option<PathBuf> {
    if let Ok(stripped) = path.strip_prefix(root) {
        return Some(stripped.to_path_buf());
    }
    let root = root.canonicalize().ok()?;
    let path = path.canonicalize().ok()?;
    path.strip_prefix(&root).ok().map(Path::to_path_buf)
}
