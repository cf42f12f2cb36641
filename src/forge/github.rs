//! forge::github
//!
//! GitHub remote URL normalization and web URL composition.
//!
//! # Recognized remotes
//!
//! - `https://github.com/<owner>/<repo>[.git]`
//! - `http://github.com/<owner>/<repo>[.git]`
//! - `git@github.com:<owner>/<repo>[.git]`
//!
//! `<owner>` and `<repo>` are one or more characters other than `/`. All
//! three forms normalize to the same [`RepoUrl`]. Anything else, including
//! other hosts, is rejected rather than guessed at.
//!
//! # Example
//!
//! ```
//! use open_in_github::forge::github::{build_file_url, normalize_remote_url};
//!
//! let https = normalize_remote_url("https://github.com/octocat/hello.git").unwrap();
//! let ssh = normalize_remote_url("git@github.com:octocat/hello.git").unwrap();
//! assert_eq!(https, ssh);
//!
//! let url = build_file_url(&https.to_string(), "main", "src/lib.rs");
//! assert_eq!(url, "https://github.com/octocat/hello/blob/main/src/lib.rs");
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::types::RepoUrl;

/// HTTP(S) remote form.
static HTTPS_REMOTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://github\.com/([^/]+)/([^/]+?)(?:\.git)?$")
        .expect("https remote pattern is valid")
});

/// SCP-like SSH remote form.
static SSH_REMOTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^git@github\.com:([^/]+)/([^/]+?)(?:\.git)?$")
        .expect("ssh remote pattern is valid")
});

/// Parse a GitHub remote URL into owner and repo.
///
/// Returns `None` for non-GitHub hosts and malformed values.
pub fn parse_github_url(url: &str) -> Option<(String, String)> {
    [&*HTTPS_REMOTE, &*SSH_REMOTE].iter().find_map(|pattern| {
        let caps = pattern.captures(url)?;
        Some((caps[1].to_string(), caps[2].to_string()))
    })
}

/// Normalize a remote URL into the canonical repository URL.
///
/// Leading and trailing whitespace is ignored. Returns `None` if the value
/// is not a recognized GitHub remote.
pub fn normalize_remote_url(remote_url: &str) -> Option<RepoUrl> {
    let (owner, repo) = parse_github_url(remote_url.trim())?;
    RepoUrl::new(owner, repo).ok()
}

/// Compose the blob URL for a file on a branch.
///
/// The path is inserted as given: forward-slash separated, relative to the
/// working-copy root, with no percent-encoding.
pub fn build_file_url(repo_url: &str, branch: &str, file_path: &str) -> String {
    format!("{}/blob/{}/{}", repo_url, branch, file_path)
}
