//! info command - Show what the resolver sees for the working copy

use anyhow::{anyhow, Context as _, Result};

use crate::core::config::Config;
use crate::engine::open::{branch_or_default, fallback_notice, BranchSource};
use crate::engine::Context;
use crate::forge::github::normalize_remote_url;
use crate::git::{ResolveError, Resolver};

/// Print the origin remote, canonical repository URL, its owner and name,
/// and the branch.
pub fn info(ctx: &Context) -> Result<()> {
    let config = Config::load().context("Failed to load config")?;
    let root = ctx
        .root()
        .context("Failed to determine the working-copy root")?;
    let resolver = Resolver::at(&root);

    let remote = resolver.origin_url().map_err(|e| anyhow!(e.notice()))?;
    let repo_url = normalize_remote_url(&remote).ok_or_else(|| {
        anyhow!(ResolveError::UnrecognizedRemoteFormat {
            url: remote.clone()
        }
        .notice())
    })?;
    let (branch, reason) = branch_or_default(&resolver, config.default_branch());

    println!("root = {}", root.display());
    println!("remote = {}", remote);
    println!("repository = {}", repo_url);
    println!("owner = {}", repo_url.owner());
    println!("repo = {}", repo_url.repo());
    match (&branch, reason) {
        (BranchSource::Head(name), _) => println!("branch = {}", name),
        (BranchSource::Fallback(name), Some(reason)) => {
            println!("branch = {} (default: {})", name, fallback_notice(&reason))
        }
        (BranchSource::Fallback(name), None) => println!("branch = {} (default)", name),
    }

    Ok(())
}
