//! Property-based tests for remote normalization and metadata parsing.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated owners, repositories, and branch names.

use proptest::prelude::*;

use open_in_github::forge::{build_file_url, normalize_remote_url};
use open_in_github::git::{InMemoryWorkingCopy, ResolveError, Resolver};

/// Strategy for owner and repository segments.
///
/// Dots are allowed inside the name, but a trailing `.git` would be read
/// as the suffix, so those are filtered out.
fn segment() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_-][A-Za-z0-9_.-]{0,24}".prop_filter("must not end with .git", |s| {
        !s.ends_with(".git")
    })
}

/// Strategy for branch names that Git would accept.
fn branch_name() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9][a-z0-9_-]{0,10}", 1..4).prop_map(|parts| parts.join("/"))
}

fn origin_config(url: &str) -> String {
    format!(
        "[core]\n\tbare = false\n[remote \"origin\"]\n\turl = {}\n\tfetch = +refs/heads/*:refs/remotes/origin/*\n",
        url
    )
}

proptest! {
    #[test]
    fn https_and_ssh_normalize_identically(owner in segment(), repo in segment()) {
        let expected = format!("https://github.com/{}/{}", owner, repo);

        for remote in [
            format!("https://github.com/{}/{}", owner, repo),
            format!("https://github.com/{}/{}.git", owner, repo),
            format!("http://github.com/{}/{}.git", owner, repo),
            format!("git@github.com:{}/{}", owner, repo),
            format!("git@github.com:{}/{}.git", owner, repo),
        ] {
            let url = normalize_remote_url(&remote);
            prop_assert_eq!(url.map(|u| u.to_string()), Some(expected.clone()));
        }
    }

    #[test]
    fn canonical_url_is_fixed_point(owner in segment(), repo in segment()) {
        let canonical = format!("https://github.com/{}/{}", owner, repo);
        let once = normalize_remote_url(&canonical).unwrap().to_string();
        prop_assert_eq!(&once, &canonical);
        let twice = normalize_remote_url(&once).unwrap().to_string();
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn other_hosts_never_recognized(
        host in "(gitlab\\.com|bitbucket\\.org|example\\.com|github\\.example\\.com)",
        owner in segment(),
        repo in segment(),
    ) {
        let https = format!("https://{}/{}/{}.git", host, owner, repo);
        let ssh = format!("git@{}:{}/{}.git", host, owner, repo);
        let https_rejected = normalize_remote_url(&https).is_none();
        let ssh_rejected = normalize_remote_url(&ssh).is_none();
        prop_assert!(https_rejected, "recognized {}", https);
        prop_assert!(ssh_rejected, "recognized {}", ssh);
    }

    #[test]
    fn resolver_returns_canonical_url(owner in segment(), repo in segment()) {
        let wc = InMemoryWorkingCopy::new()
            .with_file(".git/config", origin_config(&format!("git@github.com:{}/{}.git", owner, repo)));
        let url = Resolver::new(wc).repo_url().unwrap();
        prop_assert_eq!(url.to_string(), format!("https://github.com/{}/{}", owner, repo));
    }

    #[test]
    fn head_branch_preserved_verbatim(branch in branch_name()) {
        let wc = InMemoryWorkingCopy::new()
            .with_file(".git/HEAD", format!("ref: refs/heads/{}\n", branch));
        let resolved = Resolver::new(wc).current_branch().unwrap();
        prop_assert_eq!(resolved.as_str(), branch.as_str());
    }

    #[test]
    fn detached_head_is_unparsable(hash in "[0-9a-f]{40}") {
        let wc = InMemoryWorkingCopy::new().with_file(".git/HEAD", format!("{}\n", hash));
        let result = Resolver::new(wc).current_branch();
        let unparsable = matches!(result, Err(ResolveError::UnparsableHead { .. }));
        prop_assert!(unparsable, "unexpected result {:?}", result);
    }

    #[test]
    fn file_url_is_plain_concatenation(
        owner in segment(),
        repo in segment(),
        branch in branch_name(),
        path in "[a-z]{1,8}(/[a-z]{1,8}){0,3}\\.[a-z]{1,3}",
    ) {
        let repo_url = format!("https://github.com/{}/{}", owner, repo);
        let url = build_file_url(&repo_url, &branch, &path);
        prop_assert_eq!(url, format!("{}/blob/{}/{}", repo_url, branch, path));
    }
}
