//! Integration tests for the resolver and open workflow against real
//! directories on disk.
//!
//! Working copies are built by writing `.git/config` and `.git/HEAD`
//! directly, so no Git client is required.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use open_in_github::engine::open::{open, resolve_target_url, BranchSource, OpenError, Target};
use open_in_github::git::{ResolveError, Resolver};
use open_in_github::ui::RecordingOpener;

// =============================================================================
// Test Fixtures
// =============================================================================

/// Test fixture for a working copy with hand-written Git metadata.
struct TestVault {
    dir: TempDir,
}

impl TestVault {
    /// An empty directory with no `.git`.
    fn bare_dir() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// A working copy with an empty `.git` directory.
    fn new() -> Self {
        let vault = Self::bare_dir();
        fs::create_dir_all(vault.path().join(".git")).unwrap();
        vault
    }

    /// A working copy whose origin is `remote` and HEAD is on `branch`.
    fn with_origin(remote: &str, branch: &str) -> Self {
        let vault = Self::new();
        vault.write_config(&format!(
            "[core]\n\trepositoryformatversion = 0\n\tfilemode = true\n\
             [remote \"origin\"]\n\turl = {remote}\n\tfetch = +refs/heads/*:refs/remotes/origin/*\n\
             [branch \"{branch}\"]\n\tremote = origin\n\tmerge = refs/heads/{branch}\n"
        ));
        vault.write_head(&format!("ref: refs/heads/{branch}\n"));
        vault
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn write_config(&self, contents: &str) {
        fs::write(self.path().join(".git/config"), contents).unwrap();
    }

    fn write_head(&self, contents: &str) {
        fs::write(self.path().join(".git/HEAD"), contents).unwrap();
    }

    fn resolver(&self) -> Resolver<open_in_github::git::DiskWorkingCopy> {
        Resolver::at(self.path())
    }
}

// =============================================================================
// Repository URL
// =============================================================================

#[test]
fn https_remote_resolves() {
    let vault = TestVault::with_origin("https://github.com/octocat/notes.git", "main");
    let url = vault.resolver().repo_url().unwrap();
    assert_eq!(url.to_string(), "https://github.com/octocat/notes");
}

#[test]
fn ssh_remote_resolves_to_same_url() {
    let https = TestVault::with_origin("https://github.com/octocat/notes.git", "main");
    let ssh = TestVault::with_origin("git@github.com:octocat/notes.git", "main");
    assert_eq!(
        https.resolver().repo_url().unwrap(),
        ssh.resolver().repo_url().unwrap()
    );
}

#[test]
fn gitlab_remote_is_unrecognized() {
    let vault = TestVault::with_origin("https://gitlab.com/a/b.git", "main");
    assert!(matches!(
        vault.resolver().repo_url(),
        Err(ResolveError::UnrecognizedRemoteFormat { .. })
    ));
}

#[test]
fn missing_git_dir_fails_both_operations() {
    let vault = TestVault::bare_dir();
    let resolver = vault.resolver();
    assert!(matches!(
        resolver.repo_url(),
        Err(ResolveError::NoGitDirectory { .. })
    ));
    assert!(matches!(
        resolver.current_branch(),
        Err(ResolveError::NoGitDirectory { .. })
    ));
}

#[test]
fn missing_config_file() {
    let vault = TestVault::new();
    assert!(matches!(
        vault.resolver().repo_url(),
        Err(ResolveError::NoConfigFile)
    ));
}

#[test]
fn config_without_origin() {
    let vault = TestVault::new();
    vault.write_config("[remote \"upstream\"]\n\turl = https://github.com/up/stream.git\n");
    assert!(matches!(
        vault.resolver().repo_url(),
        Err(ResolveError::NoOriginRemote)
    ));
}

#[test]
fn resolution_reflects_disk_changes() {
    let vault = TestVault::with_origin("https://github.com/first/repo.git", "main");
    let resolver = vault.resolver();
    assert_eq!(
        resolver.repo_url().unwrap().to_string(),
        "https://github.com/first/repo"
    );

    vault.write_config("[remote \"origin\"]\n\turl = git@github.com:second/repo.git\n");
    assert_eq!(
        resolver.repo_url().unwrap().to_string(),
        "https://github.com/second/repo"
    );

    vault.write_head("ref: refs/heads/feature/login\n");
    assert_eq!(resolver.current_branch().unwrap().as_str(), "feature/login");
}

// =============================================================================
// Branch
// =============================================================================

#[test]
fn branch_from_head() {
    let vault = TestVault::with_origin("https://github.com/o/r.git", "feature/login");
    assert_eq!(
        vault.resolver().current_branch().unwrap().as_str(),
        "feature/login"
    );
}

#[test]
fn detached_head_is_unparsable() {
    let vault = TestVault::with_origin("https://github.com/o/r.git", "main");
    vault.write_head("4b825dc642cb6eb9a060e54bf8d69288fbee4904\n");
    assert!(matches!(
        vault.resolver().current_branch(),
        Err(ResolveError::UnparsableHead { .. })
    ));
}

#[test]
fn missing_head_file() {
    let vault = TestVault::new();
    assert!(matches!(
        vault.resolver().current_branch(),
        Err(ResolveError::NoHeadFile)
    ));
}

// =============================================================================
// Open workflow
// =============================================================================

#[test]
fn open_repository_opens_once() {
    let vault = TestVault::with_origin("git@github.com:o/r.git", "main");
    let opener = RecordingOpener::new();

    let plan = open(&vault.resolver(), &Target::Repository, "main", &opener).unwrap();

    assert_eq!(plan.url, "https://github.com/o/r");
    assert_eq!(opener.opened(), vec!["https://github.com/o/r"]);
}

#[test]
fn open_file_uses_current_branch() {
    let vault = TestVault::with_origin("https://github.com/o/r.git", "develop");
    let opener = RecordingOpener::new();

    open(
        &vault.resolver(),
        &Target::File("src/index.ts".to_string()),
        "main",
        &opener,
    )
    .unwrap();

    assert_eq!(
        opener.opened(),
        vec!["https://github.com/o/r/blob/develop/src/index.ts"]
    );
}

#[test]
fn open_file_on_detached_head_falls_back_to_main() {
    let vault = TestVault::with_origin("https://github.com/o/r.git", "main");
    vault.write_head("4b825dc642cb6eb9a060e54bf8d69288fbee4904\n");

    let plan = resolve_target_url(
        &vault.resolver(),
        &Target::File("README.md".to_string()),
        "main",
    )
    .unwrap();

    assert_eq!(plan.url, "https://github.com/o/r/blob/main/README.md");
    assert_eq!(plan.branch, Some(BranchSource::Fallback("main".to_string())));
    assert_eq!(plan.warnings.len(), 1);
}

#[test]
fn failed_resolution_opens_nothing() {
    let vault = TestVault::bare_dir();
    let opener = RecordingOpener::new();

    let err = open(&vault.resolver(), &Target::Repository, "main", &opener).unwrap_err();

    assert!(matches!(
        err,
        OpenError::Resolve(ResolveError::NoGitDirectory { .. })
    ));
    assert!(opener.opened().is_empty());
}
