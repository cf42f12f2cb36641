//! git::working_copy
//!
//! File-system doorway for the resolver.
//!
//! The resolver never touches `std::fs` directly. It asks a [`WorkingCopy`]
//! whether a root-relative path exists and for the text of a file. Each call
//! goes to storage; nothing is cached, so results always reflect the
//! current on-disk state.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

/// Read-only access to files under a working-copy root.
///
/// Paths are relative to the root. Implementations must not cache.
pub trait WorkingCopy {
    /// Check whether a file or directory exists at `relative`.
    fn exists(&self, relative: &Path) -> io::Result<bool>;

    /// Read a file as UTF-8 text.
    fn read(&self, relative: &Path) -> io::Result<String>;

    /// Root directory the relative paths are resolved against.
    fn root(&self) -> &Path;
}

/// A working copy backed by the local disk.
#[derive(Debug, Clone)]
pub struct DiskWorkingCopy {
    root: PathBuf,
}

impl DiskWorkingCopy {
    /// Create a working copy rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl WorkingCopy for DiskWorkingCopy {
    fn exists(&self, relative: &Path) -> io::Result<bool> {
        self.root.join(relative).try_exists()
    }

    fn read(&self, relative: &Path) -> io::Result<String> {
        std::fs::read_to_string(self.root.join(relative))
    }

    fn root(&self) -> &Path {
        &self.root
    }
}

/// An in-memory working copy for tests and embedding.
///
/// A path exists if it is a stored file or a parent directory of one.
///
/// # Example
///
/// ```
/// use open_in_github::git::{InMemoryWorkingCopy, WorkingCopy};
/// use std::path::Path;
///
/// let wc = InMemoryWorkingCopy::new()
///     .with_file(".git/HEAD", "ref: refs/heads/main\n");
///
/// assert!(wc.exists(Path::new(".git")).unwrap());
/// assert!(!wc.exists(Path::new(".git/config")).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryWorkingCopy {
    root: PathBuf,
    files: BTreeMap<PathBuf, String>,
    dirs: Vec<PathBuf>,
}

impl InMemoryWorkingCopy {
    /// Create an empty working copy.
    pub fn new() -> Self {
        Self {
            root: PathBuf::from("/"),
            files: BTreeMap::new(),
            dirs: Vec::new(),
        }
    }

    /// Add a file with the given contents.
    pub fn with_file(mut self, relative: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.files.insert(relative.into(), contents.into());
        self
    }

    /// Add an empty directory.
    pub fn with_dir(mut self, relative: impl Into<PathBuf>) -> Self {
        self.dirs.push(relative.into());
        self
    }
}

impl Default for InMemoryWorkingCopy {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkingCopy for InMemoryWorkingCopy {
    fn exists(&self, relative: &Path) -> io::Result<bool> {
        let is_dir = |candidate: &PathBuf| candidate.starts_with(relative);
        Ok(self.files.keys().any(is_dir) || self.dirs.iter().any(is_dir))
    }

    fn read(&self, relative: &Path) -> io::Result<String> {
        self.files.get(relative).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", relative.display()),
            )
        })
    }

    fn root(&self) -> &Path {
        &self.root
    }
}
