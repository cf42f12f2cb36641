//! open-in-github - Open the GitHub page of a local working copy
//!
//! Derives a GitHub web URL from a working copy's `.git/config` and
//! `.git/HEAD` and opens it in a browser, optionally pointing at a file on
//! the current branch.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to engine)
//! - [`engine`] - Open workflow: target resolution, branch fallback, one open per success
//! - [`core`] - Domain types, metadata paths, and configuration
//! - [`git`] - Read-only access to `.git/config` and `.git/HEAD`
//! - [`forge`] - GitHub remote normalization and URL composition
//! - [`ui`] - Notices and the URL-open primitive
//!
//! # Guarantees
//!
//! 1. Metadata is reread from disk on every call; nothing is cached
//! 2. Only GitHub HTTPS and SSH remotes produce a URL; nothing is guessed
//! 3. A failed action opens nothing and reports exactly one notice

pub mod cli;
pub mod core;
pub mod engine;
pub mod forge;
pub mod git;
pub mod ui;
