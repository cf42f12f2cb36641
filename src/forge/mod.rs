//! forge
//!
//! Knowledge of the remote hosting service.
//!
//! Only GitHub is supported. This module turns a remote URL read from
//! `.git/config` into a web URL and composes file URLs on top of it. It
//! performs no I/O.
//!
//! # Modules
//!
//! - [`github`]: remote normalization and blob URL composition

pub mod github;

pub use github::{build_file_url, normalize_remote_url, parse_github_url};
