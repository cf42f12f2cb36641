//! git
//!
//! Read-only access to a working copy's Git metadata.
//!
//! This module is the single doorway to `.git/config` and `.git/HEAD`. It
//! never shells out to a Git client and never writes. Two files are parsed:
//! the origin remote from `config` and the checked-out branch from `HEAD`.
//!
//! # Modules
//!
//! - [`working_copy`]: the [`WorkingCopy`] trait with disk and in-memory implementations
//! - [`resolver`]: [`Resolver`] and the [`ResolveError`] taxonomy

pub mod resolver;
pub mod working_copy;

pub use resolver::{
    parse_head_branch, parse_origin_url, ResolveError, Resolver, GENERIC_FAILURE_NOTICE,
};
pub use working_copy::{DiskWorkingCopy, InMemoryWorkingCopy, WorkingCopy};
