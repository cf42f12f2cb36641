//! core
//!
//! Core domain types, paths, and configuration.
//!
//! # Modules
//!
//! - [`types`] - Strong types: BranchName, RepoUrl
//! - [`paths`] - Centralized routing for `.git` metadata locations
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Schemas are strict and self-describing

pub mod config;
pub mod paths;
pub mod types;
