//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Notices and result formatting
//! - [`browser`] - The URL-open primitive
//!
//! # Design
//!
//! All user-visible output goes through this module so that every failure
//! produces exactly one notice and quiet mode is honored consistently.

pub mod browser;
pub mod output;

pub use browser::{BrowserError, PrintOpener, RecordingOpener, SystemBrowser, UrlOpener};
