//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! User-facing notices are single lines on stderr; results (URLs, info)
//! go to stdout. Notices are not log events: diagnostics go through
//! `tracing` and are only visible with `--debug` or `OIG_LOG`.

use std::fmt::Display;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print an error notice (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning notice (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Format `key = value` for list-style output.
pub fn format_entry(key: &str, value: Option<impl Display>) -> String {
    match value {
        Some(value) => format!("{} = {}", key, value),
        None => format!("{} = (not set)", key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_debug() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    }

    #[test]
    fn format_entry_with_value() {
        assert_eq!(
            format_entry("default_branch", Some("main")),
            "default_branch = main"
        );
    }

    #[test]
    fn format_entry_without_value() {
        assert_eq!(
            format_entry("browser", None::<&str>),
            "browser = (not set)"
        );
    }
}
