//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag.
//! When `--json` is enabled, output is machine-readable JSON.

use std::fmt::Display;

use crate::core::reference::RepositoryReference;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    #[default]
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

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Format a reference as `field: value` lines.
///
/// Only the fields that apply to the reference's kind are shown.
pub fn format_reference(reference: &RepositoryReference) -> String {
    let mut lines = vec![format!("kind: {}", reference.kind())];

    if let Some(repo) = reference.hosted() {
        lines.push(format!("host: {}", repo.host));
        lines.push(format!("owner: {}", repo.owner));
        lines.push(format!("name: {}", repo.name));
        lines.push(format!("url: {}", repo.canonical_url()));
    }
    if let Some(path) = reference.path() {
        lines.push(format!("path: {}", path));
    }
    lines.push(format!("key: {}", reference.display_key()));
    if !reference.metadata().is_empty() {
        lines.push(format!("metadata: {}", reference.metadata().join(", ")));
    }

    lines.join("\n")
}
