//! core::errors
//!
//! Error types for parsing and validating repository references.
//!
//! # Design
//!
//! Every error embeds the offending value, so callers can surface the
//! message verbatim without adding their own context.
//!
//! # Example
//!
//! ```
//! use repo_ref::core::errors::{FormatReason, RepoRefError};
//!
//! let err = RepoRefError::InvalidFormat {
//!     input: "onlyoneword".to_string(),
//!     reason: FormatReason::AmbiguousSplit,
//! };
//! assert!(err.to_string().contains("onlyoneword"));
//! ```

use std::fmt;

use thiserror::Error;

use super::locator::RepoKind;

/// Errors from repository reference operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepoRefError {
    /// The input could not be resolved to a repository identity.
    #[error("invalid repository reference '{input}': {reason}")]
    InvalidFormat {
        /// The string that failed to parse
        input: String,
        /// Why it failed
        reason: FormatReason,
    },

    /// The host is not one we know how to validate.
    #[error("unsupported host: {0}")]
    UnsupportedHost(String),

    /// The owner does not satisfy GitHub username rules.
    #[error("invalid GitHub username: {0}")]
    InvalidOwner(String),

    /// Owner or repository name is blank.
    #[error("invalid GitHub repository URL: {0}. Expected the full repository url")]
    InvalidIdentity(String),

    /// The operation does not apply to this kind of reference.
    #[error("invalid repository type: expected {expected}, found {found}")]
    InvalidRepoType {
        /// Kind the operation requires
        expected: RepoKind,
        /// Kind of the reference it was applied to
        found: RepoKind,
    },
}

impl RepoRefError {
    pub(crate) fn format(input: &str, reason: FormatReason) -> Self {
        RepoRefError::InvalidFormat {
            input: input.to_string(),
            reason,
        }
    }
}

/// Why an input string was rejected as structurally malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatReason {
    /// Fewer than two `/`-separated segments.
    AmbiguousSplit,
    /// The URL parser rejected the string.
    UrlParse(String),
    /// The URL path is not `owner/repo`.
    SegmentCount,
    /// No `scheme://` prefix where one is required.
    MissingScheme,
    /// A scheme other than `https` or `file`.
    UnsupportedScheme(String),
}

impl fmt::Display for FormatReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatReason::AmbiguousSplit => write!(f, "expected owner/repo or host/owner/repo"),
            FormatReason::UrlParse(msg) => write!(f, "url parse failed: {}", msg),
            FormatReason::SegmentCount => write!(f, "expected full repository url"),
            FormatReason::MissingScheme => {
                write!(f, "expected an https:// or file:// prefix")
            }
            FormatReason::UnsupportedScheme(scheme) => {
                write!(f, "unsupported scheme '{}', expected https or file", scheme)
            }
        }
    }
}
