//! repo-ref - Parse, validate and compare repository references
//!
//! Turns loosely-specified user input (`owner/repo`, `host/owner/repo`,
//! full URLs, `file://` paths) into a strongly-typed
//! [`RepositoryReference`](core::reference::RepositoryReference) that the
//! rest of an analysis pipeline can rely on.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to core)
//! - [`core`] - Reference types, grammars, validation and configuration
//! - [`ui`] - Output helpers
//!
//! # Example
//!
//! ```
//! use repo_ref::core::parse::ParseMode;
//! use repo_ref::core::reference::RepositoryReference;
//!
//! let reference = RepositoryReference::from_url("ossf/scorecard", ParseMode::Legacy).unwrap();
//! reference.validate_github().unwrap();
//! assert_eq!(reference.canonical_url().as_deref(), Some("github.com/ossf/scorecard"));
//! ```

pub mod cli;
pub mod core;
pub mod ui;
