//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Verbosity-aware printing and reference formatting
//!
//! # Design
//!
//! All CLI output goes through this module so quiet and debug modes are
//! honored consistently.

pub mod output;
