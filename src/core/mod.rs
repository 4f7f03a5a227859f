//! core
//!
//! Repository reference types, parsing, and validation.
//!
//! # Modules
//!
//! - [`locator`] - Local path or hosted `(host, owner, name)` triple
//! - [`parse`] - Legacy and strict input grammars
//! - [`validate`] - GitHub naming rules
//! - [`reference`] - The `RepositoryReference` value type
//! - [`errors`] - Error types shared by the above
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Parsing is pure; the grammar is an explicit parameter
//! - A reference either parses completely or not at all
//! - No network I/O

pub mod config;
pub mod errors;
pub mod locator;
pub mod parse;
pub mod reference;
pub mod validate;
