//! cli
//!
//! Command-line interface layer for repo-ref.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Resolve the parse mode from flags, environment and config
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It builds a [`Context`] once and hands it to
//! [`commands::dispatch`]. All parsing and validation lives in
//! [`crate::core`].

pub mod args;
pub mod commands;

pub use args::{Cli, Command, Shell};

use anyhow::{Context as _, Result};

use crate::core::config::Config;
use crate::core::parse::ParseMode;
use crate::ui::output::{self, Verbosity};

/// Settings shared by every command.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Grammar used for every input string
    pub mode: ParseMode,
    pub verbosity: Verbosity,
    pub config: Config,
}

impl Context {
    /// Build a context from parsed flags and loaded config.
    ///
    /// `--strict` wins; otherwise the config decides (env toggle, then file).
    pub fn new(cli: &Cli, config: Config) -> Self {
        let mode = if cli.strict {
            ParseMode::Strict
        } else {
            config.parse_mode()
        };

        Self {
            mode,
            verbosity: Verbosity::from_flags(cli.quiet, cli.debug),
            config,
        }
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    let ctx = Context::new(&cli, config);

    match ctx.config.loaded_from() {
        Some(path) => output::debug(format!("config: {}", path.display()), ctx.verbosity),
        None => output::debug("config: defaults", ctx.verbosity),
    }
    output::debug(format!("parse mode: {}", ctx.mode), ctx.verbosity);

    commands::dispatch(cli.command, &ctx)
}
