//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--strict`: Require `https://` or `file://` inputs
//! - `--config <path>`: Use this config file instead of searching
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// repo-ref - Parse, validate and compare repository references
#[derive(Parser, Debug)]
#[command(name = "repo-ref")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Accept only https:// URLs and file:// paths
    #[arg(long, global = true)]
    pub strict: bool,

    /// Config file to use instead of the default search locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a repository reference and print its canonical forms
    #[command(after_help = "\
EXAMPLES:
    repo-ref parse ossf/scorecard
    repo-ref parse github.com/ossf/scorecard --json
    repo-ref --strict parse file:///src/checkout")]
    Parse {
        /// owner/repo, host/owner/repo, or a full URL
        input: String,

        /// Attach a metadata tag (repeatable)
        #[arg(short, long = "metadata", value_name = "TAG")]
        metadata: Vec<String>,

        /// Also check GitHub naming rules
        #[arg(long)]
        validate: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Describe a repository checked out on disk
    Local {
        /// Directory path, stored as given
        path: String,

        /// Attach a metadata tag (repeatable)
        #[arg(short, long = "metadata", value_name = "TAG")]
        metadata: Vec<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Parse and check a reference against GitHub naming rules
    Validate {
        /// owner/repo, host/owner/repo, or a full URL
        input: String,
    },

    /// Report whether two references identify the same repository
    Compare {
        /// First reference
        first: String,

        /// Second reference
        second: String,

        /// Metadata tag for the first reference (repeatable)
        #[arg(long = "metadata-a", value_name = "TAG")]
        metadata_a: Vec<String>,

        /// Metadata tag for the second reference (repeatable)
        #[arg(long = "metadata-b", value_name = "TAG")]
        metadata_b: Vec<String>,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
