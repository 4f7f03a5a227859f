//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Builds references through [`crate::core::reference`]
//! 2. Applies config-supplied metadata and validation
//! 3. Formats and displays output
//!
//! Handlers never parse input strings themselves.

mod compare;
mod completion;
mod local;
mod parse;
mod validate;

// Re-export command functions for testing and direct invocation
pub use compare::compare;
pub use completion::completion;
pub use local::local;
pub use parse::parse;
pub use validate::validate;

use anyhow::Result;

use crate::cli::args::Command;
use crate::cli::Context;
use crate::core::reference::RepositoryReference;
use crate::ui::output;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Parse {
            input,
            metadata,
            validate,
            json,
        } => parse::parse(ctx, &input, &metadata, validate, json),
        Command::Local {
            path,
            metadata,
            json,
        } => local::local(ctx, &path, &metadata, json),
        Command::Validate { input } => validate::validate(ctx, &input),
        Command::Compare {
            first,
            second,
            metadata_a,
            metadata_b,
        } => compare::compare(ctx, &first, &second, &metadata_a, &metadata_b),
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// Attach config tags, then command-line tags.
fn apply_metadata(ctx: &Context, reference: &mut RepositoryReference, tags: &[String]) {
    reference.append_metadata(ctx.config.metadata().iter().cloned());
    reference.append_metadata(tags.iter().cloned());
}

/// Print a reference as text or JSON.
///
/// JSON is printed even in quiet mode; it is the command's result.
fn emit(ctx: &Context, reference: &RepositoryReference, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(reference)?);
    } else {
        output::print(output::format_reference(reference), ctx.verbosity);
    }
    Ok(())
}
