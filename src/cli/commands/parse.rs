//! parse command - Parse a reference and print its canonical forms

use anyhow::Result;

use super::{apply_metadata, emit};
use crate::cli::Context;
use crate::core::locator::RepoKind;
use crate::core::reference::RepositoryReference;
use crate::ui::output;

/// Parse `input` with the context's grammar and print the result.
///
/// Validation runs when `--validate` is given, or when the config asks for
/// it and the reference is URL-backed.
pub fn parse(
    ctx: &Context,
    input: &str,
    metadata: &[String],
    validate: bool,
    json: bool,
) -> Result<()> {
    let mut reference = RepositoryReference::from_url(input, ctx.mode)?;
    output::debug(
        format!("parsed '{}' as {} reference", input, reference.kind()),
        ctx.verbosity,
    );

    let config_validate = ctx.config.validate() && reference.kind() == RepoKind::Url;
    if validate || config_validate {
        reference.validate_github()?;
    }

    apply_metadata(ctx, &mut reference, metadata);
    emit(ctx, &reference, json)
}
