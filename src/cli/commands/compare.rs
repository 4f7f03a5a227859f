//! compare command - Report whether two references are the same repository

use anyhow::{Context as _, Result};

use super::apply_metadata;
use crate::cli::Context;
use crate::core::reference::RepositoryReference;
use crate::ui::output;

/// Print `equal` or `different`.
///
/// Metadata is compared as a set, so tag order and duplicates do not matter.
pub fn compare(
    ctx: &Context,
    first: &str,
    second: &str,
    metadata_a: &[String],
    metadata_b: &[String],
) -> Result<()> {
    let mut a = RepositoryReference::from_url(first, ctx.mode)
        .with_context(|| format!("first reference '{}'", first))?;
    let mut b = RepositoryReference::from_url(second, ctx.mode)
        .with_context(|| format!("second reference '{}'", second))?;

    apply_metadata(ctx, &mut a, metadata_a);
    apply_metadata(ctx, &mut b, metadata_b);

    output::debug(format!("comparing {} with {}", a, b), ctx.verbosity);
    let verdict = if a == b { "equal" } else { "different" };
    output::print(verdict, ctx.verbosity);
    Ok(())
}
