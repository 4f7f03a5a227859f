//! validate command - Check a reference against GitHub naming rules

use anyhow::Result;

use crate::cli::Context;
use crate::core::reference::RepositoryReference;
use crate::ui::output;

/// Parse `input`, validate it, and print its canonical URL.
pub fn validate(ctx: &Context, input: &str) -> Result<()> {
    let reference = RepositoryReference::from_url(input, ctx.mode)?;
    reference.validate_github()?;

    if let Some(url) = reference.canonical_url() {
        output::print(format!("ok: {}", url), ctx.verbosity);
    }
    Ok(())
}
