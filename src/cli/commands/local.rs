//! local command - Describe a repository checked out on disk

use anyhow::Result;

use super::{apply_metadata, emit};
use crate::cli::Context;
use crate::core::reference::RepositoryReference;
use crate::ui::output;

/// Build a local-directory reference. The path is not checked for existence.
pub fn local(ctx: &Context, path: &str, metadata: &[String], json: bool) -> Result<()> {
    let mut reference = RepositoryReference::from_local_dir(path);
    if !std::path::Path::new(path).exists() {
        output::warn(format!("'{}' does not exist", path), ctx.verbosity);
    }

    apply_metadata(ctx, &mut reference, metadata);
    emit(ctx, &reference, json)
}
