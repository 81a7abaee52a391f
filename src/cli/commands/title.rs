//! title command - Print the display title of a document

use std::path::Path;

use crate::cli::Context;
use crate::core::title::title_of;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Print the title of `path`, or the path itself when it has none.
///
/// Relative paths are taken from the working directory.
pub fn title(ctx: &Context, path: &Path) -> Result<()> {
    let document = ctx.working_dir()?.join(path);
    let title = title_of(&document)
        .with_context(|| format!("Failed to read title of {}", document.display()))?;

    output::print(title.unwrap_or_else(|| path.display().to_string()));
    Ok(())
}
