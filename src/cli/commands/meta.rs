//! meta command - Print the enclosing book's title and author

use crate::cli::Context;
use crate::core::config::BookMetadata;
use crate::core::paths::BookPaths;
use crate::render::RenderOptions;
use crate::ui::output;
use anyhow::{bail, Result};

/// Print the book title, then the author line when there is one.
pub fn meta(ctx: &Context) -> Result<()> {
    let cwd = ctx.working_dir()?;
    let mut warnings = Vec::new();

    let locator = RenderOptions::from_settings(&ctx.settings).locator();
    let book = BookPaths::discover(&cwd, &locator, &mut warnings);
    super::report_warnings(ctx, &warnings);

    let Some(book) = book else {
        bail!(
            "\"_toc.yml\" and/or \"_config.yml\" not found in or above {}",
            cwd.display()
        );
    };

    let meta = BookMetadata::read(&book.config);
    output::print(meta.title_text());
    let author = meta.author_text();
    if !author.is_empty() {
        output::print(format!("Author: {}", author));
    }

    Ok(())
}
