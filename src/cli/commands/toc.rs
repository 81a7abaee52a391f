//! toc command - Render the table of contents of the enclosing book

use crate::cli::Context;
use crate::core::config::ChapterErrorMode;
use crate::render::{RenderOptions, Renderer};
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Flags of the toc command.
#[derive(Debug, Clone, Default)]
pub struct TocArgs {
    /// Print the JSON wire shape instead of bare markup.
    pub json: bool,
    /// Override the settings' search depth.
    pub max_ascent: Option<usize>,
    /// Search past the home directory.
    pub no_stop_at_home: bool,
    /// Use whole-document replacement for chapter failures.
    pub replace_document_on_error: bool,
}

/// Render and print the table of contents.
///
/// CLI flags override the loaded settings.
pub fn toc(ctx: &Context, args: &TocArgs) -> Result<()> {
    let cwd = ctx.working_dir()?;
    let verbosity = ctx.verbosity();

    let mut options = RenderOptions::from_settings(&ctx.settings);
    if let Some(max_ascent) = args.max_ascent {
        options.max_ascent = max_ascent;
    }
    if args.no_stop_at_home {
        options.home = None;
    }
    if args.replace_document_on_error {
        options.chapter_errors = ChapterErrorMode::ReplaceDocument;
    }

    output::debug(format!("rendering toc for {}", cwd.display()), verbosity);
    let outcome = Renderer::new(options).render(&cwd);

    match &outcome.book {
        Some(book) => output::debug(
            format!("book manifest: {}", book.manifest.display()),
            verbosity,
        ),
        None => output::debug("no book found", verbosity),
    }
    super::report_warnings(ctx, &outcome.warnings);

    if args.json {
        let json =
            serde_json::to_string(&outcome.toc).context("Failed to serialize table of contents")?;
        output::print(json);
    } else {
        output::print(&outcome.toc.markup);
    }

    Ok(())
}
