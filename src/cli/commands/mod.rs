//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Resolves the working directory and options from the context
//! 2. Calls into [`crate::render`] or [`crate::core`]
//! 3. Formats and displays output
//!
//! Handlers never write under the book directory.

mod completion;
mod locate;
mod meta;
mod title;
mod toc;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use locate::locate;
pub use meta::meta;
pub use title::title;
pub use toc::{toc, TocArgs};

use crate::cli::args::Command;
use crate::cli::Context;
use crate::core::types::RenderWarning;
use crate::ui::output;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Toc {
            json,
            max_ascent,
            no_stop_at_home,
            replace_document_on_error,
        } => toc::toc(
            ctx,
            &TocArgs {
                json,
                max_ascent: max_ascent.map(|n| n as usize),
                no_stop_at_home,
                replace_document_on_error,
            },
        ),
        Command::Locate => locate::locate(ctx),
        Command::Title { path } => title::title(ctx, &path),
        Command::Meta => meta::meta(ctx),
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// Print collected warnings on stderr.
fn report_warnings(ctx: &Context, warnings: &[RenderWarning]) {
    for warning in warnings {
        output::warn(warning, ctx.verbosity());
    }
}
