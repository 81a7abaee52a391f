//! locate command - Print the path of the enclosing book's manifest

use crate::cli::Context;
use crate::render::RenderOptions;
use crate::ui::output;
use anyhow::{bail, Result};

/// Print the manifest path, failing when no book encloses the directory.
pub fn locate(ctx: &Context) -> Result<()> {
    let cwd = ctx.working_dir()?;
    let mut warnings = Vec::new();

    let found = RenderOptions::from_settings(&ctx.settings)
        .locator()
        .locate(&cwd, &mut warnings);
    super::report_warnings(ctx, &warnings);

    match found {
        Some(manifest) => {
            output::print(manifest.display());
            Ok(())
        }
        None => bail!("No _toc.yml found in or above {}", cwd.display()),
    }
}
