//! cli
//!
//! Command-line interface layer for Booknav.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load settings and delegate to command handlers
//! - Surface render warnings on stderr
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! [`crate::render`] and [`crate::core`]; all rendering semantics live there.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::core::config::Settings;
use crate::ui::output::{self, Verbosity};

/// Execution context shared by command handlers.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Working directory override.
    pub cwd: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
    /// Loaded settings.
    pub settings: Settings,
}

impl Context {
    /// The directory commands act on.
    pub fn working_dir(&self) -> Result<PathBuf> {
        match &self.cwd {
            Some(cwd) => Ok(cwd.clone()),
            None => std::env::current_dir().context("Failed to determine current directory"),
        }
    }

    /// Output verbosity from the global flags.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let settings = Settings::load().context("Failed to load settings")?;
    let ctx = Context {
        cwd: cli.cwd.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
        settings,
    };

    if let Some(path) = ctx.settings.loaded_from() {
        output::debug(
            format!("settings loaded from {}", path.display()),
            ctx.verbosity(),
        );
    }

    commands::dispatch(cli.command, &ctx)
}
