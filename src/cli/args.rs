//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Booknav - Jupyter-Book table of contents for navigation panels
#[derive(Parser, Debug)]
#[command(name = "booknav")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if booknav was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output; suppresses warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the table of contents of the enclosing book
    #[command(
        name = "toc",
        long_about = "Render the table of contents of the enclosing book.\n\n\
            Searches the working directory and its parents for _toc.yml with a \
            _config.yml next to it, resolves every entry to a document and its \
            title, and prints the navigation markup. Outside a book, a \
            'Not a Jupyter-Book' notice is printed instead.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Markup for the book around the current directory
    booknav toc

    # The panel's JSON shape: {\"data\", \"cwd\", \"browser_dir\"}
    booknav toc --json

    # Look further up than the home directory
    booknav toc --no-stop-at-home --max-ascent 40"
    )]
    Toc {
        /// Print the {"data", "cwd", "browser_dir"} JSON object
        #[arg(long)]
        json: bool,

        /// Number of directories to examine while searching for _toc.yml
        #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
        max_ascent: Option<u32>,

        /// Keep searching above the home directory
        #[arg(long)]
        no_stop_at_home: bool,

        /// Let one failing chapter replace the whole body with its error
        #[arg(long)]
        replace_document_on_error: bool,
    },

    /// Print the path of the enclosing book's _toc.yml
    Locate,

    /// Print the display title of a document
    Title {
        /// Document to inspect (.ipynb, .md, or anything else)
        path: PathBuf,
    },

    /// Print the enclosing book's title and author
    Meta,

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash (add to ~/.bashrc)
    booknav completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    booknav completion zsh >> ~/.zshrc"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
