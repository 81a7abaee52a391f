//! Booknav - Jupyter-Book table-of-contents navigation
//!
//! Booknav finds the nearest Jupyter-Book above a working directory, resolves
//! every entry of its `_toc.yml` to a real document and a display title, and
//! renders the tree as nested markup for a navigation panel.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to render)
//! - [`render`] - Orchestrates Locate → Read metadata → Walk → Assemble
//! - [`core`] - Domain types, manifest shapes, path and title resolution
//! - [`ui`] - Output helpers honoring quiet/debug verbosity
//!
//! # Guarantees
//!
//! 1. Rendering is read-only: nothing under the book directory is written
//! 2. [`render::get_toc`] always returns markup, never an error
//! 3. Output is deterministic for an unchanged directory tree
//!
//! # Example
//!
//! ```no_run
//! use booknav::render::get_toc;
//! use std::path::Path;
//!
//! let toc = get_toc(Path::new("/path/to/book/chapters"));
//! println!("{}", toc.markup);
//! ```

pub mod cli;
pub mod core;
pub mod render;
pub mod ui;
