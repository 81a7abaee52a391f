//! ui
//!
//! User-facing output utilities.
//!
//! # Modules
//!
//! - [`output`] - Diagnostics on stderr, gated by verbosity
//!
//! # Design
//!
//! Command results go to stdout; warnings, debug traces and errors go
//! through this module to stderr so piped markup stays clean.

pub mod output;
