//! core
//!
//! Core domain types and the filesystem-facing components of Booknav.
//!
//! # Modules
//!
//! - [`types`] - Strong types: PathRef, RenderWarning
//! - [`paths`] - Manifest discovery by walking up parent directories
//! - [`resolve`] - Extensionless reference resolution by prefix match
//! - [`title`] - Display title extraction from notebooks and markdown
//! - [`manifest`] - `_toc.yml` shapes and navigation nodes
//! - [`config`] - Book metadata reads and Booknav's own settings
//!
//! # Design Principles
//!
//! - Every read is best-effort: absence is an expected outcome, not a failure
//! - Candidate selection is sorted, so resolution never depends on
//!   directory enumeration order

pub mod config;
pub mod manifest;
pub mod paths;
pub mod resolve;
pub mod title;
pub mod types;
