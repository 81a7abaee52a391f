//! render::walker
//!
//! Depth-first rendering of navigation lists.
//!
//! # Sibling Lists
//!
//! Entries are converted and rendered one at a time, in order. The walk of
//! a list short-circuits on the first entry that is not a mapping: what was
//! rendered so far is kept, the remaining siblings are dropped, and a
//! [`RenderWarning`] records how many were lost. Only that list is cut
//! short; the enclosing lists carry on.
//!
//! A mapping with no recognized key renders nothing and is reported.
//! Entries missing a required field fail the walk with a [`WalkError`],
//! which the renderer handles at the chapter boundary.
//!
//! # Titles
//!
//! File entries are resolved with [`PathResolver`] and titled with
//! [`title_of`]. When the document has no heading, or cannot be read, the
//! label falls back to the reference as written in the manifest.

use std::path::Path;

use serde_yaml::Value;
use thiserror::Error;

use crate::core::manifest::{NavigationNode, NodeError};
use crate::core::resolve::PathResolver;
use crate::core::title::title_of;
use crate::core::types::{PathRef, RenderWarning};
use crate::render::markup;

/// Errors that abort the walk of a chapter.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalkError {
    #[error("invalid entry {position} at level {level}: {source}")]
    InvalidEntry {
        position: usize,
        level: usize,
        source: NodeError,
    },
}

/// Renders navigation lists relative to one book directory.
pub struct TreeWalker<'w> {
    resolver: PathResolver,
    manifest: &'w Path,
    warnings: &'w mut Vec<RenderWarning>,
}

impl<'w> TreeWalker<'w> {
    /// Create a walker for the book rooted at `base_dir`.
    ///
    /// `manifest` is only used to attribute warnings.
    pub fn new(base_dir: &Path, manifest: &'w Path, warnings: &'w mut Vec<RenderWarning>) -> Self {
        Self {
            resolver: PathResolver::new(base_dir),
            manifest,
            warnings,
        }
    }

    /// Render `entries` at nesting `level` (1 for top-level lists).
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::InvalidEntry`] when an entry at any depth is
    /// missing a required field.
    pub fn render(&mut self, entries: &[Value], level: usize) -> Result<String, WalkError> {
        let mut out = String::new();

        for (index, entry) in entries.iter().enumerate() {
            let position = index + 1;
            match NavigationNode::from_value(entry) {
                Ok(Some(node)) => self.render_node(node, level, &mut out)?,
                Ok(None) => self.warn(format!(
                    "entry {} at level {} has no 'file', 'sections', 'url' or 'glob' key; ignored",
                    position, level
                )),
                Err(NodeError::NotAMapping { found }) => {
                    self.warn(format!(
                        "entry {} at level {} is {}, not a mapping; dropping it and {} later sibling(s)",
                        position,
                        level,
                        found,
                        entries.len() - position
                    ));
                    break;
                }
                Err(source) => {
                    return Err(WalkError::InvalidEntry {
                        position,
                        level,
                        source,
                    })
                }
            }
        }

        Ok(out)
    }

    fn render_node(
        &mut self,
        node: NavigationNode,
        level: usize,
        out: &mut String,
    ) -> Result<(), WalkError> {
        match node {
            NavigationNode::Section { file, children } => {
                let (path, title) = self.resolve_entry(&file);
                markup::section_open(out, level, &path, &title);
                out.push_str(&self.render(&children, level + 1)?);
                markup::section_close(out);
            }
            NavigationNode::Leaf { file } => {
                let (path, title) = self.resolve_entry(&file);
                markup::leaf(out, level, &path, &title);
            }
            NavigationNode::Link { title, url } => {
                markup::link(out, level, &url, &title);
            }
            NavigationNode::Glob { .. } => {}
        }
        Ok(())
    }

    /// Resolve a file reference to its on-disk path and display title.
    fn resolve_entry(&mut self, file: &PathRef) -> (PathRef, String) {
        let path = self.resolver.resolve(file);
        let document = path.join_onto(self.resolver.base_dir());

        let title = match title_of(&document) {
            Ok(Some(title)) if !title.is_empty() => title,
            Ok(_) => file.to_string(),
            Err(e) => {
                self.warnings
                    .push(RenderWarning::new(e.to_string(), document.clone()));
                file.to_string()
            }
        };

        (path, title)
    }

    fn warn(&mut self, message: String) {
        self.warnings
            .push(RenderWarning::new(message, self.manifest.to_path_buf()));
    }
}
