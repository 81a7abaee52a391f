//! core::manifest
//!
//! `_toc.yml` shapes.
//!
//! # Shapes
//!
//! A manifest root is one of:
//!
//! ```yaml
//! # Flat
//! chapters:
//!   - file: intro
//!   - file: methods
//!     sections:
//!       - file: methods/setup
//!
//! # Parted
//! parts:
//!   - caption: Getting Started
//!     chapters:
//!       - file: intro
//!       - url: https://jupyterbook.org
//!         title: Jupyter Book
//! ```
//!
//! Node lists are kept as raw YAML and converted one entry at a time while
//! walking. A malformed entry therefore only affects the list it sits in,
//! and a broken part only affects that part.

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};
use thiserror::Error;

use crate::core::types::{yaml_scalar, PathRef};

/// Errors loading a manifest file.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse manifest '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("manifest '{path}' is not a mapping")]
    NotAMapping { path: PathBuf },

    #[error("manifest '{path}' has neither 'parts' nor 'chapters'")]
    MissingRoot { path: PathBuf },

    #[error("'{key}' in manifest '{path}' must be a list")]
    NotASequence { path: PathBuf, key: &'static str },
}

/// Errors converting a single manifest entry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NodeError {
    #[error("entry is not a mapping: {found}")]
    NotAMapping { found: String },

    #[error("{kind} entry is missing '{key}'")]
    MissingField {
        kind: &'static str,
        key: &'static str,
    },

    #[error("'{key}' in {kind} entry must be a list")]
    NotASequence {
        kind: &'static str,
        key: &'static str,
    },
}

/// A parsed `_toc.yml`.
#[derive(Debug, Clone, PartialEq)]
pub enum Manifest {
    /// `parts:` - a list of captioned groups, each parsed with [`Part::from_value`].
    Parts(Vec<Value>),
    /// `chapters:` - a flat list of navigation entries.
    Chapters(Vec<Value>),
}

impl Manifest {
    /// Read and parse a manifest file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not YAML, or has no
    /// `parts`/`chapters` list at its root.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let contents = fs::read_to_string(path).map_err(|e| ManifestError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&contents, path)
    }

    /// Parse manifest text; `path` is only used in error messages.
    pub fn parse(contents: &str, path: &Path) -> Result<Self, ManifestError> {
        let root: Value = serde_yaml::from_str(contents).map_err(|e| ManifestError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let Value::Mapping(root) = root else {
            return Err(ManifestError::NotAMapping {
                path: path.to_path_buf(),
            });
        };

        let list = |key: &'static str| match root.get(key) {
            Some(Value::Sequence(items)) => Ok(items.clone()),
            _ => Err(ManifestError::NotASequence {
                path: path.to_path_buf(),
                key,
            }),
        };

        // `parts` takes precedence when both are present.
        if root.contains_key("parts") {
            list("parts").map(Manifest::Parts)
        } else if root.contains_key("chapters") {
            list("chapters").map(Manifest::Chapters)
        } else {
            Err(ManifestError::MissingRoot {
                path: path.to_path_buf(),
            })
        }
    }
}

/// A captioned group of chapters (an entry of `parts:`).
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    /// Heading shown above the group, if any.
    pub caption: Option<String>,
    /// The group's navigation entries.
    pub chapters: Vec<Value>,
}

impl Part {
    /// Convert one `parts:` entry.
    pub fn from_value(value: &Value) -> Result<Self, NodeError> {
        let map = as_mapping(value)?;
        let chapters = match map.get("chapters") {
            Some(Value::Sequence(items)) => items.clone(),
            Some(_) => {
                return Err(NodeError::NotASequence {
                    kind: "part",
                    key: "chapters",
                })
            }
            None => {
                return Err(NodeError::MissingField {
                    kind: "part",
                    key: "chapters",
                })
            }
        };

        Ok(Self {
            caption: map.get("caption").and_then(yaml_scalar),
            chapters,
        })
    }
}

/// One entry of a navigation list.
///
/// Each variant carries only what it needs; the walker matches exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationNode {
    /// A collapsible group with its own representative document.
    Section { file: PathRef, children: Vec<Value> },
    /// A single document.
    Leaf { file: PathRef },
    /// An external hyperlink; never resolved against the filesystem.
    Link { title: String, url: String },
    /// A glob pattern; renders nothing. Holds the raw value, whatever its shape.
    Glob { pattern: Value },
}

impl NavigationNode {
    /// Convert one manifest entry.
    ///
    /// Keys are checked in the order `sections`, `file`, `url`, `glob`; the
    /// first present decides the variant. A mapping with none of them
    /// yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::NotAMapping`] for scalars and lists, and
    /// [`NodeError::MissingField`] when the chosen variant lacks a field.
    pub fn from_value(value: &Value) -> Result<Option<Self>, NodeError> {
        let map = as_mapping(value)?;

        if let Some(sections) = map.get("sections") {
            let file = field(map, "section", "file")?;
            let children = match sections {
                Value::Sequence(children) => children.clone(),
                _ => Vec::new(),
            };
            return Ok(Some(NavigationNode::Section {
                file: PathRef::new(file),
                children,
            }));
        }

        if map.contains_key("file") {
            let file = field(map, "file", "file")?;
            return Ok(Some(NavigationNode::Leaf {
                file: PathRef::new(file),
            }));
        }

        if map.contains_key("url") {
            return Ok(Some(NavigationNode::Link {
                url: field(map, "url", "url")?,
                title: field(map, "url", "title")?,
            }));
        }

        if let Some(pattern) = map.get("glob") {
            return Ok(Some(NavigationNode::Glob {
                pattern: pattern.clone(),
            }));
        }

        Ok(None)
    }
}

fn as_mapping(value: &Value) -> Result<&Mapping, NodeError> {
    match value {
        Value::Mapping(map) => Ok(map),
        other => Err(NodeError::NotAMapping {
            found: describe(other),
        }),
    }
}

fn field(map: &Mapping, kind: &'static str, key: &'static str) -> Result<String, NodeError> {
    map.get(key)
        .and_then(yaml_scalar)
        .ok_or(NodeError::MissingField { kind, key })
}

/// Short description of a YAML value for diagnostics.
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Sequence(_) => "a list".to_string(),
        Value::Mapping(_) => "a mapping".to_string(),
        other => yaml_scalar(other)
            .map(|s| format!("{:?}", s))
            .unwrap_or_else(|| "a tagged value".to_string()),
    }
}
