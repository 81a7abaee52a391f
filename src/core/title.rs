//! core::title
//!
//! Display title extraction.
//!
//! # Heuristics
//!
//! - **Notebooks** (`.ipynb`): the first markdown cell whose first source
//!   line starts with `"# "`
//! - **Markdown** (`.md`, `.markdown`, `.txt`): the first line starting
//!   with `"# "`
//! - **Anything else**: the path itself, verbatim
//!
//! The heading marker is stripped and the remainder trimmed. A notebook or
//! markdown file without such a heading has no title; callers decide what
//! to show instead.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Prefix that marks a level-one heading.
const HEADING_MARKER: &str = "# ";

/// Errors from title extraction.
#[derive(Debug, Error)]
pub enum TitleError {
    #[error("failed to read document '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse notebook '{path}': {source}")]
    NotebookError {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// How a document is inspected for its title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Jupyter notebook (JSON, cell based).
    Notebook,
    /// Plain markdown or text.
    Markdown,
    /// Not introspected.
    Other,
}

impl DocumentKind {
    /// Classify a path by its extension.
    pub fn of(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("ipynb") => DocumentKind::Notebook,
            Some("md") | Some("markdown") | Some("txt") => DocumentKind::Markdown,
            _ => DocumentKind::Other,
        }
    }
}

/// The parts of nbformat we look at.
#[derive(Debug, Deserialize)]
struct Notebook {
    #[serde(default)]
    cells: Vec<Cell>,
}

#[derive(Debug, Deserialize)]
struct Cell {
    cell_type: String,
    #[serde(default)]
    source: Option<CellSource>,
}

/// nbformat allows cell source as a list of lines or a single string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CellSource {
    Lines(Vec<String>),
    Text(String),
}

impl CellSource {
    fn first_line(&self) -> Option<&str> {
        match self {
            CellSource::Lines(lines) => lines.first().and_then(|line| line.lines().next()),
            CellSource::Text(text) => text.lines().next(),
        }
    }
}

/// Extract the display title of the document at `path`.
///
/// Returns `Ok(None)` when a notebook or markdown file has no heading.
///
/// # Errors
///
/// Returns an error if a notebook or markdown file cannot be read, or a
/// notebook is not valid JSON. Other kinds are never opened.
pub fn title_of(path: &Path) -> Result<Option<String>, TitleError> {
    match DocumentKind::of(path) {
        DocumentKind::Notebook => notebook_title(path),
        DocumentKind::Markdown => markdown_title(path),
        DocumentKind::Other => Ok(Some(path.display().to_string())),
    }
}

fn notebook_title(path: &Path) -> Result<Option<String>, TitleError> {
    let contents = read(path)?;
    let notebook: Notebook =
        serde_json::from_str(&contents).map_err(|e| TitleError::NotebookError {
            path: path.to_path_buf(),
            source: e,
        })?;

    Ok(notebook
        .cells
        .iter()
        .filter(|cell| cell.cell_type == "markdown")
        .filter_map(|cell| cell.source.as_ref()?.first_line())
        .find_map(heading_text))
}

fn markdown_title(path: &Path) -> Result<Option<String>, TitleError> {
    let contents = read(path)?;
    Ok(contents.lines().find_map(heading_text))
}

/// The text of a `"# "` heading line, or `None` for any other line.
pub fn heading_text(line: &str) -> Option<String> {
    line.strip_prefix(HEADING_MARKER)
        .map(|rest| rest.trim().to_string())
}

fn read(path: &Path) -> Result<String, TitleError> {
    fs::read_to_string(path).map_err(|e| TitleError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })
}
