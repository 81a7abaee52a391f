//! render
//!
//! Top-level table-of-contents rendering.
//!
//! # Lifecycle
//!
//! Every render runs the same steps against the filesystem:
//!
//! 1. **Locate** - find `_toc.yml` and its sibling `_config.yml`
//! 2. **Metadata** - read the book title and author
//! 3. **Walk** - render each part or the flat chapter list
//! 4. **Assemble** - wrap header and body into one document
//!
//! When no book is found, a fixed "Not a Jupyter-Book" document naming the
//! working directory is returned instead.
//!
//! # Failure Handling
//!
//! Nothing here returns an error. A manifest that cannot be loaded becomes
//! the body text. A chapter that fails to walk is replaced by an inline
//! error, or, under [`ChapterErrorMode::ReplaceDocument`], its message
//! replaces the whole body. Everything skipped along the way is reported in
//! [`RenderOutcome::warnings`].

pub mod markup;
pub mod walker;

pub use walker::{TreeWalker, WalkError};

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::config::{BookMetadata, ChapterErrorMode, Settings};
use crate::core::manifest::{Manifest, Part};
use crate::core::paths::{BookPaths, ManifestLocator, DEFAULT_MAX_ASCENT};
use crate::core::types::RenderWarning;

/// The rendered panel contents.
///
/// Serializes to the `{"data", "cwd", "browser_dir"}` shape the panel
/// requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedToc {
    /// The markup to inject into the panel.
    #[serde(rename = "data")]
    pub markup: String,
    /// The working directory the render was requested for.
    #[serde(rename = "cwd")]
    pub source_directory: PathBuf,
    /// Final component of the working directory.
    #[serde(rename = "browser_dir")]
    pub display_name: String,
}

/// A rendered TOC together with what the render found along the way.
#[derive(Debug, Clone)]
pub struct RenderOutcome {
    /// The rendered panel contents.
    pub toc: RenderedToc,
    /// The discovered book, if any.
    pub book: Option<BookPaths>,
    /// Non-fatal diagnostics.
    pub warnings: Vec<RenderWarning>,
}

/// Options controlling discovery and failure handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// How many directories the manifest search examines.
    pub max_ascent: usize,
    /// Where the manifest search stops, if anywhere.
    pub home: Option<PathBuf>,
    /// How chapter failures are rendered.
    pub chapter_errors: ChapterErrorMode,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_ascent: DEFAULT_MAX_ASCENT,
            home: dirs::home_dir(),
            chapter_errors: ChapterErrorMode::default(),
        }
    }
}

impl RenderOptions {
    /// Build options from loaded settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            max_ascent: settings.max_ascent(),
            home: if settings.stop_at_home() {
                dirs::home_dir()
            } else {
                None
            },
            chapter_errors: settings.chapter_errors(),
        }
    }

    /// The manifest locator these options describe.
    pub fn locator(&self) -> ManifestLocator {
        ManifestLocator::new()
            .with_max_ascent(self.max_ascent)
            .with_home(self.home.clone())
    }
}

/// Renders tables of contents.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    /// Create a renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render the table of contents for the book enclosing `working_dir`.
    pub fn render(&self, working_dir: &Path) -> RenderOutcome {
        let mut warnings = Vec::new();
        let book = BookPaths::discover(working_dir, &self.options.locator(), &mut warnings);

        let markup = match &book {
            Some(book) => self.render_book(book, &mut warnings),
            None => markup::not_found(working_dir),
        };

        RenderOutcome {
            toc: RenderedToc {
                markup,
                source_directory: working_dir.to_path_buf(),
                display_name: working_dir
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            },
            book,
            warnings,
        }
    }

    fn render_book(&self, book: &BookPaths, warnings: &mut Vec<RenderWarning>) -> String {
        let meta = BookMetadata::read(&book.config);
        let body = self.render_body(book, warnings);
        markup::document(&book.root, &meta.title_text(), &meta.author_text(), &body)
    }

    fn render_body(&self, book: &BookPaths, warnings: &mut Vec<RenderWarning>) -> String {
        let manifest = match Manifest::load(&book.manifest) {
            Ok(manifest) => manifest,
            Err(e) => {
                warnings.push(RenderWarning::new(e.to_string(), book.manifest.clone()));
                return markup::escape_html(&e.to_string());
            }
        };

        let mut body = String::from("\n<ul>");

        match manifest {
            Manifest::Parts(parts) => {
                for (index, part) in parts.iter().enumerate() {
                    let rendered = Part::from_value(part)
                        .map_err(|e| format!("part {}: {}", index + 1, e))
                        .and_then(|part| {
                            self.render_part(&part, book, warnings)
                                .map_err(|e| format!("part {}: {}", index + 1, e))
                        });
                    if let Err(message) = self.absorb(rendered, &mut body, book, warnings) {
                        return message;
                    }
                }
            }
            Manifest::Chapters(chapters) => {
                let rendered = TreeWalker::new(&book.root, &book.manifest, warnings)
                    .render(&chapters, 1)
                    .map(|html| format!("\n{}", html))
                    .map_err(|e| e.to_string());
                if let Err(message) = self.absorb(rendered, &mut body, book, warnings) {
                    return message;
                }
            }
        }

        body.push_str("\n</ul>");
        body
    }

    fn render_part(
        &self,
        part: &Part,
        book: &BookPaths,
        warnings: &mut Vec<RenderWarning>,
    ) -> Result<String, WalkError> {
        let mut out = String::new();
        if let Some(caption) = &part.caption {
            markup::caption(&mut out, caption);
        }
        let chapters =
            TreeWalker::new(&book.root, &book.manifest, warnings).render(&part.chapters, 1)?;
        out.push('\n');
        out.push_str(&chapters);
        Ok(out)
    }

    /// Append a chapter's markup, or handle its failure.
    ///
    /// Returns `Err` with the replacement body when the failure should
    /// replace the whole document.
    fn absorb(
        &self,
        rendered: Result<String, String>,
        body: &mut String,
        book: &BookPaths,
        warnings: &mut Vec<RenderWarning>,
    ) -> Result<(), String> {
        match rendered {
            Ok(html) => {
                body.push_str(&html);
                Ok(())
            }
            Err(message) => {
                warnings.push(RenderWarning::new(message.clone(), book.manifest.clone()));
                match self.options.chapter_errors {
                    ChapterErrorMode::Isolate => {
                        markup::chapter_error(body, &message);
                        Ok(())
                    }
                    ChapterErrorMode::ReplaceDocument => Err(markup::escape_html(&message)),
                }
            }
        }
    }
}

/// Render the table of contents for `working_dir` with default options.
///
/// Always returns a document: either the book's table of contents or the
/// "Not a Jupyter-Book" notice.
pub fn get_toc(working_dir: &Path) -> RenderedToc {
    Renderer::default().render(working_dir).toc
}
