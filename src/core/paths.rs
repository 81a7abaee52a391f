//! core::paths
//!
//! Book discovery: finding `_toc.yml` and its sibling `_config.yml`.
//!
//! # Search
//!
//! [`ManifestLocator`] checks the starting directory and then each parent in
//! turn. A directory qualifies only if exactly one manifest candidate exists
//! in it; a directory holding both `_toc.yml` and `_toc.yaml` is ambiguous
//! and the search continues upward instead of guessing.
//!
//! The ascent stops when:
//! - a unique manifest is found
//! - the current directory is the user's home directory
//! - the filesystem root is reached
//! - `max_ascent` directories have been examined
//!
//! # Example
//!
//! ```no_run
//! use booknav::core::paths::{BookPaths, ManifestLocator};
//! use std::path::Path;
//!
//! let locator = ManifestLocator::new();
//! if let Some(book) = BookPaths::discover(Path::new("."), &locator, &mut Vec::new()) {
//!     println!("book root: {}", book.root.display());
//! }
//! ```

use std::path::{Path, PathBuf};

use crate::core::types::RenderWarning;

/// Accepted manifest file names, sorted.
pub const MANIFEST_FILE_NAMES: &[&str] = &["_toc.yaml", "_toc.yml"];

/// Accepted book configuration file names, sorted.
pub const CONFIG_FILE_NAMES: &[&str] = &["_config.yaml", "_config.yml"];

/// Default number of directories examined before giving up.
pub const DEFAULT_MAX_ASCENT: usize = 20;

/// Outcome of looking for a uniquely named file in one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Exactly one candidate exists.
    Found(PathBuf),
    /// No candidate exists.
    Missing,
    /// More than one candidate exists, in sorted order.
    Ambiguous(Vec<PathBuf>),
}

/// Look for exactly one of `names` in `dir`.
pub fn find_unique(dir: &Path, names: &[&str]) -> Lookup {
    let mut candidates: Vec<PathBuf> = names
        .iter()
        .map(|name| dir.join(name))
        .filter(|path| path.is_file())
        .collect();
    candidates.sort();

    match candidates.len() {
        0 => Lookup::Missing,
        1 => Lookup::Found(candidates.remove(0)),
        _ => Lookup::Ambiguous(candidates),
    }
}

/// Walks parent directories looking for a book manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestLocator {
    max_ascent: usize,
    home: Option<PathBuf>,
}

impl Default for ManifestLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestLocator {
    /// Create a locator that stops at the user's home directory.
    pub fn new() -> Self {
        Self {
            max_ascent: DEFAULT_MAX_ASCENT,
            home: dirs::home_dir(),
        }
    }

    /// Set how many directories are examined before giving up.
    pub fn with_max_ascent(mut self, max_ascent: usize) -> Self {
        self.max_ascent = max_ascent;
        self
    }

    /// Set the directory at which the ascent stops, or `None` for no stop.
    pub fn with_home(mut self, home: Option<PathBuf>) -> Self {
        self.home = home;
        self
    }

    /// Find the nearest manifest at or above `start`.
    ///
    /// Ambiguous directories are skipped and reported in `warnings`.
    pub fn locate(&self, start: &Path, warnings: &mut Vec<RenderWarning>) -> Option<PathBuf> {
        let mut current = std::path::absolute(start).unwrap_or_else(|_| start.to_path_buf());

        for _ in 0..self.max_ascent {
            match find_unique(&current, MANIFEST_FILE_NAMES) {
                Lookup::Found(path) => return Some(path),
                Lookup::Ambiguous(paths) => warnings.push(RenderWarning::new(
                    format!(
                        "skipping directory with {} manifest candidates",
                        paths.len()
                    ),
                    current.clone(),
                )),
                Lookup::Missing => {}
            }

            if self.home.as_deref() == Some(current.as_path()) {
                return None;
            }

            current = current.parent()?.to_path_buf();
        }

        None
    }
}

/// The files that make up a discovered book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookPaths {
    /// Directory holding the manifest; document references resolve against it.
    pub root: PathBuf,
    /// Path to `_toc.yml`.
    pub manifest: PathBuf,
    /// Path to `_config.yml`.
    pub config: PathBuf,
}

impl BookPaths {
    /// Discover the book containing `start`.
    ///
    /// Returns `None` unless a manifest is found and exactly one
    /// configuration file sits next to it.
    pub fn discover(
        start: &Path,
        locator: &ManifestLocator,
        warnings: &mut Vec<RenderWarning>,
    ) -> Option<Self> {
        let manifest = locator.locate(start, warnings)?;
        let root = manifest.parent()?.to_path_buf();

        match find_unique(&root, CONFIG_FILE_NAMES) {
            Lookup::Found(config) => Some(Self {
                root,
                manifest,
                config,
            }),
            Lookup::Missing => {
                warnings.push(RenderWarning::new(
                    "manifest found but no _config.yml next to it",
                    root,
                ));
                None
            }
            Lookup::Ambiguous(paths) => {
                warnings.push(RenderWarning::new(
                    format!("found {} configuration candidates", paths.len()),
                    root,
                ));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn locator() -> ManifestLocator {
        ManifestLocator::new().with_home(None)
    }

    #[test]
    fn finds_manifest_in_start_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("_toc.yml"), "chapters: []").unwrap();

        let found = locator().locate(temp.path(), &mut Vec::new());
        assert_eq!(found, Some(temp.path().join("_toc.yml")));
    }

    #[test]
    fn finds_manifest_in_ancestor() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join("_toc.yml"), "chapters: []").unwrap();

        let found = locator().locate(&nested, &mut Vec::new());
        assert_eq!(found, Some(temp.path().join("_toc.yml")));
    }

    #[test]
    fn nearest_manifest_wins() {
        let temp = TempDir::new().unwrap();
        let inner = temp.path().join("inner");
        fs::create_dir_all(&inner).unwrap();
        fs::write(temp.path().join("_toc.yml"), "chapters: []").unwrap();
        fs::write(inner.join("_toc.yml"), "chapters: []").unwrap();

        let found = locator().locate(&inner, &mut Vec::new());
        assert_eq!(found, Some(inner.join("_toc.yml")));
    }

    #[test]
    fn ambiguous_directory_is_skipped() {
        let temp = TempDir::new().unwrap();
        let inner = temp.path().join("inner");
        fs::create_dir_all(&inner).unwrap();
        fs::write(inner.join("_toc.yml"), "chapters: []").unwrap();
        fs::write(inner.join("_toc.yaml"), "chapters: []").unwrap();
        fs::write(temp.path().join("_toc.yml"), "chapters: []").unwrap();

        let mut warnings = Vec::new();
        let found = locator().locate(&inner, &mut warnings);

        assert_eq!(found, Some(temp.path().join("_toc.yml")));
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].path, inner);
    }

    #[test]
    fn stops_at_home() {
        let temp = TempDir::new().unwrap();
        let home = temp.path().join("home");
        let work = home.join("work");
        fs::create_dir_all(&work).unwrap();
        // Manifest above home must not be found.
        fs::write(temp.path().join("_toc.yml"), "chapters: []").unwrap();

        let locator = ManifestLocator::new().with_home(Some(home));
        assert_eq!(locator.locate(&work, &mut Vec::new()), None);
    }

    #[test]
    fn manifest_in_home_is_found() {
        let temp = TempDir::new().unwrap();
        let home = temp.path().join("home");
        let work = home.join("work");
        fs::create_dir_all(&work).unwrap();
        fs::write(home.join("_toc.yml"), "chapters: []").unwrap();

        let locator = ManifestLocator::new().with_home(Some(home.clone()));
        assert_eq!(
            locator.locate(&work, &mut Vec::new()),
            Some(home.join("_toc.yml"))
        );
    }

    #[test]
    fn respects_max_ascent() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join("_toc.yml"), "chapters: []").unwrap();

        // c, b, a are examined; the book root is the fourth directory.
        let short = locator().with_max_ascent(3);
        assert_eq!(short.locate(&nested, &mut Vec::new()), None);

        let enough = locator().with_max_ascent(4);
        assert!(enough.locate(&nested, &mut Vec::new()).is_some());
    }

    #[test]
    fn discover_requires_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("_toc.yml"), "chapters: []").unwrap();

        let mut warnings = Vec::new();
        assert_eq!(
            BookPaths::discover(temp.path(), &locator(), &mut warnings),
            None
        );
        assert_eq!(warnings.len(), 1);

        fs::write(temp.path().join("_config.yml"), "title: Book").unwrap();
        let book = BookPaths::discover(temp.path(), &locator(), &mut Vec::new()).unwrap();
        assert_eq!(book.root, temp.path());
        assert_eq!(book.config, temp.path().join("_config.yml"));
    }

    #[test]
    fn discover_rejects_ambiguous_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("_toc.yml"), "chapters: []").unwrap();
        fs::write(temp.path().join("_config.yml"), "title: A").unwrap();
        fs::write(temp.path().join("_config.yaml"), "title: B").unwrap();

        assert_eq!(
            BookPaths::discover(temp.path(), &locator(), &mut Vec::new()),
            None
        );
    }

    #[test]
    fn find_unique_sorts_candidates() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("_toc.yml"), "").unwrap();
        fs::write(temp.path().join("_toc.yaml"), "").unwrap();

        assert_eq!(
            find_unique(temp.path(), MANIFEST_FILE_NAMES),
            Lookup::Ambiguous(vec![
                temp.path().join("_toc.yaml"),
                temp.path().join("_toc.yml"),
            ])
        );
    }
}
