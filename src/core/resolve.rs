//! core::resolve
//!
//! Resolution of manifest references to files on disk.
//!
//! Manifest authors usually leave off extensions, so `intro` has to be
//! matched against `intro.md` or `intro.ipynb`. The reference is used as a
//! filename prefix inside its directory; the lexicographically first match
//! wins. When nothing matches, the reference is passed through unchanged so
//! the entry still renders.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::types::PathRef;

/// Resolves possibly-extensionless references against a base directory.
#[derive(Debug, Clone)]
pub struct PathResolver {
    base_dir: PathBuf,
}

impl PathResolver {
    /// Create a resolver rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// The directory references are resolved against.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Resolve `reference` to a real entry, relative to the base directory.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use booknav::core::resolve::PathResolver;
    /// use booknav::core::types::PathRef;
    ///
    /// let resolver = PathResolver::new("/path/to/book");
    /// // With intro.md on disk:
    /// assert_eq!(resolver.resolve(&PathRef::new("intro")).as_str(), "intro.md");
    /// ```
    pub fn resolve(&self, reference: &PathRef) -> PathRef {
        let (dir, prefix) = reference.split();
        let search_dir = PathRef::new(dir).join_onto(&self.base_dir);

        let Ok(entries) = fs::read_dir(&search_dir) else {
            return reference.clone();
        };

        let mut matches: Vec<String> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| name.starts_with(prefix))
            // Hidden entries only match a prefix that asks for them.
            .filter(|name| !name.starts_with('.') || prefix.starts_with('.'))
            .collect();
        matches.sort();

        match matches.into_iter().next() {
            Some(name) if dir.is_empty() => PathRef::new(name),
            Some(name) => PathRef::new(format!("{}/{}", dir, name)),
            None => reference.clone(),
        }
    }
}
