//! core::types
//!
//! Strong types for book navigation concepts.
//!
//! # Types
//!
//! - [`PathRef`] - A document reference as written in `_toc.yml`
//! - [`RenderWarning`] - A non-fatal diagnostic collected during a render
//!
//! # Examples
//!
//! ```
//! use booknav::core::types::PathRef;
//!
//! let reference = PathRef::new("part1/intro");
//! assert_eq!(reference.split(), ("part1", "intro"));
//!
//! let top = PathRef::new("intro");
//! assert_eq!(top.split(), ("", "intro"));
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A possibly-extensionless document reference, relative to a base directory.
///
/// Manifests commonly omit file extensions (`intro` for `intro.md`), so a
/// `PathRef` is treated as a filename prefix until
/// [`PathResolver`](crate::core::resolve::PathResolver) pins it to a real file.
/// Components are separated by `/` regardless of platform, matching how
/// references are written in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathRef(String);

impl PathRef {
    /// Create a reference from its manifest spelling.
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// Get the reference as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split into the directory part and the filename prefix.
    ///
    /// The directory part is empty for references without a `/`.
    pub fn split(&self) -> (&str, &str) {
        match self.0.rsplit_once('/') {
            Some((dir, prefix)) => (dir, prefix),
            None => ("", &self.0),
        }
    }

    /// Join this reference onto a base directory.
    pub fn join_onto(&self, base_dir: &Path) -> PathBuf {
        self.0
            .split('/')
            .filter(|component| !component.is_empty())
            .fold(base_dir.to_path_buf(), |path, component| path.join(component))
    }
}

impl fmt::Display for PathRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PathRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PathRef {
    fn from(reference: &str) -> Self {
        Self::new(reference)
    }
}

impl From<String> for PathRef {
    fn from(reference: String) -> Self {
        Self(reference)
    }
}

/// A non-fatal diagnostic produced while rendering.
///
/// Rendering never fails outright; anything it had to skip, truncate or
/// degrade is reported here so callers can surface it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderWarning {
    /// The warning message.
    pub message: String,
    /// The file or directory the warning concerns.
    pub path: PathBuf,
}

impl RenderWarning {
    /// Create a warning about `path`.
    pub fn new(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            message: message.into(),
            path: path.into(),
        }
    }
}

impl fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.path.display())
    }
}

/// Render a YAML scalar as display text.
///
/// Strings pass through; numbers and booleans use their YAML spelling.
/// Returns `None` for null, sequences and mappings.
pub fn yaml_scalar(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        serde_yaml::Value::Tagged(tagged) => yaml_scalar(&tagged.value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_nested_reference() {
        let reference = PathRef::new("part1/sub/intro");
        assert_eq!(reference.split(), ("part1/sub", "intro"));
    }

    #[test]
    fn split_plain_reference() {
        let reference = PathRef::new("intro");
        assert_eq!(reference.split(), ("", "intro"));
    }

    #[test]
    fn join_onto_base() {
        let reference = PathRef::new("part1/intro.md");
        assert_eq!(
            reference.join_onto(Path::new("/book")),
            PathBuf::from("/book/part1/intro.md")
        );
    }

    #[test]
    fn display_is_verbatim() {
        assert_eq!(PathRef::from("chapters/one").to_string(), "chapters/one");
    }

    #[test]
    fn yaml_scalars_stringify() {
        let num: serde_yaml::Value = serde_yaml::from_str("42").unwrap();
        let flag: serde_yaml::Value = serde_yaml::from_str("true").unwrap();
        let null: serde_yaml::Value = serde_yaml::from_str("~").unwrap();
        let list: serde_yaml::Value = serde_yaml::from_str("[a, b]").unwrap();

        assert_eq!(yaml_scalar(&num).as_deref(), Some("42"));
        assert_eq!(yaml_scalar(&flag).as_deref(), Some("true"));
        assert_eq!(yaml_scalar(&null), None);
        assert_eq!(yaml_scalar(&list), None);
    }

    #[test]
    fn warning_display_names_path() {
        let warning = RenderWarning::new("entry ignored", "/book/_toc.yml");
        assert_eq!(warning.to_string(), "entry ignored (/book/_toc.yml)");
    }
}
