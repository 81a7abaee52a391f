//! core::config
//!
//! Book metadata reads and Booknav settings.
//!
//! # Overview
//!
//! Two unrelated files are called "config" here:
//! - **Book config**: the book's own `_config.yml`, of which only `title`
//!   and `author` are read
//! - **Settings**: Booknav's `config.toml`, controlling the manifest search
//!   and chapter error handling
//!
//! # Book Config
//!
//! Each field is read independently. A broken `author` never costs the
//! title, and the other way round. Failures are returned as
//! [`ConfigError`]s; [`BookMetadata`] turns them into display text.
//!
//! # Settings Precedence
//!
//! Values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Settings file
//! 3. CLI flags (not handled here)
//!
//! # Example
//!
//! ```no_run
//! use booknav::core::config::{read_title, Settings};
//! use std::path::Path;
//!
//! let settings = Settings::load().unwrap();
//! println!("Max ascent: {}", settings.max_ascent());
//!
//! match read_title(Path::new("/path/to/book/_config.yml")) {
//!     Ok(title) => println!("Title: {}", title),
//!     Err(e) => println!("Error: {}", e),
//! }
//! ```

pub mod schema;

pub use schema::{ChapterErrorMode, SettingsFile};

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};
use thiserror::Error;

use crate::core::paths::DEFAULT_MAX_ASCENT;
use crate::core::types::yaml_scalar;

/// Errors from configuration reads.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("config file '{path}' is not a mapping")]
    NotAMapping { path: PathBuf },

    #[error("'{key}' not set in '{path}'")]
    MissingKey { path: PathBuf, key: String },

    #[error("'{key}' in '{path}' is not text")]
    NotText { path: PathBuf, key: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// A book's `_config.yml`.
#[derive(Debug, Clone)]
pub struct BookConfig {
    path: PathBuf,
    fields: Mapping,
}

impl BookConfig {
    /// Read and parse a book config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not YAML, or its
    /// root is not a mapping.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let root: Value = serde_yaml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        match root {
            Value::Mapping(fields) => Ok(Self {
                path: path.to_path_buf(),
                fields,
            }),
            _ => Err(ConfigError::NotAMapping {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Get a top-level field as text.
    ///
    /// Numbers and booleans are rendered as written; `null` counts as unset.
    pub fn field(&self, key: &str) -> Result<String, ConfigError> {
        match self.fields.get(key) {
            None | Some(Value::Null) => Err(ConfigError::MissingKey {
                path: self.path.clone(),
                key: key.to_string(),
            }),
            Some(value) => yaml_scalar(value).ok_or_else(|| ConfigError::NotText {
                path: self.path.clone(),
                key: key.to_string(),
            }),
        }
    }
}

/// Read the book title from `config_path`.
pub fn read_title(config_path: &Path) -> Result<String, ConfigError> {
    BookConfig::load(config_path)?.field("title")
}

/// Read the book author from `config_path`.
pub fn read_author(config_path: &Path) -> Result<String, ConfigError> {
    BookConfig::load(config_path)?.field("author")
}

/// Book title and author, each independently successful or not.
#[derive(Debug)]
pub struct BookMetadata {
    /// The `title` field.
    pub title: Result<String, ConfigError>,
    /// The `author` field.
    pub author: Result<String, ConfigError>,
}

impl BookMetadata {
    /// Read both fields from `config_path`.
    pub fn read(config_path: &Path) -> Self {
        Self {
            title: read_title(config_path),
            author: read_author(config_path),
        }
    }

    /// The title, or a description of why it could not be read.
    pub fn title_text(&self) -> String {
        display_text(&self.title)
    }

    /// The author, or a description of why it could not be read.
    ///
    /// An empty author yields an empty string; the author line is then
    /// left out of the rendered header.
    pub fn author_text(&self) -> String {
        display_text(&self.author)
    }
}

fn display_text(field: &Result<String, ConfigError>) -> String {
    match field {
        Ok(text) => text.clone(),
        Err(e) => format!("Error: {}", e),
    }
}

/// Loaded Booknav settings.
///
/// Accessor methods apply defaults for anything the file leaves unset.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Settings file contents
    pub file: SettingsFile,
    /// Path the settings were loaded from (if any)
    path: Option<PathBuf>,
}

impl Settings {
    /// Load settings from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a settings file exists but cannot be parsed or
    /// holds invalid values. A missing file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_settings_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: SettingsFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        file.validate()?;

        Ok(Self {
            file,
            path: Some(path.to_path_buf()),
        })
    }

    /// Find the settings file, searching the standard locations.
    fn find_settings_file() -> Option<PathBuf> {
        // 1. Check $BOOKNAV_CONFIG
        if let Ok(path) = std::env::var("BOOKNAV_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. Check $XDG_CONFIG_HOME/booknav/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("booknav/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Check ~/.booknav/config.toml
        let path = Self::settings_path().ok()?;
        path.exists().then_some(path)
    }

    /// Get the canonical settings path.
    ///
    /// Returns `~/.booknav/config.toml`.
    pub fn settings_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".booknav/config.toml"))
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// How many directories the manifest search examines.
    ///
    /// Defaults to 20.
    pub fn max_ascent(&self) -> usize {
        self.file.max_ascent.unwrap_or(DEFAULT_MAX_ASCENT)
    }

    /// Whether the manifest search stops at the home directory.
    ///
    /// Defaults to `true`.
    pub fn stop_at_home(&self) -> bool {
        self.file.stop_at_home.unwrap_or(true)
    }

    /// How chapter failures are rendered.
    ///
    /// Defaults to [`ChapterErrorMode::Isolate`].
    pub fn chapter_errors(&self) -> ChapterErrorMode {
        self.file.chapter_errors.unwrap_or_default()
    }

    /// Get the path the settings were loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Serializes tests that touch process environment variables.
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    fn write_config(temp: &TempDir, contents: &str) -> PathBuf {
        let path = temp.path().join("_config.yml");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn reads_title_and_author() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "title: My Book\nauthor: Jane Doe\n");

        assert_eq!(read_title(&path).unwrap(), "My Book");
        assert_eq!(read_author(&path).unwrap(), "Jane Doe");
    }

    #[test]
    fn missing_author_keeps_title() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "title: My Book\n");

        let meta = BookMetadata::read(&path);
        assert_eq!(meta.title_text(), "My Book");
        assert!(matches!(meta.author, Err(ConfigError::MissingKey { .. })));
        assert!(meta.author_text().starts_with("Error: "));
        assert!(meta.author_text().contains("author"));
    }

    #[test]
    fn structured_title_keeps_author() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "title:\n  nested: true\nauthor: Jane\n");

        assert!(matches!(read_title(&path), Err(ConfigError::NotText { .. })));
        assert_eq!(read_author(&path).unwrap(), "Jane");
    }

    #[test]
    fn null_field_is_missing() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "title: Book\nauthor: ~\n");

        assert!(matches!(
            read_author(&path),
            Err(ConfigError::MissingKey { .. })
        ));
    }

    #[test]
    fn numeric_title_is_text() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "title: 1984\n");

        assert_eq!(read_title(&path).unwrap(), "1984");
    }

    #[test]
    fn empty_author_is_empty_text() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "title: Book\nauthor: ''\n");

        assert_eq!(BookMetadata::read(&path).author_text(), "");
    }

    #[test]
    fn malformed_config_describes_error() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "title: [unterminated\n");

        let meta = BookMetadata::read(&path);
        assert!(matches!(meta.title, Err(ConfigError::ParseError { .. })));
        assert!(meta.title_text().contains("failed to parse config file"));
    }

    #[test]
    fn unreadable_config_describes_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("_config.yml");

        let meta = BookMetadata::read(&path);
        assert!(matches!(meta.title, Err(ConfigError::ReadError { .. })));
        assert!(matches!(meta.author, Err(ConfigError::ReadError { .. })));
    }

    #[test]
    fn settings_defaults() {
        let settings = Settings::default();

        assert_eq!(settings.max_ascent(), DEFAULT_MAX_ASCENT);
        assert!(settings.stop_at_home());
        assert_eq!(settings.chapter_errors(), ChapterErrorMode::Isolate);
        assert!(settings.loaded_from().is_none());
    }

    #[test]
    fn settings_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
            max_ascent = 3
            chapter_errors = "replace-document"
            "#,
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.max_ascent(), 3);
        assert!(settings.stop_at_home());
        assert_eq!(settings.chapter_errors(), ChapterErrorMode::ReplaceDocument);
        assert_eq!(settings.loaded_from(), Some(path.as_path()));
    }

    #[test]
    fn settings_from_env() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "stop_at_home = false").unwrap();

        std::env::remove_var("XDG_CONFIG_HOME");
        std::env::set_var("BOOKNAV_CONFIG", path.to_str().unwrap());
        let settings = Settings::load();
        std::env::remove_var("BOOKNAV_CONFIG");
        let settings = settings.unwrap();

        assert!(!settings.stop_at_home());
    }

    #[test]
    fn invalid_settings_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "max_ascent = 0").unwrap();

        assert!(matches!(
            Settings::load_from(&path),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn unknown_settings_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "colour = \"blue\"").unwrap();

        assert!(matches!(
            Settings::load_from(&path),
            Err(ConfigError::ParseError { .. })
        ));
    }
}
