//! core::config::schema
//!
//! Booknav settings schema.
//!
//! # Settings File
//!
//! Located at (in order of precedence):
//! 1. `$BOOKNAV_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/booknav/config.toml`
//! 3. `~/.booknav/config.toml`
//!
//! # Validation
//!
//! Values are validated after parsing; unknown keys are rejected.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// What happens when one chapter of the manifest fails to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChapterErrorMode {
    /// Render an inline error in place of the failing chapter only.
    #[default]
    Isolate,
    /// Replace the whole document body with the error message.
    ReplaceDocument,
}

/// Settings file contents.
///
/// # Example
///
/// ```toml
/// max_ascent = 20
/// stop_at_home = true
/// chapter_errors = "isolate"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    /// How many directories the manifest search examines
    pub max_ascent: Option<usize>,

    /// Stop the manifest search at the home directory
    pub stop_at_home: Option<bool>,

    /// Chapter failure handling
    pub chapter_errors: Option<ChapterErrorMode>,
}

impl SettingsFile {
    /// Validate the settings values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_ascent == Some(0) {
            return Err(ConfigError::InvalidValue(
                "max_ascent must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
