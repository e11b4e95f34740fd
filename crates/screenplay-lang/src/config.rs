//! Engine configuration and its loaders.

use crate::{StyleTable, Vocabulary};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Lines that fit on one screenplay page.
pub const DEFAULT_LINES_PER_PAGE: usize = 56;

/// Maximum number of entries returned by each auto-complete suggester.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 8;

/// Width of the text block in monospace columns (6 inches at 10 characters per inch).
pub const DEFAULT_PAGE_WIDTH: usize = 60;

#[derive(Debug, Error)]
/// Errors produced while loading or validating a [`ScreenplayConfig`].
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    /// YAML parsing failed.
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    /// JSON parsing failed.
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    /// Filesystem I/O failed.
    Io(#[from] std::io::Error),

    #[error("unsupported config format: {0}")]
    /// The file extension is neither YAML nor JSON.
    UnsupportedFormat(String),

    #[error("invalid value for '{field}': {message}")]
    /// A field holds a value the engine cannot work with.
    InvalidValue {
        /// The offending field.
        field: &'static str,
        /// Why the value was rejected.
        message: String,
    },
}

/// Configuration for the screenplay engine.
///
/// Every field has a default, so a config document only needs to list what it overrides:
///
/// ```rust
/// use screenplay_lang::ScreenplayConfig;
///
/// let config = ScreenplayConfig::from_yaml_str("lines_per_page: 55\n").unwrap();
/// assert_eq!(config.lines_per_page, 55);
/// assert_eq!(config.max_suggestions, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenplayConfig {
    /// Lines per page used for pagination and `(MORE)`/`(CONT'D)` placement.
    pub lines_per_page: usize,
    /// Maximum number of suggestions per suggester.
    pub max_suggestions: usize,
    /// Page text width in monospace columns (plain-text preview).
    pub page_width: usize,
    /// Classifier and auto-complete vocabularies.
    pub vocabulary: Vocabulary,
    /// Per-element layout rules.
    pub styles: StyleTable,
}

impl Default for ScreenplayConfig {
    fn default() -> Self {
        Self {
            lines_per_page: DEFAULT_LINES_PER_PAGE,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            page_width: DEFAULT_PAGE_WIDTH,
            vocabulary: Vocabulary::default(),
            styles: StyleTable::default(),
        }
    }
}

impl ScreenplayConfig {
    /// Parse a YAML config document.
    pub fn from_yaml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(input)?;
        config.finish()
    }

    /// Parse a JSON config document.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(input)?;
        config.finish()
    }

    /// Load a config file, choosing the format from its extension (`.yaml`, `.yml`, `.json`).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let input = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading screenplay config");

        match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&input),
            "json" => Self::from_json_str(&input),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Check values the engine divides by or dispatches on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lines_per_page == 0 {
            return Err(ConfigError::InvalidValue {
                field: "lines_per_page",
                message: "must be at least 1".to_string(),
            });
        }

        let required = [
            ("vocabulary.scene_prefixes", &self.vocabulary.scene_prefixes),
            ("vocabulary.shot_keywords", &self.vocabulary.shot_keywords),
            ("vocabulary.transitions", &self.vocabulary.transitions),
        ];
        for (field, table) in required {
            if table.iter().all(|entry| entry.trim().is_empty()) {
                return Err(ConfigError::InvalidValue {
                    field,
                    message: "must contain at least one non-empty entry".to_string(),
                });
            }
        }

        Ok(())
    }

    fn finish(mut self) -> Result<Self, ConfigError> {
        self.vocabulary.normalize();
        self.validate()?;
        Ok(self)
    }
}
