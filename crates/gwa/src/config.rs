//! Configuration types for GWA decoding.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! TOML or any other serde source. Every section and field has a default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the codec and document sections.
//! - [`CodecConfig`] - Line-level settings such as the field delimiter.
//! - [`DocumentConfig`] - How multi-line documents treat comments and unknown keywords.
//!
//! # Example
//!
//! ```
//! # use gwa::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.codec().delimiter(), '\t');
//! assert!(config.validate().is_ok());
//! ```

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Line codec section.
    #[serde(default)]
    codec: CodecConfig,

    /// Document section.
    #[serde(default)]
    document: DocumentConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    ///
    /// # Arguments
    ///
    /// * `codec` - Line codec settings.
    /// * `document` - Document decoding settings.
    pub fn new(codec: CodecConfig, document: DocumentConfig) -> Self {
        Self { codec, document }
    }

    /// Returns the codec configuration.
    pub fn codec(&self) -> &CodecConfig {
        &self.codec
    }

    /// Returns the document configuration.
    pub fn document(&self) -> &DocumentConfig {
        &self.document
    }

    /// Returns this configuration with the delimiter replaced.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.codec.delimiter = delimiter;
        self
    }

    /// Check the configuration for values the codec cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when the delimiter is a bracket,
    /// a line break or whitespace other than tab.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let delimiter = self.codec.delimiter;
        let invalid = matches!(delimiter, '(' | ')' | '\n' | '\r')
            || (delimiter.is_whitespace() && delimiter != '\t');
        if invalid {
            return Err(ConfigError::Validation(format!(
                "{delimiter:?} cannot be used as a field delimiter"
            )));
        }
        Ok(())
    }
}

/// Line-level codec settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CodecConfig {
    /// Field delimiter, a single character.
    #[serde(default = "default_delimiter")]
    delimiter: char,
}

impl CodecConfig {
    /// Creates a new [`CodecConfig`] splitting fields on `delimiter`.
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    /// Returns the field delimiter.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
        }
    }
}

/// Settings for multi-line documents.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    /// Report unknown keywords as warnings instead of failures.
    #[serde(default = "default_skip_unknown")]
    skip_unknown_keywords: bool,

    /// Lines starting with this prefix are ignored.
    #[serde(default = "default_comment_prefix")]
    comment_prefix: String,
}

impl DocumentConfig {
    /// Creates a new [`DocumentConfig`].
    ///
    /// # Arguments
    ///
    /// * `skip_unknown_keywords` - Whether unknown keywords are warnings rather than failures.
    /// * `comment_prefix` - Prefix marking comment lines. An empty prefix disables comments.
    pub fn new(skip_unknown_keywords: bool, comment_prefix: impl Into<String>) -> Self {
        Self {
            skip_unknown_keywords,
            comment_prefix: comment_prefix.into(),
        }
    }

    /// Returns whether unknown keywords are skipped with a warning.
    pub fn skip_unknown_keywords(&self) -> bool {
        self.skip_unknown_keywords
    }

    /// Returns the comment prefix.
    pub fn comment_prefix(&self) -> &str {
        &self.comment_prefix
    }

    /// Whether `line` carries no record: blank or a comment.
    pub fn is_ignored(&self, line: &str) -> bool {
        let line = line.trim();
        line.is_empty() || (!self.comment_prefix.is_empty() && line.starts_with(&self.comment_prefix))
    }
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            skip_unknown_keywords: default_skip_unknown(),
            comment_prefix: default_comment_prefix(),
        }
    }
}

fn default_delimiter() -> char {
    '\t'
}

fn default_skip_unknown() -> bool {
    true
}

fn default_comment_prefix() -> String {
    "!".to_string()
}
