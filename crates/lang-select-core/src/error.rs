//! Error types for the extraction engine
//!
//! Extraction itself never fails: lines that match nothing are dropped and an
//! empty result is a normal outcome. The only fallible surface is the engine
//! configuration.

use thiserror::Error;

/// Errors raised while building or loading an extractor configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractorError {
    /// Configuration failed validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML input could not be parsed into a configuration
    #[error("TOML parse error: {0}")]
    TomlParse(String),

    /// Configuration could not be written out as TOML
    #[error("TOML serialize error: {0}")]
    TomlSerialize(String),
}

impl From<toml::de::Error> for ExtractorError {
    fn from(e: toml::de::Error) -> Self {
        ExtractorError::TomlParse(e.to_string())
    }
}

impl From<toml::ser::Error> for ExtractorError {
    fn from(e: toml::ser::Error) -> Self {
        ExtractorError::TomlSerialize(e.to_string())
    }
}
