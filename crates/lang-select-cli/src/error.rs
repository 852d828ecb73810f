//! Error types for the CLI application.

use lang_select_core::ExtractorError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Extractor configuration rejected
    #[error(transparent)]
    Extractor(#[from] ExtractorError),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Selection tool failure
    #[error("Selector error: {0}")]
    Selector(String),

    /// Extraction produced nothing to choose from
    #[error("No selectable items found in the text")]
    NoItems,

    /// The user cancelled or chose nothing
    #[error("No selection made")]
    NoSelection,
}
