//! Configuration for the Extractor

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};

/// Tunables for the structure builder
///
/// The defaults reproduce the outline conventions the extractor is built
/// around: two columns of indentation nest a numbered or bulleted item one
/// level, and every leading whitespace character counts as one column.
///
/// # Examples
///
/// ```
/// use lang_select_core::ExtractorConfig;
///
/// let config = ExtractorConfig::default();
/// assert_eq!(config.indent_threshold, 2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Indentation (in columns) at or above which an item is nested one level
    #[serde(default = "default_indent_threshold")]
    pub indent_threshold: usize,

    /// Columns counted for each leading tab when measuring indentation
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,
}

fn default_indent_threshold() -> usize {
    2
}

fn default_tab_width() -> usize {
    1
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.indent_threshold == 0 {
            return Err(ExtractorError::Config(
                "indent_threshold must be greater than 0".to_string(),
            ));
        }
        if self.tab_width == 0 {
            return Err(ExtractorError::Config(
                "tab_width must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Measure the leading-whitespace width of a line in columns
    pub fn indentation(&self, line: &str) -> usize {
        line.chars()
            .take_while(|c| c.is_whitespace())
            .map(|c| if c == '\t' { self.tab_width } else { 1 })
            .sum()
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            indent_threshold: default_indent_threshold(),
            tab_width: default_tab_width(),
        }
    }
}
