//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use lang_select_core::ExtractorConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Display and selection settings
    #[serde(default)]
    pub settings: Settings,

    /// Extraction engine tunables
    #[serde(default)]
    pub extractor: ExtractorConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default display style for `--print-only`
    #[serde(default)]
    pub view: View,

    /// Default selection tool
    #[serde(default)]
    pub tool: SelectTool,
}

/// How extracted items are displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// One bulleted line per item
    #[default]
    Flat,
    /// Section headers with an indented tree
    Hierarchy,
    /// Numbered roots with bulleted children
    Mixed,
    /// Every field in a table
    Table,
}

impl View {
    /// Whether the view draws parent links, which flat extraction never sets
    pub fn needs_structure(&self) -> bool {
        matches!(self, View::Hierarchy | View::Mixed)
    }
}

/// Which selector presents the items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectTool {
    /// First external tool found on `PATH`, else the built-in prompt
    #[default]
    Auto,
    /// Built-in numbered prompt
    Internal,
    /// fzf fuzzy finder
    Fzf,
    /// gum choose
    Gum,
    /// peco
    Peco,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".lang-select").join("config.toml"))
    }

    /// Load configuration from `path`, or the default location when `None`.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load_from(&Self::path()?),
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.extractor.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            view: View::default(),
            tool: SelectTool::default(),
        }
    }
}

fn default_true() -> bool {
    true
}
