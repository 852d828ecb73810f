//! CLI argument definitions and parsing.

use crate::config::{SelectTool, View};
use clap::Parser;
use std::path::PathBuf;

/// Lang Select - pick items out of language-model output.
///
/// Reads text, extracts the list items in it, and prints the ones you choose.
#[derive(Debug, Parser)]
#[command(name = "lang-select")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input file, `-` for stdin
    #[arg(default_value = "-")]
    pub file: String,

    /// Selection tool to use
    #[arg(short, long, value_enum)]
    pub tool: Option<ToolArg>,

    /// Allow selecting more than one item
    #[arg(short, long)]
    pub multi: bool,

    /// Print the extracted items instead of selecting
    #[arg(short, long)]
    pub print_only: bool,

    /// Emit JSON instead of plain text
    #[arg(short, long)]
    pub json: bool,

    /// Display style for --print-only
    #[arg(long, value_enum)]
    pub view: Option<ViewArg>,

    /// Use the flat numbered/bulleted extractor (ignored by the hierarchy
    /// and mixed views, which need nesting)
    #[arg(short, long)]
    pub simple: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log extraction details to stderr
    #[arg(short, long)]
    pub debug: bool,

    /// Read this file instead of FILE when it exists
    #[arg(long)]
    pub recent: Option<PathBuf>,

    /// Save the input text to this file
    #[arg(long)]
    pub save_recent: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, env = "LANG_SELECT_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Selection tool argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ToolArg {
    /// First of fzf, gum, peco on PATH, else internal
    Auto,
    /// Built-in numbered prompt
    Internal,
    /// fzf
    Fzf,
    /// gum choose
    Gum,
    /// peco
    Peco,
}

/// Display style argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ViewArg {
    /// One bulleted line per item
    Flat,
    /// Section headers with an indented tree
    Hierarchy,
    /// Numbered roots with bulleted children
    Mixed,
    /// Table of every field
    Table,
}

impl From<ToolArg> for SelectTool {
    fn from(tool: ToolArg) -> Self {
        match tool {
            ToolArg::Auto => SelectTool::Auto,
            ToolArg::Internal => SelectTool::Internal,
            ToolArg::Fzf => SelectTool::Fzf,
            ToolArg::Gum => SelectTool::Gum,
            ToolArg::Peco => SelectTool::Peco,
        }
    }
}

impl From<ViewArg> for View {
    fn from(view: ViewArg) -> Self {
        match view {
            ViewArg::Flat => View::Flat,
            ViewArg::Hierarchy => View::Hierarchy,
            ViewArg::Mixed => View::Mixed,
            ViewArg::Table => View::Table,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["lang-select"]);
        assert_eq!(cli.file, "-");
        assert!(cli.tool.is_none());
        assert!(cli.view.is_none());
        assert!(!cli.multi && !cli.print_only && !cli.json && !cli.simple);
    }

    #[test]
    fn test_full_flag_set() {
        let cli = Cli::parse_from([
            "lang-select",
            "notes.md",
            "--tool",
            "gum",
            "--multi",
            "--json",
            "--view",
            "hierarchy",
            "--no-color",
            "--save-recent",
            "/tmp/recent.txt",
        ]);
        assert_eq!(cli.file, "notes.md");
        assert_eq!(cli.tool, Some(ToolArg::Gum));
        assert_eq!(cli.view, Some(ViewArg::Hierarchy));
        assert!(cli.multi && cli.json && cli.no_color);
        assert_eq!(cli.save_recent, Some(PathBuf::from("/tmp/recent.txt")));
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::parse_from(["lang-select", "-p", "-s", "-d", "-t", "internal"]);
        assert!(cli.print_only && cli.simple && cli.debug);
        assert_eq!(cli.tool, Some(ToolArg::Internal));
    }

    #[test]
    fn test_rejects_unknown_tool() {
        assert!(Cli::try_parse_from(["lang-select", "--tool", "dmenu"]).is_err());
    }

    #[test]
    fn test_conversions() {
        assert_eq!(SelectTool::from(ToolArg::Peco), SelectTool::Peco);
        assert_eq!(View::from(ViewArg::Mixed), View::Mixed);
    }
}
