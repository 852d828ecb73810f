//! Lang Select CLI library.
//!
//! Reads text, runs the extractor over it, and lets the user pick items
//! through an external fuzzy finder or a built-in prompt.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod selector;

pub use cli::Cli;
pub use config::{Config, SelectTool, View};
pub use error::{CliError, Result};
pub use output::Formatter;
pub use selector::Selector;
