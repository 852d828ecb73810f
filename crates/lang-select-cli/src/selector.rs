//! Interactive item selection.
//!
//! External fuzzy finders receive item contents on stdin and print the chosen
//! lines; the built-in selector numbers the items and reads ids at a prompt.

use crate::config::SelectTool;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use lang_select_core::{Item, ItemId};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, Write};
use std::process::{Child, Command, Stdio};
use tracing::{debug, warn};

const PROMPT: &str = "Select an item";

/// External selection programs, in `auto` preference order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalTool {
    /// fzf
    Fzf,
    /// gum choose
    Gum,
    /// peco
    Peco,
}

impl ExternalTool {
    /// Every tool, in detection order
    pub const ALL: [ExternalTool; 3] = [ExternalTool::Fzf, ExternalTool::Gum, ExternalTool::Peco];

    /// Executable name
    pub fn program(&self) -> &'static str {
        match self {
            ExternalTool::Fzf => "fzf",
            ExternalTool::Gum => "gum",
            ExternalTool::Peco => "peco",
        }
    }

    /// Command-line arguments for single or multi selection
    pub fn args(&self, multi: bool) -> Vec<String> {
        match self {
            ExternalTool::Fzf => {
                let mut args = vec!["--height=40%".to_string(), format!("--prompt={}: ", PROMPT)];
                if multi {
                    args.push("--multi".to_string());
                }
                args
            }
            ExternalTool::Gum => {
                let limit = if multi { "--no-limit" } else { "--limit=1" };
                vec![
                    "choose".to_string(),
                    limit.to_string(),
                    format!("--header={}", PROMPT),
                ]
            }
            // peco selects several lines natively
            ExternalTool::Peco => vec![format!("--prompt={}:", PROMPT)],
        }
    }

    /// First tool found on `PATH`
    pub fn detect() -> Option<ExternalTool> {
        Self::ALL
            .into_iter()
            .find(|tool| which::which(tool.program()).is_ok())
    }
}

/// Resolved selection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    External(ExternalTool),
    Internal,
}

/// Presents items and returns the user's choice.
pub struct Selector {
    tool: SelectTool,
    multi: bool,
}

impl Selector {
    /// Create a new selector.
    pub fn new(tool: SelectTool, multi: bool) -> Self {
        Self { tool, multi }
    }

    /// Let the user choose among `items`.
    ///
    /// An empty result means the user cancelled or chose nothing.
    pub fn select<'a>(&self, items: &'a [Item], formatter: &Formatter) -> Result<Vec<&'a Item>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        match self.strategy() {
            Strategy::External(tool) => match run_external(tool, items, self.multi) {
                Ok(lines) => {
                    let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
                    let selected = map_selection(items, &lines);
                    Ok(if self.multi {
                        selected
                    } else {
                        selected.into_iter().take(1).collect()
                    })
                }
                Err(e) => {
                    warn!("Could not run {}: {}, using internal selector", tool.program(), e);
                    select_internal(items, self.multi, formatter)
                }
            },
            Strategy::Internal => select_internal(items, self.multi, formatter),
        }
    }

    fn strategy(&self) -> Strategy {
        match self.tool {
            SelectTool::Auto => ExternalTool::detect()
                .map(Strategy::External)
                .unwrap_or(Strategy::Internal),
            SelectTool::Internal => Strategy::Internal,
            SelectTool::Fzf => Strategy::External(ExternalTool::Fzf),
            SelectTool::Gum => Strategy::External(ExternalTool::Gum),
            SelectTool::Peco => Strategy::External(ExternalTool::Peco),
        }
    }
}

/// Run an external tool and collect its output lines.
///
/// A non-zero exit is a cancelled selection, not an error.
fn run_external(tool: ExternalTool, items: &[Item], multi: bool) -> io::Result<Vec<String>> {
    debug!("Selecting with {} (multi: {})", tool.program(), multi);

    let mut child = Command::new(tool.program())
        .args(tool.args(multi))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()?;

    send_items(&mut child, items)?;

    let output = child.wait_with_output()?;
    if !output.status.success() {
        debug!("{} exited with {}", tool.program(), output.status);
        return Ok(Vec::new());
    }

    Ok(String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| line.trim_end().to_string())
        .filter(|line| !line.is_empty())
        .collect())
}

/// Pipe item contents to the child's stdin.
///
/// On a failed write the child is reaped before the error is returned.
fn send_items(child: &mut Child, items: &[Item]) -> io::Result<()> {
    let Some(stdin) = child.stdin.take() else {
        return Ok(());
    };
    if let Err(e) = feed_items(stdin, items) {
        // the tool may have quit early
        if let Err(wait_err) = child.wait() {
            debug!("Could not reap child {}: {}", child.id(), wait_err);
        }
        return Err(e);
    }
    Ok(())
}

/// Write one item per line, closing the pipe when done.
fn feed_items<W: Write>(mut writer: W, items: &[Item]) -> io::Result<()> {
    let input: Vec<&str> = items.iter().map(|item| item.content.as_str()).collect();
    writer.write_all(input.join("\n").as_bytes())?;
    writer.flush()
}

/// Map selected lines back to items, first unused content match wins.
///
/// Repeated lines pick successive items with the same content. Lines that
/// match no remaining item are ignored.
pub fn map_selection<'a>(items: &'a [Item], lines: &[&str]) -> Vec<&'a Item> {
    let mut taken: Vec<ItemId> = Vec::new();
    let mut selected = Vec::with_capacity(lines.len());
    for line in lines {
        if let Some(item) = items
            .iter()
            .find(|item| item.content == *line && !taken.contains(&item.id))
        {
            taken.push(item.id);
            selected.push(item);
        }
    }
    selected
}

/// Parse the internal selector's input into item ids.
///
/// Accepts one id, or in multi mode a comma or space separated list of ids
/// and `a-b` ranges, or `*` / `all` for every item.
pub fn parse_selection(input: &str, items: &[Item], multi: bool) -> Result<Vec<ItemId>> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CliError::InvalidInput("Nothing entered".to_string()));
    }

    if input == "*" || input.eq_ignore_ascii_case("all") {
        if !multi {
            return Err(CliError::InvalidInput(
                "Select a single item (use --multi for more)".to_string(),
            ));
        }
        return Ok(items.iter().map(|item| item.id).collect());
    }

    let mut ids = Vec::new();
    for token in input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        match token.split_once('-') {
            Some((start, end)) => {
                let start = parse_id(start, items)?;
                let end = parse_id(end, items)?;
                if start > end {
                    return Err(CliError::InvalidInput(format!("Invalid range: {}", token)));
                }
                ids.extend((start.get()..=end.get()).map(ItemId));
            }
            None => ids.push(parse_id(token, items)?),
        }
    }

    let mut unique = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }

    if !multi && unique.len() > 1 {
        return Err(CliError::InvalidInput(
            "Select a single item (use --multi for more)".to_string(),
        ));
    }

    Ok(unique)
}

fn parse_id(token: &str, items: &[Item]) -> Result<ItemId> {
    let value: u32 = token
        .trim()
        .parse()
        .map_err(|_| CliError::InvalidInput(format!("Not an item number: {}", token)))?;
    let id = ItemId(value);
    if !items.iter().any(|item| item.id == id) {
        return Err(CliError::InvalidInput(format!("No item {}", value)));
    }
    Ok(id)
}

/// Numbered menu on stderr with a readline prompt.
fn select_internal<'a>(
    items: &'a [Item],
    multi: bool,
    formatter: &Formatter,
) -> Result<Vec<&'a Item>> {
    let mut editor = DefaultEditor::new()
        .map_err(|e| CliError::Selector(format!("Failed to initialize editor: {}", e)))?;

    for item in items {
        eprintln!("{}", formatter.menu_line(item));
    }
    let hint = if multi {
        "Enter numbers, ranges (1-3) or 'all'; Ctrl-D to cancel"
    } else {
        "Enter a number; Ctrl-D to cancel"
    };
    eprintln!("{}", formatter.info(hint));

    let prompt = format!("{}: ", PROMPT);
    loop {
        match editor.readline(&prompt) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                match parse_selection(&line, items, multi) {
                    Ok(ids) => {
                        return Ok(items.iter().filter(|item| ids.contains(&item.id)).collect());
                    }
                    Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                debug!("Selection cancelled");
                return Ok(Vec::new());
            }
            Err(err) => {
                return Err(CliError::Selector(format!("Prompt failed: {}", err)));
            }
        }
    }
}
