//! Output formatting for the CLI.

use crate::config::View;
use crate::error::Result;
use colored::*;
use lang_select_core::tree::children_of;
use lang_select_core::{group_by_section, Item, SectionGroup};
use regex::{Captures, Regex};
use serde_json::json;
use std::sync::LazyLock;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("static regex must compile"));

static ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.*?)\*").expect("static regex must compile"));

/// Bullet and color per tree depth; deeper levels reuse the last entry.
const TREE_BULLETS: [(&str, Color); 5] = [
    ("•", Color::Cyan),
    ("◦", Color::Blue),
    ("‣", Color::Green),
    ("▪", Color::Magenta),
    ("▫", Color::Yellow),
];

const INDENT: &str = "  ";

/// Output formatter.
pub struct Formatter {
    view: View,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(view: View, color_enabled: bool) -> Self {
        Self {
            view,
            color_enabled,
        }
    }

    /// Render items in the configured view.
    pub fn format_items(&self, items: &[Item]) -> String {
        match self.view {
            View::Flat => self.format_flat(items),
            View::Hierarchy => self.format_sections(items, |f, members, out| {
                for root in section_roots(members) {
                    f.push_tree(root, 0, members, out);
                }
            }),
            View::Mixed => self.format_sections(items, |f, members, out| {
                for (idx, root) in section_roots(members).into_iter().enumerate() {
                    let number = f.emphasize(&format!("{}.", idx + 1), Color::Green);
                    out.push(format!("{} {}", number, f.style_markdown(&root.content)));
                    f.push_bulleted_children(root, 1, members, out);
                }
            }),
            View::Table => self.format_table(items),
        }
    }

    /// Render items as the JSON array of item records.
    pub fn format_items_json(&self, items: &[Item]) -> Result<String> {
        Ok(serde_json::to_string_pretty(items)?)
    }

    /// Selected contents, one per line.
    pub fn format_selection(&self, selected: &[&Item]) -> String {
        selected
            .iter()
            .map(|item| item.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Selection wrapped in a success envelope.
    ///
    /// Single-select mode reports one item object, multi-select an array.
    pub fn format_selection_json(&self, selected: &[&Item], multi: bool) -> Result<String> {
        let value = if multi {
            json!({ "success": true, "selected": selected })
        } else {
            json!({ "success": true, "selected": selected.first() })
        };
        Ok(serde_json::to_string(&value)?)
    }

    /// One line of the internal selector's menu.
    pub fn menu_line(&self, item: &Item) -> String {
        let id = self.colorize(&format!("{:>3}.", item.id.get()), Color::Green);
        format!(
            "{}{} {}",
            INDENT.repeat(item.level),
            id,
            self.style_markdown(&item.content)
        )
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), Color::Red)
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), Color::Blue)
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), Color::Yellow)
    }

    fn format_flat(&self, items: &[Item]) -> String {
        items
            .iter()
            .map(|item| {
                let bullet = self.colorize("•", Color::Cyan);
                let text = self.style_markdown(&item.content);
                match &item.section {
                    Some(section) => {
                        let prefix = self.emphasize(&format!("[{}]", section), Color::Blue);
                        format!("{} {} {}", prefix, bullet, text)
                    }
                    None => format!("{} {}", bullet, text),
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Unsectioned items first, then each section under its header.
    fn format_sections<F>(&self, items: &[Item], render: F) -> String
    where
        F: Fn(&Self, &[&Item], &mut Vec<String>),
    {
        let groups = group_by_section(items);
        let (unsectioned, named): (Vec<SectionGroup<'_>>, Vec<SectionGroup<'_>>) =
            groups.into_iter().partition(|group| group.name.is_none());

        let mut out = Vec::new();
        for group in unsectioned.iter().chain(named.iter()) {
            if let Some(name) = group.name {
                out.push(self.emphasize(&format!("━━━ {} ━━━", name), Color::Blue));
            }
            render(self, &group.items, &mut out);
        }
        out.join("\n")
    }

    fn push_tree(&self, item: &Item, depth: usize, members: &[&Item], out: &mut Vec<String>) {
        let (bullet, color) = TREE_BULLETS[depth.min(TREE_BULLETS.len() - 1)];
        out.push(format!(
            "{}{} {}",
            INDENT.repeat(depth),
            self.colorize(bullet, color),
            self.style_markdown(&item.content)
        ));
        for child in children_of(members.iter().copied(), item.id) {
            self.push_tree(child, depth + 1, members, out);
        }
    }

    fn push_bulleted_children(
        &self,
        parent: &Item,
        depth: usize,
        members: &[&Item],
        out: &mut Vec<String>,
    ) {
        let color = if depth % 2 == 1 { Color::Cyan } else { Color::Blue };
        for child in children_of(members.iter().copied(), parent.id) {
            out.push(format!(
                "{}{} {}",
                INDENT.repeat(depth),
                self.colorize("•", color),
                self.style_markdown(&child.content)
            ));
            self.push_bulleted_children(child, depth + 1, members, out);
        }
    }

    fn format_table(&self, items: &[Item]) -> String {
        if items.is_empty() {
            return self.colorize("No items found.", Color::Yellow);
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Marker", "Kind", "Level", "Parent", "Section", "Content"]);

        for item in items {
            let parent = item
                .parent_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string());
            builder.push_record([
                item.id.to_string(),
                item.prefix(),
                item.marker_kind.to_string(),
                item.level.to_string(),
                parent,
                item.section.clone().unwrap_or_else(|| "-".to_string()),
                item.content.clone(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Render `**bold**` and `*italic*` spans; plain text when color is off.
    fn style_markdown(&self, text: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }
        let bolded = BOLD_RE.replace_all(text, |caps: &Captures<'_>| caps[1].bold().to_string());
        ITALIC_RE
            .replace_all(&bolded, |caps: &Captures<'_>| caps[1].italic().to_string())
            .into_owned()
    }

    fn emphasize(&self, text: &str, color: Color) -> String {
        if !self.color_enabled {
            return text.to_string();
        }
        text.color(color).bold().to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: Color) -> String {
        if !self.color_enabled {
            return text.to_string();
        }
        text.color(color).to_string()
    }
}

/// Items whose parent is absent or belongs to another section.
fn section_roots<'a>(members: &[&'a Item]) -> Vec<&'a Item> {
    members
        .iter()
        .copied()
        .filter(|item| match item.parent_id {
            Some(parent) => !members.iter().any(|m| m.id == parent),
            None => true,
        })
        .collect()
}

/// Failure envelope printed in `--json` mode.
pub fn failure_json(message: &str) -> String {
    json!({ "success": false, "error": message }).to_string()
}
