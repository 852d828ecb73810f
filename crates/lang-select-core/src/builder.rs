//! Structure building
//!
//! Folds classified lines into items, resolving each item's section, nesting
//! level and parent as it goes.

use crate::classifier::{classify_line, Entry, Heading, LineClass};
use crate::config::ExtractorConfig;
use crate::types::{Item, ItemId, MarkerKind};
use tracing::trace;

/// Stateful fold over the lines of one input
///
/// A builder is created per extraction and consumed by [`finish`].
///
/// [`finish`]: StructureBuilder::finish
pub struct StructureBuilder<'a> {
    config: &'a ExtractorConfig,
    heading_stack: Vec<Heading>,
    items: Vec<Item>,
    next_id: ItemId,
    headings_seen: usize,
}

impl<'a> StructureBuilder<'a> {
    /// Create an empty builder
    pub fn new(config: &'a ExtractorConfig) -> Self {
        Self {
            config,
            heading_stack: Vec::new(),
            items: Vec::new(),
            next_id: ItemId::FIRST,
            headings_seen: 0,
        }
    }

    /// Feed the next input line
    pub fn push_line(&mut self, line: &str) {
        match classify_line(line) {
            LineClass::Blank => {}
            LineClass::Heading(heading) => self.open_section(heading),
            LineClass::Entry(entry) => {
                let indent = self.config.indentation(line);
                self.push_entry(entry, indent);
            }
            LineClass::Label(label) => trace!("Skipping section label {:?}", label),
            LineClass::Prose => trace!("No marker grammar matched {:?}", line.trim()),
        }
    }

    /// Title of the heading currently in force
    pub fn current_section(&self) -> Option<&str> {
        self.heading_stack.last().map(|h| h.title.as_str())
    }

    /// Items built so far
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of heading lines consumed
    pub fn headings_seen(&self) -> usize {
        self.headings_seen
    }

    /// Finish the fold and return the items in input order
    pub fn finish(self) -> Vec<Item> {
        self.items
    }

    fn open_section(&mut self, heading: Heading) {
        while self
            .heading_stack
            .last()
            .is_some_and(|open| open.depth >= heading.depth)
        {
            if let Some(closed) = self.heading_stack.pop() {
                trace!("Closing section {:?} (depth {})", closed.title, closed.depth);
            }
        }
        trace!("Opening section {:?} (depth {})", heading.title, heading.depth);
        self.heading_stack.push(heading);
        self.headings_seen += 1;
    }

    fn push_entry(&mut self, entry: Entry, indent: usize) {
        let level = self.level_for(entry.kind, indent);
        let parent_id = self.find_parent(level);
        let section = self.current_section().map(str::to_string);
        let id = self.next_id;
        self.next_id = id.next();

        self.items.push(Item {
            id,
            content: entry.content,
            marker: entry.marker,
            marker_kind: entry.kind,
            section,
            level,
            parent_id,
        });
    }

    /// Nesting level from indentation, overridden by letter and roman markers
    fn level_for(&self, kind: MarkerKind, indent: usize) -> usize {
        let by_indent = usize::from(indent >= self.config.indent_threshold);
        kind.fixed_level().unwrap_or(by_indent)
    }

    /// Most recent item exactly one level up, else the most recent shallower one
    fn find_parent(&self, level: usize) -> Option<ItemId> {
        if level == 0 {
            return None;
        }
        self.items
            .iter()
            .rev()
            .find(|item| item.level == level - 1)
            .or_else(|| self.items.iter().rev().find(|item| item.level < level))
            .map(|item| item.id)
    }
}
