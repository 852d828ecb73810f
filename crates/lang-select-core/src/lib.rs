//! Lang Select Core
//!
//! Extracts selectable items from free-form text, typically language-model
//! output, and recovers the outline structure around them.
//!
//! # Overview
//!
//! Model responses are full of lists: numbered steps, lettered sub-points,
//! bullets, `key: value` pairs, all loosely formatted and nested under
//! markdown headings. The extractor walks such text once, line by line, and
//! produces an ordered list of [`Item`]s, each carrying its marker, the
//! heading it appeared under, its nesting level and a link to its parent.
//!
//! # Architecture
//!
//! ```text
//! Text → classify_line (per line) → StructureBuilder (fold) → Vec<Item>
//! ```
//!
//! - **Line classifier**: matches one line against the marker grammars
//!   (number, roman, letter, bullet, parenthesized number, key-value,
//!   unmarked) and against `#` headings.
//! - **Structure builder**: keeps the heading stack, assigns ids, and infers
//!   level and parent from marker kind and indentation.
//!
//! Downstream views ([`sections`], [`tree`]) are projections over the
//! returned items.
//!
//! # Example Usage
//!
//! ```
//! use lang_select_core::{extract_items, ItemId, MarkerKind};
//!
//! let items = extract_items("# Plan\n1. Top\n  a. Mid\n    i. Deep");
//!
//! assert_eq!(items.len(), 3);
//! assert_eq!(items[2].marker_kind, MarkerKind::Roman);
//! assert_eq!(items[2].level, 2);
//! assert_eq!(items[2].parent_id, Some(ItemId(2)));
//! assert_eq!(items[0].section.as_deref(), Some("Plan"));
//! ```

#![warn(missing_docs)]

mod builder;
mod classifier;
mod config;
mod error;
mod extractor;
mod types;

pub mod sections;
pub mod simple;
pub mod tree;


pub use builder::StructureBuilder;
pub use classifier::{classify_entry, classify_line, parse_heading, Entry, Heading, LineClass};
pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::{extract_items, Extractor};
pub use sections::{group_by_section, SectionGroup, UNSECTIONED};
pub use simple::extract_simple;
pub use types::{Item, ItemId, MarkerKind};
