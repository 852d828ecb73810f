//! Simple extraction mode
//!
//! A flat extractor that only knows numbered and bulleted lines, falling back
//! to short paragraphs when neither is present. It ignores headings and
//! nesting: every item is top level with no section.

use crate::types::{Item, ItemId, MarkerKind};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static NUMBERED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([0-9]+)[.)\s-]+\s*(.+)$").expect("static regex must compile")
});

static BULLETED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([•*+-])\s+(.+)$").expect("static regex must compile")
});

static NUMBER_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[0-9]+[.)\s-]").expect("static regex must compile"));

static BULLET_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[•*+-]").expect("static regex must compile"));

/// Shortest paragraph (exclusive, in characters) taken as an item
const MIN_PARAGRAPH_CHARS: usize = 10;

/// Longest paragraph (exclusive, in characters) taken as an item
const MAX_PARAGRAPH_CHARS: usize = 150;

/// Extract numbered items, then bulleted items, renumbered from 1
///
/// When the text has neither, short standalone lines are offered instead.
pub fn extract_simple(text: &str) -> Vec<Item> {
    let mut found = numbered_items(text);
    found.extend(bulleted_items(text));

    if found.is_empty() {
        found = paragraph_items(text);
        debug!("No list markers found, offering {} paragraphs", found.len());
    }

    found
        .into_iter()
        .zip(1u32..)
        .map(|((content, marker, marker_kind), id)| Item {
            id: ItemId(id),
            content,
            marker,
            marker_kind,
            section: None,
            level: 0,
            parent_id: None,
        })
        .collect()
}

type Found = (String, String, MarkerKind);

fn numbered_items(text: &str) -> Vec<Found> {
    text.lines()
        .filter_map(|line| NUMBERED_RE.captures(line.trim()))
        .map(|caps| (caps[2].trim().to_string(), caps[1].to_string(), MarkerKind::Number))
        .collect()
}

fn bulleted_items(text: &str) -> Vec<Found> {
    text.lines()
        .filter_map(|line| BULLETED_RE.captures(line.trim()))
        .map(|caps| (caps[2].trim().to_string(), caps[1].to_string(), MarkerKind::Bullet))
        .collect()
}

fn paragraph_items(text: &str) -> Vec<Found> {
    text.lines()
        .map(str::trim)
        .filter(|line| {
            let len = line.chars().count();
            len > MIN_PARAGRAPH_CHARS
                && len < MAX_PARAGRAPH_CHARS
                && !line.starts_with('>')
                && !NUMBER_PREFIX_RE.is_match(line)
                && !BULLET_PREFIX_RE.is_match(line)
        })
        .map(|line| (line.to_string(), String::new(), MarkerKind::Unmarked))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_then_bulleted() {
        let items = extract_simple("- bullet first\n1. numbered\n2 - dashed number\n* star");
        let contents: Vec<&str> = items.iter().map(|i| i.content.as_str()).collect();
        assert_eq!(contents, vec!["numbered", "dashed number", "bullet first", "star"]);

        let ids: Vec<u32> = items.iter().map(|i| i.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(items[0].marker, "1");
        assert_eq!(items[2].marker, "-");
        assert_eq!(items[2].marker_kind, MarkerKind::Bullet);
    }

    #[test]
    fn test_items_are_flat() {
        let items = extract_simple("# Heading\n1. One\n    a. nested");
        assert_eq!(items.len(), 1);
        assert!(items.iter().all(|i| i.level == 0 && i.section.is_none() && i.parent_id.is_none()));
    }

    #[test]
    fn test_paragraph_fallback() {
        let text = "Consider the first option here.\nshort\n> quoted text is skipped\nA second reasonable choice.";
        let items = extract_simple(text);
        let contents: Vec<&str> = items.iter().map(|i| i.content.as_str()).collect();
        assert_eq!(
            contents,
            vec!["Consider the first option here.", "A second reasonable choice."]
        );
        assert!(items.iter().all(|i| i.marker_kind == MarkerKind::Unmarked && i.marker.is_empty()));
    }

    #[test]
    fn test_paragraph_length_limits() {
        let long = "x".repeat(150);
        let exactly_ten = "abcdefghij";
        let text = format!("{}\n{}", long, exactly_ten);
        assert!(extract_simple(&text).is_empty());
    }
}
