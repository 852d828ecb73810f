//! Property tests over whole extractions

use lang_select_core::{classify_entry, extract_items, Item, MarkerKind};
use proptest::prelude::*;

const FRAGMENTS: &[&str] = &[
    "1. Numbered",
    "2) Closed number",
    "10 Bare number",
    "a. Letter",
    "B) Upper letter",
    "i. Numeral",
    "iv) Fourth numeral",
    "- Dash",
    "* Star",
    "+ Plus",
    "• Dot",
    "(3) Parenthesized",
    "Name: value",
    "→ Arrow led",
    "Features:",
    "# Heading one",
    "## Heading two",
    "### Heading three",
    "Plain prose sentence.",
    "---",
    "",
];

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec((0usize..9, prop::sample::select(FRAGMENTS)), 0..40).prop_map(|lines| {
        lines
            .into_iter()
            .map(|(indent, fragment)| format!("{}{}", " ".repeat(indent), fragment))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

fn check_structure(items: &[Item]) -> Result<(), TestCaseError> {
    for (idx, item) in items.iter().enumerate() {
        prop_assert_eq!(item.id.get() as usize, idx + 1);
        if item.level == 0 {
            prop_assert!(item.parent_id.is_none());
        }
        if let Some(parent) = item.parent_id {
            prop_assert!(parent < item.id);
            let parent_item = &items[parent.get() as usize - 1];
            prop_assert!(parent_item.level < item.level);
        }
        prop_assert!(!item.content.is_empty());
        prop_assert_eq!(item.content.trim(), item.content.as_str());
    }
    Ok(())
}

/// Marker text and kind for a line rebuilt from scratch
fn marker() -> impl Strategy<Value = (String, MarkerKind)> {
    let delim = prop::sample::select(vec![".", ")", ""]);
    prop_oneof![
        (1u32..500, delim.clone()).prop_map(|(n, d)| (format!("{}{}", n, d), MarkerKind::Number)),
        (prop::sample::select(vec!["a", "b", "c", "d", "k", "A", "F", "L", "Z"]), delim.clone())
            .prop_map(|(l, d)| (format!("{}{}", l, d), MarkerKind::Letter)),
        (prop::sample::select(vec!["i", "ii", "iv", "vi", "ix", "xii", "III", "VII", "X"]), delim)
            .prop_map(|(r, d)| (format!("{}{}", r, d), MarkerKind::Roman)),
        prop::sample::select(vec!["*", "-", "+", "•"])
            .prop_map(|b| (b.to_string(), MarkerKind::Bullet)),
        (1u32..500).prop_map(|n| (n.to_string(), MarkerKind::ParenthesizedNumber)),
    ]
}

proptest! {
    /// Ids are contiguous and parents always precede their children
    #[test]
    fn test_ids_and_parents_are_well_formed(text in document()) {
        let items = extract_items(&text);
        check_structure(&items)?;
    }

    /// Arbitrary text never panics and still yields well-formed items
    #[test]
    fn test_arbitrary_text(text in "\\PC{0,200}") {
        let items = extract_items(&text);
        check_structure(&items)?;
    }

    /// The same input always yields the same items
    #[test]
    fn test_extraction_is_deterministic(text in document()) {
        prop_assert_eq!(extract_items(&text), extract_items(&text));
    }

    /// Top-level items never carry a parent, whatever the indentation
    #[test]
    fn test_unindented_numbers_are_roots(count in 1usize..20) {
        let text = (1..=count)
            .map(|n| format!("{}. Step {}", n, n))
            .collect::<Vec<_>>()
            .join("\n");
        let items = extract_items(&text);
        prop_assert_eq!(items.len(), count);
        prop_assert!(items.iter().all(|i| i.is_top_level() && i.parent_id.is_none()));
    }

    /// Writing an item back as `prefix content` classifies to the same entry
    #[test]
    fn test_rebuilt_line_classifies_the_same(
        (marker, kind) in marker(),
        content in "[a-zA-Z0-9]([a-zA-Z0-9 ,.]{0,20}[a-zA-Z0-9])?",
    ) {
        let item_line = match kind {
            MarkerKind::ParenthesizedNumber => format!("({}) {}", marker, content),
            _ => format!("{} {}", marker, content),
        };
        let items = extract_items(&item_line);
        prop_assert_eq!(items.len(), 1);

        let item = &items[0];
        prop_assert_eq!(&item.marker, &marker);
        prop_assert_eq!(item.marker_kind, kind);
        prop_assert_eq!(&item.content, &content);

        let rebuilt = format!("{} {}", item.prefix(), item.content);
        let entry = classify_entry(&rebuilt);
        prop_assert!(entry.is_some());
        let entry = entry.unwrap();
        prop_assert_eq!(entry.marker, item.marker.clone());
        prop_assert_eq!(entry.kind, item.marker_kind);
        prop_assert_eq!(entry.content, item.content.clone());
    }
}
