//! Grouping items by section
//!
//! A pure projection over an extraction result; nothing here feeds back into
//! the extractor.

use crate::types::Item;
use std::collections::BTreeMap;

/// Display name used for items extracted before any heading
pub const UNSECTIONED: &str = "Unsectioned";

/// Items that share one section, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionGroup<'a> {
    /// Section title, `None` for items outside any section
    pub name: Option<&'a str>,
    /// Members of the section
    pub items: Vec<&'a Item>,
}

impl SectionGroup<'_> {
    /// Title to show for the group
    pub fn display_name(&self) -> &str {
        self.name.unwrap_or(UNSECTIONED)
    }
}

/// Group items by section in order of first appearance
///
/// A section title that reappears later (after another heading) joins its
/// earlier group rather than starting a new one.
pub fn group_by_section(items: &[Item]) -> Vec<SectionGroup<'_>> {
    let mut groups: Vec<SectionGroup<'_>> = Vec::new();

    for item in items {
        let name = item.section.as_deref();
        match groups.iter_mut().find(|group| group.name == name) {
            Some(group) => group.items.push(item),
            None => groups.push(SectionGroup {
                name,
                items: vec![item],
            }),
        }
    }

    groups
}

/// Map from section name (or [`UNSECTIONED`]) to its items
pub fn section_map(items: &[Item]) -> BTreeMap<String, Vec<&Item>> {
    let mut map: BTreeMap<String, Vec<&Item>> = BTreeMap::new();
    for item in items {
        let key = item.section.as_deref().unwrap_or(UNSECTIONED);
        map.entry(key.to_string()).or_default().push(item);
    }
    map
}
