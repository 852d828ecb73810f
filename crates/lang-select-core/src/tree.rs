//! Navigating the implicit item tree formed by `parent_id` links

use crate::types::{Item, ItemId};

/// Look up an item by id
pub fn find(items: &[Item], id: ItemId) -> Option<&Item> {
    items.iter().find(|item| item.id == id)
}

/// Items without a parent, in input order
pub fn roots(items: &[Item]) -> Vec<&Item> {
    items.iter().filter(|item| item.parent_id.is_none()).collect()
}

/// Direct children of an item, in input order
///
/// Accepts any run of items, so a caller holding a subset (one section, say)
/// only sees children inside it.
pub fn children_of<'a, I>(items: I, id: ItemId) -> Vec<&'a Item>
where
    I: IntoIterator<Item = &'a Item>,
{
    items
        .into_iter()
        .filter(|item| item.parent_id == Some(id))
        .collect()
}

/// An item followed by all of its descendants, depth first
///
/// Empty when `id` is unknown.
pub fn subtree(items: &[Item], id: ItemId) -> Vec<&Item> {
    let mut out = Vec::new();
    let Some(root) = find(items, id) else {
        return out;
    };

    let mut stack = vec![root];
    while let Some(item) = stack.pop() {
        out.push(item);
        // reversed so the earliest child is visited first
        stack.extend(children_of(items, item.id).into_iter().rev());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract_items;

    const OUTLINE: &str = "1. Top\n  a. Mid\n    i. Deep\n  b. Mid two\n2. Next";

    fn contents<'a>(items: &[&'a Item]) -> Vec<&'a str> {
        items.iter().map(|i| i.content.as_str()).collect()
    }

    #[test]
    fn test_roots_and_children() {
        let items = extract_items(OUTLINE);
        assert_eq!(contents(&roots(&items)), vec!["Top", "Next"]);
        assert_eq!(contents(&children_of(&items, ItemId(1))), vec!["Mid", "Mid two"]);
        assert!(children_of(&items, ItemId(5)).is_empty());
    }

    #[test]
    fn test_children_within_a_subset() {
        let items = extract_items(OUTLINE);
        let subset: Vec<&Item> = items.iter().filter(|i| i.content != "Mid two").collect();
        assert_eq!(contents(&children_of(subset.iter().copied(), ItemId(1))), vec!["Mid"]);
    }

    #[test]
    fn test_subtree_is_preorder() {
        let items = extract_items(OUTLINE);
        assert_eq!(
            contents(&subtree(&items, ItemId(1))),
            vec!["Top", "Mid", "Deep", "Mid two"]
        );
        assert_eq!(contents(&subtree(&items, ItemId(3))), vec!["Deep"]);
    }

    #[test]
    fn test_unknown_id() {
        let items = extract_items(OUTLINE);
        assert!(find(&items, ItemId(99)).is_none());
        assert!(subtree(&items, ItemId(99)).is_empty());
    }
}
