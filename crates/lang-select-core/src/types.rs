//! Item types produced by extraction

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an extracted item
///
/// Ids are 1-based and assigned in input order, so a smaller id always means
/// an earlier line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl ItemId {
    /// The first id handed out by an extraction
    pub const FIRST: ItemId = ItemId(1);

    /// Get the numeric value
    pub fn get(self) -> u32 {
        self.0
    }

    /// The id that follows this one
    pub fn next(self) -> ItemId {
        ItemId(self.0 + 1)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Marker grammar that matched an item line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerKind {
    /// Arabic number (`1.`, `2)`, `3`)
    Number,
    /// Single Latin letter (`a.`, `B)`)
    Letter,
    /// Roman numeral from i to xii in either case (`iv.`, `X)`)
    Roman,
    /// Bullet character (`*`, `-`, `+`, `•`)
    Bullet,
    /// Number in parentheses (`(1)`)
    ParenthesizedNumber,
    /// `key: value` pair
    KeyValue,
    /// List-like line without a recognised marker
    Unmarked,
}

impl MarkerKind {
    /// Every kind, in classification precedence order
    pub const ALL: [MarkerKind; 7] = [
        MarkerKind::Number,
        MarkerKind::Letter,
        MarkerKind::Roman,
        MarkerKind::Bullet,
        MarkerKind::ParenthesizedNumber,
        MarkerKind::KeyValue,
        MarkerKind::Unmarked,
    ];

    /// Get the kind name as used in JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerKind::Number => "number",
            MarkerKind::Letter => "letter",
            MarkerKind::Roman => "roman",
            MarkerKind::Bullet => "bullet",
            MarkerKind::ParenthesizedNumber => "parenthesizedNumber",
            MarkerKind::KeyValue => "keyValue",
            MarkerKind::Unmarked => "unmarked",
        }
    }

    /// Parse a kind from its JSON name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
    }

    /// Level implied by the marker itself, regardless of indentation
    ///
    /// Outline convention is `1.` → `a.` → `i.`, so letters always sit at
    /// level 1 and roman numerals at level 2.
    pub fn fixed_level(&self) -> Option<usize> {
        match self {
            MarkerKind::Letter => Some(1),
            MarkerKind::Roman => Some(2),
            _ => None,
        }
    }
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MarkerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid marker kind: {}", s))
    }
}

/// One extracted selectable unit
///
/// Serializes to the interchange shape
/// `{id, content, marker, markerKind, section, level, parentId}` with `null`
/// for absent optional fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Sequential id, unique within one extraction
    pub id: ItemId,

    /// Item text with its marker stripped
    pub content: String,

    /// Marker text as written (`"1."`, `"a)"`, `"•"`), empty when unmarked
    pub marker: String,

    /// Grammar that matched the marker
    pub marker_kind: MarkerKind,

    /// Title of the most recent heading in force when the item was parsed
    pub section: Option<String>,

    /// Nesting depth, 0 for top level
    pub level: usize,

    /// Nearest preceding item one level up
    pub parent_id: Option<ItemId>,
}

impl Item {
    /// Whether the item sits at the top level
    pub fn is_top_level(&self) -> bool {
        self.level == 0
    }

    /// Whether the item carried an explicit marker
    pub fn has_marker(&self) -> bool {
        !self.marker.is_empty()
    }

    /// Marker as it would be written back in front of the content
    ///
    /// Parenthesized numbers store only their digits, so the parentheses are
    /// restored here.
    pub fn prefix(&self) -> String {
        match self.marker_kind {
            MarkerKind::ParenthesizedNumber => format!("({})", self.marker),
            _ => self.marker.clone(),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.id, self.content)
    }
}
