//! Line classification
//!
//! Decides what a single line of text is: a section heading, a list entry
//! (with its marker split off), a section-style label, or plain prose.
//! Entry grammars are tried in a fixed order and the first match wins.

use crate::types::MarkerKind;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    // One to six hashes, whitespace, then a title
    Regex::new(r"^\s*(#{1,6})\s+(.+)$").expect("static regex must compile")
});

static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([0-9]+)([.)]|\s)\s*(.+)$").expect("static regex must compile")
});

static ROMAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(xii|xi|x|ix|viii|vii|vi|v|iv|iii|ii|i|XII|XI|X|IX|VIII|VII|VI|V|IV|III|II|I)([.)]|\s)\s*(.+)$",
    )
    .expect("static regex must compile")
});

static LETTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([a-zA-Z])([.)]|\s)\s*(.+)$").expect("static regex must compile")
});

static BULLET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([*+•-])\s+(.+)$").expect("static regex must compile")
});

static PAREN_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\(([0-9]+)\)\s+(.+)$").expect("static regex must compile")
});

static KEY_VALUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([^:]+):\s+(.+)$").expect("static regex must compile")
});

static SYMBOL_LEAD_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Emoji or arrow bullets: one non-word character, whitespace, content
    Regex::new(r"^[^\w\s]\s+.+$").expect("static regex must compile")
});

static PUNCTUATION_ONLY_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Unicode punctuation plus the ASCII symbols used for rules (`+++`, `===`)
    Regex::new(r"^[\p{P}[:punct:]\s]+$").expect("static regex must compile")
});

/// A markdown-style section heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Number of `#` characters (1-6)
    pub depth: u8,
    /// Heading text, trimmed
    pub title: String,
}

/// A line recognised as a selectable entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Text after the marker, trimmed
    pub content: String,
    /// Marker as written, empty for key-value and unmarked entries
    pub marker: String,
    /// Grammar that matched
    pub kind: MarkerKind,
}

impl Entry {
    fn new(content: &str, marker: impl Into<String>, kind: MarkerKind) -> Self {
        Self {
            content: content.trim().to_string(),
            marker: marker.into(),
            kind,
        }
    }
}

/// Classification of one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// Empty or whitespace-only
    Blank,
    /// `#`-style heading; opens a section
    Heading(Heading),
    /// Selectable entry
    Entry(Entry),
    /// Section-style label such as `Features to implement:`
    Label(String),
    /// Anything else
    Prose,
}

/// Classify a single line (without its trailing newline)
pub fn classify_line(line: &str) -> LineClass {
    let line = line.trim_end();
    if line.trim_start().is_empty() {
        return LineClass::Blank;
    }

    if let Some(heading) = parse_heading(line) {
        return LineClass::Heading(heading);
    }

    if let Some(entry) = classify_entry(line) {
        return LineClass::Entry(entry);
    }

    if is_section_label(line) {
        return LineClass::Label(line.trim().trim_end_matches(':').trim_end().to_string());
    }

    LineClass::Prose
}

/// Parse a `#`-style heading line
pub fn parse_heading(line: &str) -> Option<Heading> {
    let caps = HEADING_RE.captures(line.trim_end())?;
    let title = caps[2].trim();
    if title.is_empty() {
        return None;
    }
    Some(Heading {
        depth: caps[1].len() as u8,
        title: title.to_string(),
    })
}

/// Match a line against the entry grammars, in precedence order
///
/// Roman numerals are tried before single letters so that `i.`, `v.` and
/// `x.` are read as numerals rather than outline letters.
pub fn classify_entry(line: &str) -> Option<Entry> {
    let line = line.trim_end();

    if let Some(caps) = NUMBER_RE.captures(line) {
        return Some(delimited_entry(&caps, MarkerKind::Number));
    }

    if let Some(caps) = ROMAN_RE.captures(line) {
        return Some(delimited_entry(&caps, MarkerKind::Roman));
    }

    if let Some(caps) = LETTER_RE.captures(line) {
        return Some(delimited_entry(&caps, MarkerKind::Letter));
    }

    if let Some(caps) = BULLET_RE.captures(line) {
        return Some(Entry::new(&caps[2], &caps[1], MarkerKind::Bullet));
    }

    if let Some(caps) = PAREN_NUMBER_RE.captures(line) {
        return Some(Entry::new(&caps[2], &caps[1], MarkerKind::ParenthesizedNumber));
    }

    // Labels are never items, whatever the later grammars would say
    if is_section_label(line) {
        return None;
    }

    if let Some(caps) = KEY_VALUE_RE.captures(line) {
        let content = format!("{}: {}", &caps[1], caps[2].trim());
        return Some(Entry::new(&content, "", MarkerKind::KeyValue));
    }

    if resembles_list_item(line) {
        return Some(Entry::new(line, "", MarkerKind::Unmarked));
    }

    None
}

/// Build an entry whose marker keeps the delimiter that followed it
///
/// `caps` holds (marker, delimiter, content). A whitespace delimiter leaves
/// the bare marker.
fn delimited_entry(caps: &Captures<'_>, kind: MarkerKind) -> Entry {
    let marker = match &caps[2] {
        delim @ ("." | ")") => format!("{}{}", &caps[1], delim),
        _ => caps[1].to_string(),
    };
    Entry::new(&caps[3], marker, kind)
}

/// Whether a line ends in `:` with nothing after its first colon
pub fn is_section_label(line: &str) -> bool {
    let stripped = line.trim();
    if !stripped.ends_with(':') {
        return false;
    }
    match stripped.split_once(':') {
        Some((_, rest)) => rest.trim().is_empty(),
        None => false,
    }
}

/// Whether a line looks like a list item despite matching no marker grammar
///
/// Lines made only of punctuation (rules like `---`, a lone `*`) never
/// qualify. Emoji and other symbols count as content.
fn resembles_list_item(line: &str) -> bool {
    let stripped = line.trim();
    if PUNCTUATION_ONLY_RE.is_match(stripped) {
        return false;
    }
    SYMBOL_LEAD_RE.is_match(stripped) || stripped.starts_with('-') || stripped.starts_with('*')
}
