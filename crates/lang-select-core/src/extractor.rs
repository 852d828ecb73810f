//! Core Extractor implementation

use crate::builder::StructureBuilder;
use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::types::Item;
use tracing::debug;

/// The Extractor turns free-form text into structured, selectable items
///
/// Extraction is a pure single pass over the input: the same text always
/// yields the same items, and no state survives between calls.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    /// Create a new Extractor, validating its configuration
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract items from text
    ///
    /// Lines matching no grammar are dropped; an empty result means the text
    /// has nothing selectable.
    pub fn extract(&self, text: &str) -> Vec<Item> {
        let mut builder = StructureBuilder::new(&self.config);
        let mut line_count = 0usize;

        for line in text.lines() {
            builder.push_line(line);
            line_count += 1;
        }

        let headings = builder.headings_seen();
        let items = builder.finish();

        debug!(
            "Extracted {} items from {} lines ({} headings)",
            items.len(),
            line_count,
            headings
        );

        items
    }
}

/// Extract items from text with the default configuration
pub fn extract_items(text: &str) -> Vec<Item> {
    Extractor::default().extract(text)
}
