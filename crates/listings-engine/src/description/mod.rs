//! # Property descriptions as typed blocks
//!
//! A description is an ordered list of [`Block`]s persisted as a JSON array
//! in a single string field of a property. Each block carries an immutable
//! [`BlockId`] and one of six variants (Text, Button, Table, Image, Spacer,
//! Divider). Order is render order and there is no nesting.
//!
//! The data flows one way around a loop:
//!
//! ```text
//! persisted string --parse--> Description --editor--> Description --serialize--> persisted string
//!                                  |
//!                                  +--render--> RenderNode tree (editor canvas, public page)
//! ```
//!
//! - **`model`**: block variants, field enums and defaults
//! - **`parse`**: lenient parser that never fails and backfills defaults
//! - **`validate`**: strict check used for hand-edited raw JSON
//! - **`serialize`**: canonical JSON output

pub mod error;
pub mod model;
pub mod parse;
pub mod serialize;
pub mod validate;

use std::ops::Deref;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

pub use error::DescriptionError;
pub use model::{
    Block, BlockId, BlockKind, BlockType, ButtonBlock, ButtonSize, ButtonVariant, ImageBlock,
    SpacerBlock, SpacerSize, TableBlock, TextAlign, TextBlock, TextColor, TextSize, TextStyle,
    UnknownBlockType,
};
pub use parse::{normalize_value, parse_description};
pub use serialize::{serialize_description, serialize_description_pretty};
pub use validate::validate_raw;

static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static BLOCK_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>|</p>|</div>|</li>").unwrap());

/// Ordered sequence of blocks with unique ids
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Description {
    blocks: Vec<Block>,
}

impl Description {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from blocks the caller guarantees have unique ids
    pub(crate) fn from_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Parse a persisted value, wrapping legacy plain text or HTML as a
    /// single default Text block instead of discarding it.
    ///
    /// Used when a property is first opened for editing. Only a JSON array
    /// goes through [`parse_description`]; a JSON string is unwrapped and any
    /// other non-empty value is kept as text.
    pub fn from_legacy(raw: &str) -> Self {
        let trimmed = raw.trim();
        let text = match serde_json::from_str::<Value>(trimmed) {
            Ok(Value::Array(_)) => return parse_description(raw),
            Ok(Value::Null) => return Self::default(),
            Ok(Value::String(s)) => legacy_text(&s),
            _ => legacy_text(trimmed),
        };
        if text.is_empty() {
            return Self::default();
        }
        log::info!("Wrapping legacy description text as a single Text block");
        Self::from_blocks(vec![Block::new(BlockKind::Text(TextBlock::new(text)))])
    }

    pub fn as_slice(&self) -> &[Block] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    /// Index of the block with this id
    pub fn position(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| &b.id == id)
    }

    pub fn get(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| &b.id == id)
    }

    pub fn contains(&self, id: &BlockId) -> bool {
        self.position(id).is_some()
    }

    pub fn to_json(&self) -> Result<String, DescriptionError> {
        serialize_description(&self.blocks)
    }

    pub(crate) fn blocks_mut(&mut self) -> &mut Vec<Block> {
        &mut self.blocks
    }
}

impl Deref for Description {
    type Target = [Block];

    fn deref(&self) -> &Self::Target {
        &self.blocks
    }
}

/// Strip markup from a legacy description, keeping paragraph breaks
fn legacy_text(raw: &str) -> String {
    let with_breaks = BLOCK_BREAK.replace_all(raw, "\n");
    let stripped = HTML_TAG.replace_all(&with_breaks, "");
    let decoded = html_escape::decode_html_entities(&stripped);
    decoded
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn only_text(description: &Description) -> &str {
        assert_eq!(description.len(), 1);
        let BlockKind::Text(text) = &description[0].kind else {
            panic!("expected a text block");
        };
        &text.text
    }

    #[test]
    fn test_legacy_html_wrapped_as_text_block() {
        let description = Description::from_legacy("<p>legacy html</p>");
        assert_eq!(only_text(&description), "legacy html");
    }

    #[test]
    fn test_legacy_paragraphs_keep_line_breaks() {
        let description =
            Description::from_legacy("<p>Three bedrooms</p><p>Garden &amp; garage</p>");
        assert_eq!(only_text(&description), "Three bedrooms\nGarden & garage");
    }

    #[test]
    fn test_legacy_plain_text_wrapped_with_defaults() {
        let description = Description::from_legacy("Charming cottage near the river");
        let BlockKind::Text(text) = &description[0].kind else {
            panic!("expected a text block");
        };
        assert_eq!(text, &TextBlock::new("Charming cottage near the river"));
    }

    #[test]
    fn test_legacy_json_goes_through_parser() {
        let description = Description::from_legacy(r#"[{"id":"a","type":"Divider"}]"#);
        assert_eq!(description.as_slice(), &[Block::with_id("a", BlockKind::Divider)]);
    }

    #[rstest]
    #[case::number("42", "42")]
    #[case::json_string(r#""Lovely flat""#, "Lovely flat")]
    #[case::json_string_with_markup(r#""<p>Sea views</p>""#, "Sea views")]
    #[case::object(r#"{"text":"x"}"#, r#"{"text":"x"}"#)]
    fn test_legacy_non_array_json_kept_as_text(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(only_text(&Description::from_legacy(raw)), expected);
    }

    #[test]
    fn test_legacy_null_is_empty() {
        assert!(Description::from_legacy("null").is_empty());
    }

    #[test]
    fn test_legacy_empty_and_markup_only() {
        assert!(Description::from_legacy("").is_empty());
        assert!(Description::from_legacy("<p> </p>").is_empty());
    }

    #[test]
    fn test_position_and_get_by_id() {
        let description = parse_description(
            r#"[{"id":"a","type":"Divider"},{"id":"b","type":"Spacer"}]"#,
        );
        let b = BlockId::from("b");
        assert_eq!(description.position(&b), Some(1));
        assert_eq!(description.get(&b).map(Block::block_type), Some(BlockType::Spacer));
        assert!(!description.contains(&BlockId::from("zzz")));
    }
}
