use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Stable identity of a block within a description.
///
/// Ids are opaque strings. Freshly created blocks get a UUID v4, but ids loaded
/// from persisted data are kept verbatim whatever their shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    /// Generate a new globally unique id
    pub fn fresh() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for BlockId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// The closed set of block variants, as named by the persisted `type` tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Text,
    Button,
    Table,
    Image,
    Spacer,
    Divider,
}

impl BlockType {
    /// Palette order used by the builder UI
    pub const ALL: [BlockType; 6] = [
        BlockType::Text,
        BlockType::Button,
        BlockType::Table,
        BlockType::Image,
        BlockType::Spacer,
        BlockType::Divider,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BlockType::Text => "Text",
            BlockType::Button => "Button",
            BlockType::Table => "Table",
            BlockType::Image => "Image",
            BlockType::Spacer => "Spacer",
            BlockType::Divider => "Divider",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown block type: {0}")]
pub struct UnknownBlockType(pub String);

impl FromStr for BlockType {
    type Err = UnknownBlockType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownBlockType(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    #[default]
    Default,
    Primary,
    Muted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextStyle {
    Bold,
    Italic,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Default,
    Destructive,
    Outline,
    Secondary,
    Ghost,
    Link,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    Icon,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacerSize {
    Sm,
    #[default]
    Md,
    Lg,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    #[serde(default, deserialize_with = "lenient")]
    pub text: String,
    #[serde(default, deserialize_with = "lenient")]
    pub size: TextSize,
    #[serde(default, deserialize_with = "lenient")]
    pub align: TextAlign,
    #[serde(default, deserialize_with = "lenient")]
    pub color: TextColor,
    #[serde(default, deserialize_with = "style_set")]
    pub style: BTreeSet<TextStyle>,
}

impl TextBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ButtonBlock {
    #[serde(default, deserialize_with = "lenient")]
    pub text: String,
    #[serde(default, deserialize_with = "lenient")]
    pub href: String,
    #[serde(default, deserialize_with = "lenient")]
    pub variant: ButtonVariant,
    #[serde(default, deserialize_with = "lenient")]
    pub size: ButtonSize,
}

/// A simple grid. Each row is expected to match `headers` in length, but
/// nothing enforces it; the renderer copes with drift.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableBlock {
    #[serde(default, deserialize_with = "string_list")]
    pub headers: Vec<String>,
    #[serde(default, deserialize_with = "string_grid")]
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageBlock {
    #[serde(default, deserialize_with = "lenient")]
    pub src: String,
    #[serde(default, deserialize_with = "lenient")]
    pub alt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpacerBlock {
    #[serde(default, deserialize_with = "lenient")]
    pub size: SpacerSize,
}

/// Variant payload of a block, tagged by `type` in the persisted form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BlockKind {
    Text(TextBlock),
    Button(ButtonBlock),
    Table(TableBlock),
    Image(ImageBlock),
    Spacer(SpacerBlock),
    Divider,
}

impl BlockKind {
    pub fn block_type(&self) -> BlockType {
        match self {
            BlockKind::Text(_) => BlockType::Text,
            BlockKind::Button(_) => BlockType::Button,
            BlockKind::Table(_) => BlockType::Table,
            BlockKind::Image(_) => BlockType::Image,
            BlockKind::Spacer(_) => BlockType::Spacer,
            BlockKind::Divider => BlockType::Divider,
        }
    }

    /// Field defaults applied when persisted data omits them
    pub fn defaults(block_type: BlockType) -> Self {
        match block_type {
            BlockType::Text => BlockKind::Text(TextBlock::default()),
            BlockType::Button => BlockKind::Button(ButtonBlock::default()),
            BlockType::Table => BlockKind::Table(TableBlock::default()),
            BlockType::Image => BlockKind::Image(ImageBlock::default()),
            BlockType::Spacer => BlockKind::Spacer(SpacerBlock::default()),
            BlockType::Divider => BlockKind::Divider,
        }
    }

    /// Starter content for a block dropped in from the builder palette
    pub fn template(block_type: BlockType) -> Self {
        match block_type {
            BlockType::Text => BlockKind::Text(TextBlock::new("Enter your text here")),
            BlockType::Button => BlockKind::Button(ButtonBlock {
                text: "Contact agent".to_string(),
                href: "#enquiry".to_string(),
                ..ButtonBlock::default()
            }),
            BlockType::Table => BlockKind::Table(TableBlock {
                headers: vec!["Feature".to_string(), "Value".to_string()],
                rows: vec![
                    vec!["Bedrooms".to_string(), "3".to_string()],
                    vec!["Bathrooms".to_string(), "2".to_string()],
                ],
            }),
            BlockType::Image => BlockKind::Image(ImageBlock {
                src: "https://placehold.co/800x450".to_string(),
                alt: "Property photo".to_string(),
            }),
            BlockType::Spacer => BlockKind::Spacer(SpacerBlock::default()),
            BlockType::Divider => BlockKind::Divider,
        }
    }
}

/// One typed unit of a description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    #[serde(flatten)]
    pub kind: BlockKind,
}

impl Block {
    pub fn new(kind: BlockKind) -> Self {
        Self {
            id: BlockId::fresh(),
            kind,
        }
    }

    pub fn with_id(id: impl Into<BlockId>, kind: BlockKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }

    pub fn block_type(&self) -> BlockType {
        self.kind.block_type()
    }
}

// Field-level leniency: a value of the wrong shape falls back to the field
// default instead of rejecting the whole block.

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

fn style_set<'de, D>(deserializer: D) -> Result<BTreeSet<TextStyle>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(BTreeSet::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| TextStyle::deserialize(item).ok())
        .collect())
}

fn cell_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items.into_iter().map(cell_text).collect()),
        _ => Ok(Vec::new()),
    }
}

fn string_grid<'de, D>(deserializer: D) -> Result<Vec<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(rows) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(rows
        .into_iter()
        .filter_map(|row| match row {
            Value::Array(cells) => Some(cells.into_iter().map(cell_text).collect()),
            _ => None,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_block_type_from_str() {
        assert_eq!("Table".parse::<BlockType>(), Ok(BlockType::Table));
        assert_eq!("Divider".parse::<BlockType>(), Ok(BlockType::Divider));
        assert!("table".parse::<BlockType>().is_err());
        assert!("Carousel".parse::<BlockType>().is_err());
    }

    #[test]
    fn test_block_type_names_round_trip() {
        for block_type in BlockType::ALL {
            assert_eq!(block_type.as_str().parse::<BlockType>(), Ok(block_type));
        }
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        let a = BlockId::fresh();
        let b = BlockId::fresh();
        assert_ne!(a, b);
    }

    #[test]
    fn test_block_serializes_flat_with_type_tag() {
        let block = Block::with_id("b1", BlockKind::Spacer(SpacerBlock::default()));
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(value, json!({"id": "b1", "type": "Spacer", "size": "md"}));
    }

    #[test]
    fn test_divider_has_only_id_and_type() {
        let block = Block::with_id("d", BlockKind::Divider);
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(value, json!({"id": "d", "type": "Divider"}));
    }

    #[test]
    fn test_text_defaults_backfilled() {
        let kind: BlockKind = serde_json::from_value(json!({"type": "Text", "text": "hi"})).unwrap();
        assert_eq!(kind, BlockKind::Text(TextBlock::new("hi")));
    }

    #[test]
    fn test_unknown_enum_value_falls_back_to_default() {
        let kind: BlockKind = serde_json::from_value(json!({
            "type": "Button",
            "text": "Go",
            "variant": "sparkly",
            "size": "lg"
        }))
        .unwrap();
        let BlockKind::Button(button) = kind else {
            panic!("expected button");
        };
        assert_eq!(button.variant, ButtonVariant::Default);
        assert_eq!(button.size, ButtonSize::Lg);
        assert_eq!(button.href, "");
    }

    #[test]
    fn test_style_set_ignores_unknown_entries() {
        let kind: BlockKind = serde_json::from_value(json!({
            "type": "Text",
            "text": "x",
            "style": ["italic", "underline", "bold", "bold"]
        }))
        .unwrap();
        let BlockKind::Text(text) = kind else {
            panic!("expected text");
        };
        assert_eq!(
            text.style.into_iter().collect::<Vec<_>>(),
            vec![TextStyle::Bold, TextStyle::Italic]
        );
    }

    #[test]
    fn test_table_cells_coerced_to_strings() {
        let kind: BlockKind = serde_json::from_value(json!({
            "type": "Table",
            "headers": ["Feature", "Value"],
            "rows": [["Bedrooms", 3], "junk", ["Garage", null]]
        }))
        .unwrap();
        assert_eq!(
            kind,
            BlockKind::Table(TableBlock {
                headers: vec!["Feature".into(), "Value".into()],
                rows: vec![
                    vec!["Bedrooms".into(), "3".into()],
                    vec!["Garage".into(), "".into()],
                ],
            })
        );
    }

    #[test]
    fn test_table_template() {
        let BlockKind::Table(table) = BlockKind::template(BlockType::Table) else {
            panic!("expected table");
        };
        assert_eq!(table.headers, vec!["Feature", "Value"]);
        assert_eq!(
            table.rows,
            vec![vec!["Bedrooms", "3"], vec!["Bathrooms", "2"]]
        );
    }
}
