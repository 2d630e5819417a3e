use super::error::DescriptionError;
use super::model::Block;

/// Compact JSON as stored in a property's description field
pub fn serialize_description(blocks: &[Block]) -> Result<String, DescriptionError> {
    serde_json::to_string(blocks).map_err(|e| DescriptionError::Serialize(e.to_string()))
}

/// Indented JSON shown in the raw editor
pub fn serialize_description_pretty(blocks: &[Block]) -> Result<String, DescriptionError> {
    serde_json::to_string_pretty(blocks).map_err(|e| DescriptionError::Serialize(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::description::model::{
        BlockKind, ButtonBlock, ButtonSize, ButtonVariant, ImageBlock, SpacerBlock, SpacerSize,
        TableBlock, TextAlign, TextBlock, TextColor, TextSize, TextStyle,
    };
    use crate::description::parse_description;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn every_variant() -> Vec<Block> {
        vec![
            Block::with_id(
                "t",
                BlockKind::Text(TextBlock {
                    text: "Sunny garden flat".to_string(),
                    size: TextSize::Xl,
                    align: TextAlign::Center,
                    color: TextColor::Primary,
                    style: [TextStyle::Bold, TextStyle::Italic].into_iter().collect(),
                }),
            ),
            Block::with_id(
                "b",
                BlockKind::Button(ButtonBlock {
                    text: "Book a viewing".to_string(),
                    href: "/enquire".to_string(),
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Lg,
                }),
            ),
            Block::with_id(
                "tb",
                BlockKind::Table(TableBlock {
                    headers: vec!["Room".into(), "Size".into()],
                    rows: vec![
                        vec!["Kitchen".into(), "4m x 3m".into()],
                        vec!["Lounge".into()],
                    ],
                }),
            ),
            Block::with_id(
                "i",
                BlockKind::Image(ImageBlock {
                    src: "https://example.com/front.jpg".to_string(),
                    alt: "Front elevation".to_string(),
                }),
            ),
            Block::with_id(
                "s",
                BlockKind::Spacer(SpacerBlock {
                    size: SpacerSize::Lg,
                }),
            ),
            Block::with_id("d", BlockKind::Divider),
        ]
    }

    #[test]
    fn test_parse_of_serialize_is_identity() {
        let blocks = every_variant();
        let json = serialize_description(&blocks).unwrap();
        let reparsed = parse_description(json.as_str());

        assert_eq!(reparsed.as_slice(), blocks.as_slice());
    }

    #[test]
    fn test_pretty_output_parses_identically() {
        let blocks = every_variant();
        let compact = serialize_description(&blocks).unwrap();
        let pretty = serialize_description_pretty(&blocks).unwrap();

        assert!(pretty.contains('\n'));
        assert_eq!(
            parse_description(pretty.as_str()),
            parse_description(compact.as_str())
        );
    }

    #[test]
    fn test_objects_carry_only_declared_fields() {
        let json = serialize_description(&every_variant()).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        let keys: Vec<Vec<String>> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|obj| {
                let mut keys: Vec<String> = obj.as_object().unwrap().keys().cloned().collect();
                keys.sort();
                keys
            })
            .collect();

        assert_eq!(
            keys,
            vec![
                vec!["align", "color", "id", "size", "style", "text", "type"],
                vec!["href", "id", "size", "text", "type", "variant"],
                vec!["headers", "id", "rows", "type"],
                vec!["alt", "id", "src", "type"],
                vec!["id", "size", "type"],
                vec!["id", "type"],
            ]
        );
    }

    #[test]
    fn test_enum_fields_use_lowercase_names() {
        let json = serialize_description(&every_variant()[..1]).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(
            value,
            json!([{
                "id": "t",
                "type": "Text",
                "text": "Sunny garden flat",
                "size": "xl",
                "align": "center",
                "color": "primary",
                "style": ["bold", "italic"]
            }])
        );
    }

    #[test]
    fn test_empty_sequence_is_empty_array() {
        assert_eq!(serialize_description(&[]).unwrap(), "[]");
    }
}
