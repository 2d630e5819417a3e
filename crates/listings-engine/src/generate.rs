//! AI-assisted description drafting.
//!
//! The model itself sits behind [`ContentGenerator`]. Whatever it returns is
//! treated like any other untrusted persisted value: run through the lenient
//! parser and given fresh block ids.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::description::{BlockId, Description, normalize_value};
use crate::models::Property;

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^\s*```[a-zA-Z]*\s*\n(.*?)\n?```\s*$").unwrap());

/// Anything that can turn a prompt into a candidate block array
pub trait ContentGenerator {
    fn generate(&self, prompt: &str) -> anyhow::Result<String>;
}

/// Prompt describing the block schema and the property's facts
pub fn build_prompt(property: &Property) -> String {
    let mut facts = vec![
        format!("Title: {}", property.title),
        format!("Type: {}", property.property_type.label()),
        format!("Listing: {}", property.listing_type.label()),
        format!("Price: {}", property.display_price()),
        format!("Location: {}", property.location),
        format!("Bedrooms: {}", property.bedrooms),
        format!("Bathrooms: {}", property.bathrooms),
    ];
    if let Some(area) = property.area_sqm {
        facts.push(format!("Floor area: {area} sqm"));
    }

    format!(
        "Write an engaging property description as a JSON array of blocks.\n\
         Each block is an object with a \"type\" of Text, Button, Table, Image, Spacer or Divider.\n\
         Text: text, size (sm|md|lg|xl), align (left|center|right), color (default|primary|muted), style (array of bold|italic).\n\
         Button: text, href, variant (default|destructive|outline|secondary|ghost|link), size (default|sm|lg|icon).\n\
         Table: headers (array of strings), rows (array of arrays of strings, one cell per header).\n\
         Image: src, alt. Spacer: size (sm|md|lg). Divider: no fields.\n\
         Respond with the JSON array only.\n\n{}",
        facts.join("\n")
    )
}

/// Normalize a generator response into a description.
///
/// Accepts a bare array, an array wrapped in a Markdown code fence, or an
/// object with a `blocks` array. Anything else yields an empty description.
pub fn accept_generated(candidate: &str) -> Description {
    let body = CODE_FENCE
        .captures(candidate)
        .and_then(|caps| caps.get(1))
        .map_or(candidate, |m| m.as_str());

    let value = match serde_json::from_str::<Value>(body.trim()) {
        Ok(Value::Object(mut map)) => map.remove("blocks").unwrap_or(Value::Null),
        Ok(value) => value,
        Err(e) => {
            log::warn!("Generated description is not JSON: {e}");
            return Description::default();
        }
    };

    let mut description = normalize_value(value);
    for block in description.blocks_mut() {
        block.id = BlockId::fresh();
    }
    description
}

pub fn generate_description(
    generator: &impl ContentGenerator,
    property: &Property,
) -> anyhow::Result<Description> {
    let prompt = build_prompt(property);
    let response = generator.generate(&prompt)?;
    let description = accept_generated(&response);
    log::info!(
        "Generated {} blocks for property {}",
        description.len(),
        property.id
    );
    Ok(description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::description::{BlockKind, BlockType};
    use crate::tests::sample_property;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    struct Canned {
        response: String,
        prompts: RefCell<Vec<String>>,
    }

    impl ContentGenerator for Canned {
        fn generate(&self, prompt: &str) -> anyhow::Result<String> {
            self.prompts.borrow_mut().push(prompt.to_string());
            Ok(self.response.clone())
        }
    }

    struct Offline;

    impl ContentGenerator for Offline {
        fn generate(&self, _prompt: &str) -> anyhow::Result<String> {
            anyhow::bail!("generator unavailable")
        }
    }

    #[test]
    fn test_fenced_response_is_unwrapped() {
        let description = accept_generated(
            "```json\n[{\"type\":\"Text\",\"text\":\"Welcome home\"},{\"type\":\"Divider\"}]\n```",
        );

        let types: Vec<_> = description.iter().map(|b| b.block_type()).collect();
        assert_eq!(types, vec![BlockType::Text, BlockType::Divider]);
    }

    #[test]
    fn test_blocks_object_accepted() {
        let description = accept_generated(r#"{"blocks":[{"type":"Spacer","size":"lg"}]}"#);
        assert_eq!(description.len(), 1);
    }

    #[test]
    fn test_generated_ids_are_never_trusted() {
        let description = accept_generated(
            r#"[{"id":"same","type":"Divider"},{"id":"same","type":"Divider"}]"#,
        );

        assert_eq!(description.len(), 2);
        assert!(description.iter().all(|b| b.id.as_str() != "same"));
        assert_ne!(description[0].id, description[1].id);
    }

    #[test]
    fn test_invalid_output_is_dropped_softly() {
        assert!(accept_generated("Sorry, I can't help with that.").is_empty());
        assert!(accept_generated(r#"[{"type":"Video","src":"x"}]"#).is_empty());
    }

    #[test]
    fn test_generate_description_uses_property_facts() {
        let generator = Canned {
            response: r#"[{"type":"Text","text":"A lovely home","style":["bold"]}]"#.to_string(),
            prompts: RefCell::new(Vec::new()),
        };
        let property = sample_property("Stone cottage");

        let description = generate_description(&generator, &property).unwrap();

        let BlockKind::Text(text) = &description[0].kind else {
            panic!("expected text");
        };
        assert_eq!(text.text, "A lovely home");
        let prompts = generator.prompts.borrow();
        assert!(prompts[0].contains("Title: Stone cottage"));
        assert!(prompts[0].contains("Bedrooms: 3"));
    }

    #[test]
    fn test_generator_errors_propagate() {
        let property = sample_property("Stone cottage");
        assert!(generate_description(&Offline, &property).is_err());
    }
}
