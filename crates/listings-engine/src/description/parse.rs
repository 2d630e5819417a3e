use std::collections::HashSet;

use serde_json::{Map, Value};

use super::Description;
use super::model::{Block, BlockId, BlockKind, BlockType};

/// Parse a persisted description into a normalized block list.
///
/// Never fails. Empty input, malformed JSON and non-array JSON all yield an
/// empty description; individual entries that cannot be classified are
/// dropped while the rest survive. Missing fields are backfilled with the
/// variant defaults.
///
/// ```rust
/// # use listings_engine::description::parse_description;
/// let blocks = parse_description(r#"[{"id":"a","type":"Text","text":"hi"}]"#);
/// assert_eq!(blocks.len(), 1);
/// assert!(parse_description(None).is_empty());
/// ```
pub fn parse_description<'a>(input: impl Into<Option<&'a str>>) -> Description {
    let Some(input) = input.into() else {
        return Description::default();
    };
    if input.trim().is_empty() {
        return Description::default();
    }

    match serde_json::from_str::<Value>(input) {
        Ok(value) => normalize_value(value),
        Err(e) => {
            log::debug!("Description is not JSON, treating as empty: {e}");
            Description::default()
        }
    }
}

/// Normalize an already-decoded JSON value. Anything other than an array
/// yields an empty description.
pub fn normalize_value(value: Value) -> Description {
    let Value::Array(items) = value else {
        log::debug!("Description JSON is not an array, treating as empty");
        return Description::default();
    };

    let mut seen = HashSet::new();
    let mut blocks = Vec::with_capacity(items.len());

    for (index, item) in items.into_iter().enumerate() {
        let Value::Object(fields) = item else {
            log::warn!("Dropping description entry {index}: not an object");
            continue;
        };
        if let Some(mut block) = normalize_entry(index, fields) {
            if !seen.insert(block.id.clone()) {
                log::warn!(
                    "Description entry {index} reuses id {}, assigning a fresh one",
                    block.id
                );
                block.id = BlockId::fresh();
                seen.insert(block.id.clone());
            }
            blocks.push(block);
        }
    }

    Description::from_blocks(blocks)
}

fn normalize_entry(index: usize, mut fields: Map<String, Value>) -> Option<Block> {
    let id = match fields.remove("id") {
        Some(Value::String(id)) if !id.is_empty() => Some(BlockId::from(id)),
        Some(Value::Number(n)) => Some(BlockId::from(n.to_string())),
        _ => None,
    };

    let type_name = match fields.get("type") {
        Some(Value::String(name)) => name.clone(),
        _ => {
            if id.is_none() {
                log::warn!("Dropping description entry {index}: no id and no type");
            } else {
                log::warn!("Dropping description entry {index}: no type");
            }
            return None;
        }
    };

    if let Err(e) = type_name.parse::<BlockType>() {
        log::warn!("Dropping description entry {index}: {e}");
        return None;
    }

    match serde_json::from_value::<BlockKind>(Value::Object(fields)) {
        Ok(kind) => Some(Block {
            id: id.unwrap_or_else(BlockId::fresh),
            kind,
        }),
        Err(e) => {
            log::warn!("Dropping description entry {index}: {e}");
            None
        }
    }
}
