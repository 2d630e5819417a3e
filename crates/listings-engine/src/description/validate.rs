use serde_json::Value;

use super::Description;
use super::error::DescriptionError;
use super::parse::normalize_value;

/// Strictly check hand-edited JSON before it replaces the structured blocks.
///
/// Unlike [`parse_description`](super::parse_description) this refuses text
/// that is not valid JSON, is not an array, contains non-object entries or
/// has a Table whose `headers`/`rows` are not both arrays. Unknown block types
/// are still ignored rather than rejected.
pub fn validate_raw(text: &str) -> Result<Description, DescriptionError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| DescriptionError::invalid_json(&e))?;

    let Value::Array(items) = &value else {
        return Err(DescriptionError::NotAnArray);
    };

    for (index, item) in items.iter().enumerate() {
        let Value::Object(fields) = item else {
            return Err(DescriptionError::NotAnObject { index });
        };
        if fields.get("type").and_then(Value::as_str) == Some("Table") {
            let headers_ok = matches!(fields.get("headers"), Some(Value::Array(_)));
            let rows_ok = matches!(fields.get("rows"), Some(Value::Array(_)));
            if !(headers_ok && rows_ok) {
                return Err(DescriptionError::InvalidTable { index });
            }
        }
    }

    Ok(normalize_value(value))
}
