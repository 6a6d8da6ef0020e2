use chatreplay_core::ParseError;
use serde_json::Value;

/// How the top-level item sequence was recovered from the raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadShape {
    /// Input was already a well-formed JSON array and parsed as-is
    Array,
    /// Items were collected by the streaming reader from one value or
    /// several values written back-to-back
    Concatenated,
}

/// Normalize raw dump text into the ordered top-level item sequence.
///
/// Pre-formed arrays never take the concatenation path. Everything else is
/// read as a stream of top-level JSON values, the layout some chat-dump
/// capture tools emit when they append objects without an array wrapper.
pub fn parse_payload(raw: &str) -> Result<(Vec<Value>, PayloadShape), ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    if trimmed.starts_with('[') && trimmed.ends_with(']') {
        let value: Value =
            serde_json::from_str(trimmed).map_err(|e| ParseError::MalformedJson {
                detail: e.to_string(),
            })?;
        return match value {
            Value::Array(items) => Ok((items, PayloadShape::Array)),
            _ => Err(ParseError::InternalShape {
                context: "top-level payload",
            }),
        };
    }

    let mut items = Vec::new();
    for value in serde_json::Deserializer::from_str(trimmed).into_iter::<Value>() {
        let value = value.map_err(|e| ParseError::MalformedJson {
            detail: e.to_string(),
        })?;
        items.push(value);
    }
    Ok((items, PayloadShape::Concatenated))
}
