//! Raw oracle output decoding

use crate::shared::TypeTag;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("no decode rule for type '{0}'")]
    UnsupportedType(String),

    #[error("cannot decode '{raw}' as {type_name}: {reason}")]
    Malformed {
        type_name: String,
        raw: String,
        reason: String,
    },
}

/// Whether `tag` has a decode rule
pub fn is_decodable(tag: &TypeTag) -> bool {
    matches!(
        tag,
        TypeTag::Int { .. }
            | TypeTag::Float { .. }
            | TypeTag::Bool
            | TypeTag::Text
            | TypeTag::Sequence(_)
            | TypeTag::Mapping(..)
    )
}

/// Decode one raw JSON-encoded return value
pub fn decode_result(tag: &TypeTag, raw: &str) -> Result<Value, DecodeError> {
    let malformed = |reason: String| DecodeError::Malformed {
        type_name: tag.to_string(),
        raw: raw.to_string(),
        reason,
    };
    let text = raw.trim();

    match tag {
        TypeTag::Bool => match text {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            _ => Err(malformed("expected true or false".into())),
        },

        TypeTag::Int { .. } => {
            if let Ok(v) = text.parse::<i64>() {
                return Ok(Value::from(v));
            }
            // uint64 values above i64::MAX
            text.parse::<u64>()
                .map(Value::from)
                .map_err(|e| malformed(e.to_string()))
        }

        TypeTag::Float { .. } => {
            let v = text.parse::<f64>().map_err(|e| malformed(e.to_string()))?;
            serde_json::Number::from_f64(v)
                .map(Value::Number)
                .ok_or_else(|| malformed("not a finite number".into()))
        }

        TypeTag::Text => serde_json::from_str::<String>(text)
            .map(Value::String)
            .map_err(|e| malformed(e.to_string())),

        // nil slices and maps marshal as null
        TypeTag::Sequence(_) => serde_json::from_str::<Option<Vec<Value>>>(text)
            .map(|items| items.map(Value::Array).unwrap_or(Value::Null))
            .map_err(|e| malformed(e.to_string())),

        TypeTag::Mapping(..) => serde_json::from_str::<Option<Map<String, Value>>>(text)
            .map(|entries| entries.map(Value::Object).unwrap_or(Value::Null))
            .map_err(|e| malformed(e.to_string())),

        TypeTag::Complex { .. } | TypeTag::Other(_) => {
            Err(DecodeError::UnsupportedType(tag.to_string()))
        }
    }
}
