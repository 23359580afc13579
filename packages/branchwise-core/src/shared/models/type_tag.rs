//! Declared type tags
//!
//! Front-ends hand over parameter and return types as source-level names
//! (`int32`, `[]string`, `map[string]int`, ...). `TypeTag` keeps the spelling
//! so the tag serializes back to exactly what was declared.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer-like or floating-like parameter
///
/// Fixes the unit used for the `min + unit` / `max - unit` witness candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericKind {
    Integer,
    Float,
}

/// Declared type of a parameter or return value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeTag {
    /// `int`, `uint8`, `byte`, `rune`, ... (name kept for aliases)
    Int {
        name: String,
        signed: bool,
        bits: Option<u8>,
    },
    Float {
        bits: u8,
    },
    Complex {
        bits: u8,
    },
    Bool,
    Text,
    Sequence(Box<TypeTag>),
    Mapping(Box<TypeTag>, Box<TypeTag>),
    /// Named type the engine has no model for
    Other(String),
}

impl TypeTag {
    /// Parse a declared type name.
    ///
    /// Never fails: unknown names become `TypeTag::Other`.
    pub fn parse(name: &str) -> Self {
        let name = name.trim();

        if let Some(elem) = name.strip_prefix("[]") {
            return Self::Sequence(Box::new(Self::parse(elem)));
        }

        if let Some(rest) = name.strip_prefix("map[") {
            if let Some(close) = matching_bracket(rest) {
                let key = Self::parse(&rest[..close]);
                let value = Self::parse(&rest[close + 1..]);
                return Self::Mapping(Box::new(key), Box::new(value));
            }
            return Self::Other(name.to_string());
        }

        let int = |signed: bool, bits: Option<u8>| Self::Int {
            name: name.to_string(),
            signed,
            bits,
        };

        match name {
            "int" => int(true, None),
            "int8" => int(true, Some(8)),
            "int16" => int(true, Some(16)),
            "int32" | "rune" => int(true, Some(32)),
            "int64" => int(true, Some(64)),
            "uint" | "uintptr" => int(false, None),
            "uint8" | "byte" => int(false, Some(8)),
            "uint16" => int(false, Some(16)),
            "uint32" => int(false, Some(32)),
            "uint64" => int(false, Some(64)),
            "float32" => Self::Float { bits: 32 },
            "float64" => Self::Float { bits: 64 },
            "complex64" => Self::Complex { bits: 64 },
            "complex128" => Self::Complex { bits: 128 },
            "bool" => Self::Bool,
            "string" => Self::Text,
            other => Self::Other(other.to_string()),
        }
    }

    /// Numeric kind, if this type can carry a Domain
    pub fn numeric_kind(&self) -> Option<NumericKind> {
        match self {
            Self::Int { .. } => Some(NumericKind::Integer),
            Self::Float { .. } => Some(NumericKind::Float),
            _ => None,
        }
    }
}

/// Index of the `]` closing a `map[` key, accounting for nested brackets
fn matching_bracket(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '[' => depth += 1,
            ']' if depth == 0 => return Some(i),
            ']' => depth -= 1,
            _ => {}
        }
    }
    None
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int { name, .. } => write!(f, "{}", name),
            Self::Float { bits } => write!(f, "float{}", bits),
            Self::Complex { bits } => write!(f, "complex{}", bits),
            Self::Bool => write!(f, "bool"),
            Self::Text => write!(f, "string"),
            Self::Sequence(elem) => write!(f, "[]{}", elem),
            Self::Mapping(key, value) => write!(f, "map[{}]{}", key, value),
            Self::Other(name) => write!(f, "{}", name),
        }
    }
}

impl From<TypeTag> for String {
    fn from(tag: TypeTag) -> Self {
        tag.to_string()
    }
}

impl TryFrom<String> for TypeTag {
    type Error = std::convert::Infallible;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Ok(Self::parse(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric() {
        assert_eq!(
            TypeTag::parse("int").numeric_kind(),
            Some(NumericKind::Integer)
        );
        assert_eq!(
            TypeTag::parse("byte").numeric_kind(),
            Some(NumericKind::Integer)
        );
        assert_eq!(
            TypeTag::parse("float32").numeric_kind(),
            Some(NumericKind::Float)
        );
        assert_eq!(TypeTag::parse("complex64").numeric_kind(), None);
        assert_eq!(TypeTag::parse("string").numeric_kind(), None);
    }

    #[test]
    fn test_parse_compound() {
        let tag = TypeTag::parse("map[string][]int32");
        match &tag {
            TypeTag::Mapping(k, v) => {
                assert_eq!(**k, TypeTag::Text);
                assert!(matches!(**v, TypeTag::Sequence(_)));
            }
            other => panic!("expected mapping, got {:?}", other),
        }
        assert_eq!(tag.to_string(), "map[string][]int32");
    }

    #[test]
    fn test_alias_spelling_preserved() {
        assert_eq!(TypeTag::parse("rune").to_string(), "rune");
        assert_eq!(TypeTag::parse("uintptr").to_string(), "uintptr");
    }

    #[test]
    fn test_serde_as_string() {
        let tag: TypeTag = serde_json::from_str("\"[]float64\"").unwrap();
        assert_eq!(tag, TypeTag::Sequence(Box::new(TypeTag::Float { bits: 64 })));
        assert_eq!(serde_json::to_string(&tag).unwrap(), "\"[]float64\"");
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(TypeTag::parse("Widget"), TypeTag::Other("Widget".into()));
        assert_eq!(TypeTag::parse("map[int"), TypeTag::Other("map[int".into()));
    }
}
