use serde::{Deserialize, Serialize};
use std::fmt;

/// Value kinds a generated property can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticType {
    Text,
    Float,
    Integer,
    Boolean,
}

impl SemanticType {
    /// Map an explicit hint such as `Alpha` or `Real`; unknown hints are text
    pub fn from_hint(hint: &str) -> Self {
        match hint.to_lowercase().as_str() {
            "alpha" | "text" => SemanticType::Text,
            "real" => SemanticType::Float,
            "integer" => SemanticType::Integer,
            "boolean" => SemanticType::Boolean,
            _ => SemanticType::Text,
        }
    }

    /// Guess from the identifier when no hint was given
    pub fn infer(identifier: &str) -> Self {
        if identifier.contains("Number") {
            SemanticType::Integer
        } else if identifier.contains("Width") {
            SemanticType::Float
        } else {
            SemanticType::Text
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticType::Text => write!(f, "text"),
            SemanticType::Float => write!(f, "float"),
            SemanticType::Integer => write!(f, "integer"),
            SemanticType::Boolean => write!(f, "boolean"),
        }
    }
}

/// An explicit hint always wins over the identifier heuristics.
pub fn resolve_type(type_hint: Option<&str>, identifier: &str) -> SemanticType {
    match type_hint {
        Some(hint) => SemanticType::from_hint(hint),
        None => SemanticType::infer(identifier),
    }
}
