use super::identifier::capitalize;
use super::types::SemanticType;
use crate::Declaration;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language the declarations are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    #[default]
    CSharp,
    TypeScript,
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csharp" | "cs" | "c#" => Ok(Target::CSharp),
            "typescript" | "ts" => Ok(Target::TypeScript),
            _ => Err(format!("Unknown target: {}", s)),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::CSharp => write!(f, "csharp"),
            Target::TypeScript => write!(f, "typescript"),
        }
    }
}

impl Target {
    pub fn type_name(&self, ty: SemanticType) -> &'static str {
        match (self, ty) {
            (Target::CSharp, SemanticType::Text) => "string",
            (Target::CSharp, SemanticType::Float) => "float",
            (Target::CSharp, SemanticType::Integer) => "int",
            (Target::CSharp, SemanticType::Boolean) => "bool",
            (Target::TypeScript, SemanticType::Text) => "string",
            (Target::TypeScript, SemanticType::Float | SemanticType::Integer) => "number",
            (Target::TypeScript, SemanticType::Boolean) => "boolean",
        }
    }

    /// Doc comment followed by a nullable property declaration, no trailing newline
    pub fn render(&self, decl: &Declaration) -> String {
        let sentence = doc_sentence(&decl.label);
        let ty = self.type_name(decl.semantic_type);

        match self {
            Target::CSharp => format!(
                "/// <summary>\n/// {}\n/// </summary>\npublic {}? {} {{ get; set; }}",
                sentence, ty, decl.identifier
            ),
            Target::TypeScript => format!(
                "/**\n * {}\n */\n{}?: {} | null;",
                sentence, decl.identifier, ty
            ),
        }
    }
}

/// The label as a sentence: first letter uppercased, period appended
pub fn doc_sentence(label: &str) -> String {
    format!("{}.", capitalize(label))
}
