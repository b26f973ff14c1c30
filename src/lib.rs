pub mod cli;
pub mod config;
pub mod generator;

pub use config::Config;
pub use generator::Generator;

use generator::types::SemanticType;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub label: String,
    pub identifier: String,
    #[serde(rename = "type")]
    pub semantic_type: SemanticType,
}

/// A line that could not be turned into a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub line_number: usize,
    pub line: String,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct GenerateResult {
    pub declarations: Vec<Declaration>,
    pub rendered: String,
    pub diagnostics: Vec<Diagnostic>,
}
