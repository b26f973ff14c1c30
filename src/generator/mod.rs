pub mod abbreviations;
pub mod error;
pub mod extract;
pub mod identifier;
pub mod normalize;
pub mod render;
pub mod segment;
pub mod types;

use crate::{Declaration, Diagnostic, GenerateResult};
use abbreviations::AbbreviationTable;
use error::FieldError;
use render::Target;

/// Runs field-definition lines through extraction, segmentation and typing.
pub struct Generator {
    abbreviations: AbbreviationTable,
    target: Target,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(AbbreviationTable::default(), Target::default())
    }
}

impl Generator {
    pub fn new(abbreviations: AbbreviationTable, target: Target) -> Self {
        Self {
            abbreviations,
            target,
        }
    }

    pub fn target(&self) -> Target {
        self.target
    }

    /// Build the declaration for a single line
    pub fn process_line(&self, line: &str) -> Result<Declaration, FieldError> {
        let token = extract::extract(line)?;

        let label = segment::segment(&token.raw_variable, &self.abbreviations);
        if label.is_empty() {
            return Err(FieldError::EmptyLabel {
                raw: token.raw_variable,
            });
        }

        let identifier = identifier::build_identifier(&label);
        let semantic_type = types::resolve_type(token.type_hint.as_deref(), &identifier);

        Ok(Declaration {
            label,
            identifier,
            semantic_type,
        })
    }

    /// Process every non-empty line of `input` in order.
    ///
    /// Lines that fail are skipped and reported in `diagnostics`; the rest are
    /// rendered and joined with a blank line.
    pub fn process(&self, input: &str) -> GenerateResult {
        let mut declarations = Vec::new();
        let mut diagnostics = Vec::new();

        for (idx, physical) in input.split('\n').enumerate() {
            for line in physical.split('\r').filter(|l| !l.is_empty()) {
                match self.process_line(line) {
                    Ok(decl) => declarations.push(decl),
                    Err(err) => diagnostics.push(Diagnostic {
                        line_number: idx + 1,
                        line: line.to_string(),
                        message: err.to_string(),
                    }),
                }
            }
        }

        let rendered = declarations
            .iter()
            .map(|decl| self.target.render(decl))
            .collect::<Vec<_>>()
            .join("\n\n")
            .trim()
            .to_string();

        GenerateResult {
            declarations,
            rendered,
            diagnostics,
        }
    }
}
