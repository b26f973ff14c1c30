use thiserror::Error;

/// Reasons a single input line cannot be turned into a declaration.
///
/// None of these abort a batch; the driver records them and moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("invalid input format: no closing ']' in line")]
    MissingBracket { line: String },

    #[error("invalid input format: no field name after ']'")]
    EmptyVariable { line: String },

    #[error("field name '{raw}' has no words left after removing annotations")]
    EmptyLabel { raw: String },
}

impl FieldError {
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            FieldError::MissingBracket { .. } | FieldError::EmptyVariable { .. }
        )
    }
}
