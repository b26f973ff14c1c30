use super::error::FieldError;

/// Raw pieces pulled out of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldToken {
    pub raw_variable: String,
    pub type_hint: Option<String>,
}

/// Extract the field name following the first `]` and the optional type hint
/// found between the last `(` and the last `)` of the line.
pub fn extract(line: &str) -> Result<FieldToken, FieldError> {
    let bracket = line.find(']').ok_or_else(|| FieldError::MissingBracket {
        line: line.to_string(),
    })?;

    let rest = line[bracket + 1..].trim_start();
    let end = token_end(rest);
    let raw_variable = rest[..end].trim().to_string();

    if raw_variable.is_empty() {
        return Err(FieldError::EmptyVariable {
            line: line.to_string(),
        });
    }

    Ok(FieldToken {
        raw_variable,
        type_hint: type_hint(line),
    })
}

/// Byte offset where the field name stops: the first whitespace, or a hyphen
/// that is not joining two parts of the same name.
fn token_end(rest: &str) -> usize {
    let mut chars = rest.char_indices().peekable();
    while let Some((idx, ch)) = chars.next() {
        if ch.is_whitespace() {
            return idx;
        }
        if ch == '-' {
            let joins_word = chars
                .peek()
                .map(|(_, next)| next.is_ascii_alphanumeric())
                .unwrap_or(false);
            if !joins_word {
                return idx;
            }
        }
    }
    rest.len()
}

fn type_hint(line: &str) -> Option<String> {
    let open = line.rfind('(')?;
    let close = line.rfind(')')?;
    if close < open {
        return None;
    }
    Some(line[open + 1..close].trim().to_string())
}
