use super::abbreviations::AbbreviationTable;

/// A word fragment after abbreviation expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedWord {
    pub text: String,
    /// Two or more characters with no lowercase letter after the first one.
    pub is_all_caps: bool,
}

/// Expand abbreviations in `fragment`, keeping any trailing digit run, and
/// flag acronyms.
pub fn normalize(fragment: &str, table: &AbbreviationTable) -> NormalizedWord {
    let (body, digits) = split_digit_suffix(fragment);

    let text = if digits.is_empty() {
        table
            .lookup(body)
            .map(str::to_string)
            .unwrap_or_else(|| fragment.to_string())
    } else {
        match table.lookup(body) {
            Some(expansion) if !expansion.is_empty() => format!("{}{}", expansion, digits),
            _ => fragment.to_string(),
        }
    };

    let is_all_caps = text.chars().count() > 1 && !text.chars().skip(1).any(char::is_lowercase);

    if is_all_caps {
        NormalizedWord {
            text: text.to_uppercase(),
            is_all_caps,
        }
    } else {
        NormalizedWord { text, is_all_caps }
    }
}

/// Split off the longest run of ASCII digits at the end of `fragment`
fn split_digit_suffix(fragment: &str) -> (&str, &str) {
    let body_len = fragment.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    fragment.split_at(body_len)
}
