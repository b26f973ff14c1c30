/// Concatenate the label's words, each with its first letter uppercased.
pub fn build_identifier(label: &str) -> String {
    label.split(' ').filter(|w| !w.is_empty()).map(capitalize).collect()
}

/// Uppercase the first character, leaving the rest untouched
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
