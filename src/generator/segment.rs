use super::abbreviations::AbbreviationTable;
use super::normalize::normalize;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref INLINE_ANNOTATION: Regex = Regex::new(r"\[.*?\]").unwrap();
}

/// Scan state carried from one character to the next.
struct Scan {
    label: String,
    fragment: String,
    capitalized_prev: bool,
    make_next_uppercase: bool,
}

impl Scan {
    fn new() -> Self {
        Self {
            label: String::new(),
            fragment: String::new(),
            capitalized_prev: true,
            make_next_uppercase: false,
        }
    }

    fn starts_word(&self, c: char) -> bool {
        let camel_hump = !self.capitalized_prev && c.is_uppercase();
        let acronym_tail = c.is_lowercase()
            && self.fragment.chars().count() > 1
            && !self.fragment.chars().skip(1).any(char::is_lowercase);
        camel_hump || acronym_tail
    }

    fn push(&mut self, c: char, table: &AbbreviationTable) {
        if c == '-' || c == '_' {
            self.make_next_uppercase = true;
            return;
        }

        let c = if self.make_next_uppercase {
            self.make_next_uppercase = false;
            to_upper(c)
        } else {
            c
        };

        if self.starts_word(c) {
            let word = normalize(&self.fragment, table);
            self.fragment.clear();

            if word.is_all_caps {
                // The acronym's last letter belongs to the word that follows.
                let mut chars = word.text.chars();
                if let Some(last) = chars.next_back() {
                    self.label.push_str(chars.as_str());
                    self.fragment.push(last);
                }
            } else {
                self.label.push_str(&word.text);
            }
            self.fragment.extend(c.to_lowercase());
            self.label.push(' ');
        } else {
            self.fragment.push(c);
        }

        self.capitalized_prev = c.is_uppercase();
    }

    fn finish(mut self, table: &AbbreviationTable) -> String {
        let word = normalize(&self.fragment, table);
        self.label.push_str(&word.text);
        self.label.trim().to_string()
    }
}

fn to_upper(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

/// Turn a raw field name into its space-separated label.
///
/// Inline `[...]` annotations are dropped first. Words are split on `-`/`_`
/// and on case changes; each word then goes through [`normalize`].
pub fn segment(raw_variable: &str, table: &AbbreviationTable) -> String {
    let cleaned = INLINE_ANNOTATION.replace_all(raw_variable, "");

    let mut scan = Scan::new();
    for c in cleaned.chars() {
        scan.push(c, table);
    }
    scan.finish(table)
}
