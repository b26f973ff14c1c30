use std::collections::BTreeMap;

const BUILTIN: &[(&str, &str)] = &[
    ("cust", "customer"),
    ("num", "number"),
    ("prod", "product"),
    ("equip", "equipment"),
    ("est", "estimate"),
    ("descr", "description"),
];

/// Lowercase abbreviation to expansion lookup used while normalizing words.
///
/// The table is built once and then only read; extra entries from the
/// configuration are merged in at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbbreviationTable {
    entries: BTreeMap<String, String>,
}

impl Default for AbbreviationTable {
    fn default() -> Self {
        Self {
            entries: BUILTIN
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl AbbreviationTable {
    /// Built-in table extended (or overridden) by `extra`
    pub fn with_entries<I, K, V>(extra: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut table = Self::default();
        for (key, value) in extra {
            let key = key.as_ref().trim().to_lowercase();
            if !key.is_empty() {
                table.entries.insert(key, value.into());
            }
        }
        table
    }

    /// Case-insensitive lookup
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.entries.get(&word.to_lowercase()).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
