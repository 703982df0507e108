//! Localized string tables.

use std::collections::BTreeMap;

/// Key → text mapping for exactly one localization file.
///
/// Keys are unique within a table; the first occurrence of a duplicate key
/// wins. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringTable {
    entries: BTreeMap<String, String>,
}

impl StringTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, keeping the existing text if the key is already
    /// present.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.entry(key.into()).or_insert_with(|| text.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for StringTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, text) in iter {
            table.insert(key, text);
        }
        table
    }
}
