// src/extract/footnotes.rs
use std::collections::HashMap;

use crate::core::sanitize::clean_footnote_text;

/// Footnote id → cleaned text. Built once per page and thrown away after.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FootnoteMap(HashMap<String, String>);

impl FootnoteMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert text as-is (already clean).
    pub fn insert(&mut self, id: &str, text: &str) {
        self.0.insert(s!(id.trim()), s!(text));
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id.trim()).map(String::as_str)
    }

    /// Text for an optional reference; missing ids read as "no explanation".
    pub fn resolve(&self, id: Option<&str>) -> &str {
        id.and_then(|i| self.get(i)).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Build the map from raw footnote list entries. Later ids overwrite earlier ones.
pub fn resolve_footnotes(entries: &[(String, String)]) -> FootnoteMap {
    let mut map = FootnoteMap::new();
    for (id, text) in entries {
        map.insert(id, &clean_footnote_text(text));
    }
    logd!("Footnotes: {} entr(ies) → {} id(s)", entries.len(), map.len());
    map
}
