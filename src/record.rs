// src/record.rs
//! Canonical record types.
//!
//! A [`ChampionRecord`] is keyed by `champion`. Counter lists are normalized on
//! construction and on load: names trimmed, empty entries dropped, footnote
//! markers stripped from reasons.

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::sanitize::strip_footnote_markers;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardCounter {
    pub name: String,
    #[serde(default)]
    pub reason: String,
}

impl HardCounter {
    /// Trimmed name and marker-free reason; `None` if either ends up empty.
    pub fn new(name: &str, reason: &str) -> Option<Self> {
        let name = name.trim();
        let reason = strip_footnote_markers(reason);
        if name.is_empty() || reason.is_empty() {
            return None;
        }
        Some(Self { name: s!(name), reason })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChampionRecord {
    pub champion: String,
    #[serde(default)]
    pub hard_counters: Vec<HardCounter>,
    #[serde(default, deserialize_with = "general_entries")]
    pub general_counters: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias_of: Option<String>,
}

impl ChampionRecord {
    pub fn new(champion: &str) -> Self {
        Self {
            champion: s!(champion.trim()),
            hard_counters: Vec::new(),
            general_counters: Vec::new(),
            alias_of: None,
        }
    }

    /// A pointer record: lookups for `champion` resolve to `target`.
    pub fn alias(champion: &str, target: &str) -> Self {
        Self { alias_of: Some(s!(target.trim())), ..Self::new(champion) }
    }

    pub fn is_alias(&self) -> bool {
        self.alias_of.is_some()
    }

    /// Push a hard counter if it survives normalization.
    pub fn push_hard(&mut self, name: &str, reason: &str) -> bool {
        match HardCounter::new(name, reason) {
            Some(hc) => { self.hard_counters.push(hc); true }
            None => false,
        }
    }

    /// Push a general counter name if non-empty after trimming.
    pub fn push_general(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.general_counters.push(s!(name));
        true
    }

    /// Apply the record invariants in place. Returns false if the key is empty,
    /// which callers treat as an invalid record.
    pub fn normalize(&mut self) -> bool {
        self.champion = s!(self.champion.trim());

        let hard = std::mem::take(&mut self.hard_counters);
        self.hard_counters = hard
            .into_iter()
            .filter_map(|hc| HardCounter::new(&hc.name, &hc.reason))
            .collect();

        self.general_counters = std::mem::take(&mut self.general_counters)
            .into_iter()
            .map(|g| s!(g.trim()))
            .filter(|g| !g.is_empty())
            .collect();

        self.alias_of = self
            .alias_of
            .take()
            .map(|a| s!(a.trim()))
            .filter(|a| !a.is_empty());

        !self.champion.is_empty()
    }
}

/// Older stores wrote general counters as `{"name": ...}` objects; accept both.
fn general_entries<'de, D>(de: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Entry {
        Name(String),
        Named { name: String },
    }

    let entries = Vec::<Entry>::deserialize(de)?;
    Ok(entries
        .into_iter()
        .map(|e| match e {
            Entry::Name(n) | Entry::Named { name: n } => n,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hard_counter_requires_both_parts() {
        assert_eq!(
            HardCounter::new(" 애니비아 ", "닷지하자.[47] "),
            Some(HardCounter { name: s!("애니비아"), reason: s!("닷지하자.") })
        );
        assert_eq!(HardCounter::new("", "r"), None);
        assert_eq!(HardCounter::new("n", " [12] "), None);
    }

    #[test]
    fn normalize_drops_empties_and_markers() {
        let mut r: ChampionRecord = serde_json::from_str(
            r#"{"champion":" 나르 ","hard_counters":[{"name":" 케인","reason":"극상성[3]","type":"hard"},{"name":"x","reason":""}],
                "general_counters":["  ", {"name":"럼블"}, "가렌 "],"alias_of":""}"#,
        )
        .unwrap();
        assert!(r.normalize());
        assert_eq!(r.champion, "나르");
        assert_eq!(r.hard_counters, vec![HardCounter { name: s!("케인"), reason: s!("극상성") }]);
        assert_eq!(r.general_counters, vec!["럼블", "가렌"]);
        assert_eq!(r.alias_of, None);
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let mut r: ChampionRecord = serde_json::from_str(r#"{"champion":"X","alias_of":"Y"}"#).unwrap();
        assert!(r.normalize());
        assert!(r.hard_counters.is_empty() && r.general_counters.is_empty());
        assert!(r.is_alias());
    }

    #[test]
    fn blank_key_is_invalid() {
        let mut r = ChampionRecord::new("   ");
        assert!(!r.normalize());
    }
}
