// src/render.rs
// Markdown rendering of one record for terminal output.

use crate::config::consts::NO_INFO;
use crate::record::{ChampionRecord, HardCounter};

pub fn hard_counters_md(counters: &[HardCounter]) -> String {
    if counters.is_empty() {
        return join!("- ", NO_INFO);
    }
    counters
        .iter()
        .map(|c| format!("- **{}**: {}", c.name, c.reason))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn general_counters_md(names: &[String]) -> String {
    if names.is_empty() {
        return join!("- ", NO_INFO);
    }
    names.join(", ")
}

pub fn record_md(rec: &ChampionRecord) -> String {
    format!(
        "## 챔피언: {}\n\n### 하드 카운터\n{}\n\n---\n\n### 일반 카운터\n{}\n",
        rec.champion,
        hard_counters_md(&rec.hard_counters),
        general_counters_md(&rec.general_counters),
    )
}
