// src/store.rs
//! Persistent record store.
//!
//! The store is a JSON file holding every `ChampionRecord`, keyed by
//! `champion`. It is read whole, changed by at most one upsert, and rewritten
//! whole. Two layouts are understood:
//!
//! - **hybrid** (written by default): an indented array where each hard counter
//!   and each `general_counters` list sits on a single compact line;
//! - **lines**: one compact record per line.
//!
//! Both writers emit compact JSON with `", "` / `": "` separators and raw
//! (unescaped) non-ASCII text; existing files depend on this exact layout.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde_json::error::Category;
use thiserror::Error;

use crate::config::options::StoreLayout;
use crate::record::{ChampionRecord, HardCounter};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot access store {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("store line {line} is not a valid record: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("record #{index} has an empty champion name")]
    InvalidRecord { index: usize },
}

/// What `upsert` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Upsert {
    /// An existing record with the same key was replaced at this index.
    Replaced(usize),
    /// The record was new and now sits at this index.
    Appended(usize),
}

fn io_err(path: &Path) -> impl FnOnce(io::Error) -> StoreError + '_ {
    move |source| StoreError::Io { path: path.to_path_buf(), source }
}

/* ---------------- load ---------------- */

/// Load a store file. Missing or zero-length files are an empty store.
pub fn load(path: &Path) -> Result<Vec<ChampionRecord>, StoreError> {
    let meta = match fs::metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            logd!("Store: {} missing, starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(io_err(path)(e)),
    };
    if meta.len() == 0 {
        return Ok(Vec::new());
    }

    let text = fs::read_to_string(path).map_err(io_err(path))?;
    match parse(&text) {
        Ok(records) => {
            logf!("Store: loaded {} record(s) from {}", records.len(), path.display());
            Ok(records)
        }
        Err(e) => {
            loge!("Store: {} unreadable: {}", path.display(), e);
            Err(e)
        }
    }
}

/// Parse store text: a JSON array, a single object, or one object per line.
pub fn parse(text: &str) -> Result<Vec<ChampionRecord>, StoreError> {
    let records = if text.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<ChampionRecord>>(text).map_err(malformed)?
    } else {
        match serde_json::from_str::<ChampionRecord>(text) {
            Ok(r) => vec![r],
            // well-formed JSON whose fields do not fit a record
            Err(e) if e.classify() == Category::Data => return Err(malformed(e)),
            Err(_) => parse_lines(text)?,
        }
    };

    let mut out = Vec::with_capacity(records.len());
    for (index, mut rec) in records.into_iter().enumerate() {
        if !rec.normalize() {
            return Err(StoreError::InvalidRecord { index });
        }
        out.push(rec);
    }
    Ok(out)
}

fn malformed(source: serde_json::Error) -> StoreError {
    StoreError::Malformed { line: source.line(), source }
}

fn parse_lines(text: &str) -> Result<Vec<ChampionRecord>, StoreError> {
    let mut out = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let rec = serde_json::from_str::<ChampionRecord>(line)
            .map_err(|source| StoreError::Malformed { line: i + 1, source })?;
        out.push(rec);
    }
    Ok(out)
}

/* ---------------- upsert ---------------- */

/// Replace the first record sharing `record.champion`, else append.
/// Untouched records keep their order.
pub fn upsert(records: &mut Vec<ChampionRecord>, record: ChampionRecord) -> Upsert {
    match records.iter().position(|r| r.champion == record.champion) {
        Some(i) => {
            logf!("Store: replaced '{}' at #{}", record.champion, i);
            records[i] = record;
            Upsert::Replaced(i)
        }
        None => {
            logf!("Store: appended '{}'", record.champion);
            records.push(record);
            Upsert::Appended(records.len() - 1)
        }
    }
}

/// Order by key (code-point order).
pub fn sort_by_key(records: &mut [ChampionRecord]) {
    records.sort_by(|a, b| a.champion.cmp(&b.champion));
}

/* ---------------- save ---------------- */

/// Rewrite the whole file in `layout`. Not atomic: a crash mid-write can
/// leave a truncated file.
pub fn save(path: &Path, records: &[ChampionRecord], layout: StoreLayout) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(io_err(parent))?;
        }
    }
    let contents = match layout {
        StoreLayout::Hybrid => to_hybrid(records),
        StoreLayout::Lines => to_lines(records),
    };
    fs::write(path, contents).map_err(io_err(path))?;
    logf!("Store: saved {} record(s) → {} ({})", records.len(), path.display(), layout.label());
    Ok(())
}

/// `save` in the line-delimited layout.
pub fn save_lines(path: &Path, records: &[ChampionRecord]) -> Result<(), StoreError> {
    save(path, records, StoreLayout::Lines)
}

pub fn to_hybrid(records: &[ChampionRecord]) -> String {
    let mut out = s!("[\n");
    for (i, rec) in records.iter().enumerate() {
        out.push_str("  {\n");
        out.push_str(&join!("    \"champion\": ", &json_str(&rec.champion), ",\n"));
        if let Some(target) = &rec.alias_of {
            out.push_str(&join!("    \"alias_of\": ", &json_str(target), ",\n"));
        }

        out.push_str("    \"hard_counters\": [\n");
        for (j, hc) in rec.hard_counters.iter().enumerate() {
            out.push_str("      ");
            out.push_str(&hard_counter_line(hc));
            out.push_str(if j + 1 < rec.hard_counters.len() { ",\n" } else { "\n" });
        }
        out.push_str("    ],\n");

        out.push_str(&join!("    \"general_counters\": ", &general_line(&rec.general_counters), "\n"));
        out.push_str("  }");
        out.push_str(if i + 1 < records.len() { ",\n" } else { "\n" });
    }
    out.push_str("]\n");
    out
}

pub fn to_lines(records: &[ChampionRecord]) -> String {
    let mut out = s!();
    for rec in records {
        out.push_str(&record_line(rec));
        out.push('\n');
    }
    out
}

/// `{"champion": ..., "hard_counters": [...], "general_counters": [...]}` on one line.
pub fn record_line(rec: &ChampionRecord) -> String {
    let hard: Vec<String> = rec.hard_counters.iter().map(hard_counter_line).collect();
    let mut line = join!(
        "{\"champion\": ", &json_str(&rec.champion),
        ", \"hard_counters\": [", &hard.join(", "), "]",
        ", \"general_counters\": ", &general_line(&rec.general_counters)
    );
    if let Some(target) = &rec.alias_of {
        line.push_str(&join!(", \"alias_of\": ", &json_str(target)));
    }
    line.push('}');
    line
}

/// `{"name": "...", "reason": "..."}`
pub fn hard_counter_line(hc: &HardCounter) -> String {
    join!("{\"name\": ", &json_str(&hc.name), ", \"reason\": ", &json_str(&hc.reason), "}")
}

/// `["a", "b"]`, or `[]`.
pub fn general_line(names: &[String]) -> String {
    let quoted: Vec<String> = names.iter().map(|n| json_str(n)).collect();
    join!("[", &quoted.join(", "), "]")
}

/// JSON string literal; only quotes, backslashes and control characters are escaped.
pub fn json_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(champion: &str, hard: &[(&str, &str)], general: &[&str]) -> ChampionRecord {
        let mut r = ChampionRecord::new(champion);
        for (n, why) in hard {
            r.push_hard(n, why);
        }
        for g in general {
            r.push_general(g);
        }
        r
    }

    #[test]
    fn hybrid_layout_is_exact() {
        let records = vec![
            rec("나르", &[("케인", "극상성"), ("애니비아", "닷지")], &["럼블", "가렌"]),
            rec("A", &[], &[]),
        ];
        let expected = "[\n  {\n    \"champion\": \"나르\",\n    \"hard_counters\": [\n      {\"name\": \"케인\", \"reason\": \"극상성\"},\n      {\"name\": \"애니비아\", \"reason\": \"닷지\"}\n    ],\n    \"general_counters\": [\"럼블\", \"가렌\"]\n  },\n  {\n    \"champion\": \"A\",\n    \"hard_counters\": [\n    ],\n    \"general_counters\": []\n  }\n]\n";
        assert_eq!(to_hybrid(&records), expected);
        assert_eq!(to_hybrid(&[]), "[\n]\n");
    }

    #[test]
    fn alias_line_follows_champion() {
        let out = to_hybrid(&[ChampionRecord::alias("X", "Y")]);
        assert!(out.contains("    \"champion\": \"X\",\n    \"alias_of\": \"Y\",\n    \"hard_counters\": [\n"));
        assert_eq!(
            record_line(&ChampionRecord::alias("X", "Y")),
            r#"{"champion": "X", "hard_counters": [], "general_counters": [], "alias_of": "Y"}"#
        );
    }

    #[test]
    fn strings_escape_only_quotes_backslashes_and_controls() {
        assert_eq!(json_str("a\"b\\c\nd\u{1}é한"), "\"a\\\"b\\\\c\\nd\\u0001é한\"");
    }

    #[test]
    fn parse_accepts_object_array_and_lines() {
        let one = parse(r#"{"champion": "A", "general_counters": ["B"]}"#).unwrap();
        assert_eq!(one.len(), 1);

        let many = parse(r#"[{"champion": "A"}, {"champion": "B"}]"#).unwrap();
        assert_eq!(many.len(), 2);

        let lines = parse("{\"champion\": \"A\"}\n\n{\"champion\": \"B\", \"alias_of\": \"A\"}\n").unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].alias_of.as_deref(), Some("A"));

        assert!(parse("   \n").unwrap().is_empty());
    }

    #[test]
    fn parse_reports_bad_line_and_blank_key() {
        match parse("{\"champion\": \"A\"}\nnot json\n") {
            Err(StoreError::Malformed { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected Malformed, got {other:?}"),
        }
        assert!(matches!(
            parse(r#"[{"champion": "A"}, {"champion": " "}]"#),
            Err(StoreError::InvalidRecord { index: 1 })
        ));
    }

    #[test]
    fn bad_record_in_array_keeps_the_serde_error() {
        let text = "[\n  {\"champion\": \"A\"},\n  {\"champion\": \"B\", \"general_counters\": null}\n]\n";
        match parse(text) {
            Err(StoreError::Malformed { line, source }) => {
                assert_eq!(line, 3);
                assert_eq!(source.classify(), Category::Data);
                assert!(source.to_string().contains("null"), "{source}");
            }
            other => panic!("expected Malformed, got {other:?}"),
        }

        match parse(r#"{"champion": 5}"#) {
            Err(StoreError::Malformed { line, source }) => {
                assert_eq!(line, 1);
                assert_eq!(source.classify(), Category::Data);
            }
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn upsert_replaces_in_place_or_appends() {
        let mut records = vec![rec("A", &[], &["B"]), rec("Z", &[], &[])];
        let outcome = upsert(&mut records, rec("A", &[("C", "r")], &[]));
        assert_eq!(outcome, Upsert::Replaced(0));
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], rec("A", &[("C", "r")], &[]));

        let outcome = upsert(&mut records, rec("M", &[], &[]));
        assert_eq!(outcome, Upsert::Appended(2));
        let keys: Vec<&str> = records.iter().map(|r| r.champion.as_str()).collect();
        assert_eq!(keys, vec!["A", "Z", "M"]);
    }
}
