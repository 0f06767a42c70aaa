// src/core/sanitize.rs
use std::sync::LazyLock;

use regex::Regex;

/// `[12]`-style footnote markers.
static FOOTNOTE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\d+\]").expect("static regex"));

/// Footnote list noise: leading ordinal, inline markers, back-reference glyph,
/// trailing empty brackets.
static FOOTNOTE_NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\d+\.\s*|\[\d+\]\s*|↩\s*|\s*\[\s*\]\s*$").expect("static regex")
});

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ").replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Remove every `[<digits>]` marker and trim.
pub fn strip_footnote_markers(s: &str) -> String {
    FOOTNOTE_MARKER.replace_all(s, "").trim().to_string()
}

/// Clean the text of one footnote list entry.
pub fn clean_footnote_text(s: &str) -> String {
    FOOTNOTE_NOISE.replace_all(s, "").trim().to_string()
}

/// First `max` characters of `s` (char-boundary safe).
pub fn head_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}
