// src/extract/tokenizer.rs
//! Block tokenizer for pasted `Name : Explanation` prose.
//!
//! Entries are separated by a newline that starts a new `name :` anchor, so an
//! explanation may itself contain colons and line breaks. Which characters may
//! form a name is controlled by [`NameCharset`].

use crate::core::sanitize::{head_chars, strip_footnote_markers};
use crate::record::HardCounter;

/// Characters allowed in an entry name (whitespace is always allowed).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameCharset {
    /// Hangul syllables 가..힣
    pub hangul: bool,
    pub latin_upper: bool,
    pub latin_lower: bool,
    /// Extra punctuation such as parentheses or `&`.
    pub extra: Vec<char>,
}

impl NameCharset {
    /// Hangul + Latin capitals, no punctuation.
    pub fn basic() -> Self {
        Self { hangul: true, latin_upper: true, latin_lower: false, extra: Vec::new() }
    }

    /// `basic` plus parentheses (ASCII and full-width), ampersand and comma.
    pub fn extended() -> Self {
        Self { extra: vec!['(', ')', '（', '）', '&', ','], ..Self::basic() }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "basic" => Some(Self::basic()),
            "extended" => Some(Self::extended()),
            _ => None,
        }
    }

    pub fn allows(&self, c: char) -> bool {
        c.is_whitespace()
            || (self.hangul && ('가'..='힣').contains(&c))
            || (self.latin_upper && c.is_ascii_uppercase())
            || (self.latin_lower && c.is_ascii_lowercase())
            || self.extra.contains(&c)
    }

    /// Does `s` start with a run of name characters followed by ':'?
    fn is_anchor(&self, s: &str) -> bool {
        let mut seen = 0usize;
        for c in s.chars() {
            if c == ':' {
                return seen > 0;
            }
            if !self.allows(c) {
                return false;
            }
            seen += 1;
        }
        false
    }
}

impl Default for NameCharset {
    fn default() -> Self {
        Self::extended()
    }
}

/// An entry that had no `name : explanation` split at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedEntry {
    /// 1-based line of the entry in the trimmed input.
    pub line: usize,
    pub excerpt: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tokenized {
    pub pairs: Vec<HardCounter>,
    pub skipped: Vec<SkippedEntry>,
}

const EXCERPT_CHARS: usize = 50;

/// Byte ranges of the segments of `text`, split at anchor newlines.
fn segments(text: &str, charset: &NameCharset) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    let mut start = 0usize;
    for (i, _) in text.match_indices('\n') {
        if charset.is_anchor(&text[i + 1..]) {
            out.push((start, i));
            start = i + 1;
        }
    }
    out.push((start, text.len()));
    out
}

pub fn tokenize(raw: &str, charset: &NameCharset) -> Tokenized {
    // markers go before the boundary scan so `[1]B : y` starts an entry
    let cleaned = strip_footnote_markers(raw);
    let text = cleaned.as_str();
    let mut result = Tokenized::default();
    if text.is_empty() {
        return result;
    }

    for (start, end) in segments(text, charset) {
        let entry = &text[start..end];
        if entry.trim().is_empty() {
            continue;
        }

        let Some((name, reason)) = entry.split_once(':') else {
            let line = text[..start].matches('\n').count() + 1;
            let excerpt = s!(head_chars(entry.trim(), EXCERPT_CHARS));
            logw!("Tokenizer: line {line} is not 'name : explanation', skipped: {excerpt}…");
            result.skipped.push(SkippedEntry { line, excerpt });
            continue;
        };

        match HardCounter::new(name, reason) {
            Some(pair) => result.pairs.push(pair),
            None => logd!("Tokenizer: dropped empty entry '{}'", name.trim()),
        }
    }

    logf!("Tokenizer: {} pair(s), {} skipped", result.pairs.len(), result.skipped.len());
    result
}

/// Normalized `name : reason` text; tokenizing it again gives the same pairs.
pub fn render_lines(pairs: &[HardCounter]) -> String {
    let mut out = s!();
    for p in pairs {
        out.push_str(&format!("{} : {}\n", p.name, p.reason));
    }
    out
}

/// Every pair as a compact JSON object followed by `,`, all on one line.
/// Ready to paste between the brackets of a `hard_counters` array.
pub fn render_compact(pairs: &[HardCounter]) -> String {
    let mut out = s!();
    for p in pairs {
        out.push_str(&crate::store::hard_counter_line(p));
        out.push(',');
    }
    out
}
