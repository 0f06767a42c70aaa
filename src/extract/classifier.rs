// src/extract/classifier.rs
//! Hard/general counter classification.
//!
//! A mention is a hard counter when the text of its footnote contains one of the
//! configured keywords; the footnote text becomes the reason. Everything else
//! is a general counter (bare name). Classification is pure keyword
//! containment, so the same page always yields the same record.

use crate::config::consts::{SUMMARY_HEAD_CHARS, SUMMARY_MARKER, SUMMARY_THRESHOLD_CHARS};
use crate::config::options::ClassifierOptions;
use crate::core::sanitize::{head_chars, strip_footnote_markers};
use crate::extract::document::{CounterSection, SourceDocument};
use crate::extract::footnotes::{resolve_footnotes, FootnoteMap};
use crate::progress::Progress;
use crate::record::ChampionRecord;

/// Shortens hard-counter reasons before storage. An LLM-backed summarizer
/// plugs in here; the crate ships the two local policies below.
pub trait Summarizer {
    fn summarize(&self, counter_name: &str, reason: &str) -> String;
}

/// Keeps reasons unchanged.
pub struct Verbatim;

impl Summarizer for Verbatim {
    fn summarize(&self, _counter_name: &str, reason: &str) -> String {
        s!(reason)
    }
}

/// Texts longer than `threshold` chars become their first `head` chars plus a marker.
pub struct HeadExcerpt {
    pub threshold: usize,
    pub head: usize,
}

impl Default for HeadExcerpt {
    fn default() -> Self {
        Self { threshold: SUMMARY_THRESHOLD_CHARS, head: SUMMARY_HEAD_CHARS }
    }
}

impl Summarizer for HeadExcerpt {
    fn summarize(&self, _counter_name: &str, reason: &str) -> String {
        if reason.chars().count() <= self.threshold {
            return s!(reason);
        }
        format!("{}... {}", head_chars(reason, self.head).trim_end(), SUMMARY_MARKER)
    }
}

/// Summarizer implied by the options.
pub fn summarizer_for(options: &ClassifierOptions) -> Box<dyn Summarizer> {
    if options.summarize {
        Box::new(HeadExcerpt::default())
    } else {
        Box::new(Verbatim)
    }
}

pub fn is_hard_reason(reason: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| !k.is_empty() && reason.contains(k.as_str()))
}

/// Classify every mention of `section` into a fresh record for `champion`.
pub fn classify_section(
    champion: &str,
    section: &CounterSection,
    footnotes: &FootnoteMap,
    options: &ClassifierOptions,
    summarizer: &dyn Summarizer,
    mut progress: Option<&mut dyn Progress>,
) -> ChampionRecord {
    let mut record = ChampionRecord::new(champion);

    if let Some(p) = progress.as_deref_mut() {
        p.begin(section.mentions.len());
    }

    for mention in &section.mentions {
        let name = mention.name.trim();
        if name.is_empty() || name.chars().count() > options.max_name_chars {
            logd!("Classify: rejected mention '{}'", name);
            if let Some(p) = progress.as_deref_mut() {
                p.item_skipped(name, "not a plausible name");
            }
            continue;
        }

        let reason = footnotes.resolve(mention.footnote.as_deref());

        if is_hard_reason(reason, &options.keywords) {
            let cleaned = strip_footnote_markers(reason);
            let stored = summarizer.summarize(name, &cleaned);
            logd!("Classify: '{}' hard (fn={:?})", name, mention.footnote);
            if !record.push_hard(name, &stored) {
                record.push_general(name);
            }
        } else {
            logd!("Classify: '{}' general (fn={:?})", name, mention.footnote);
            record.push_general(name);
        }

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(name);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    logf!(
        "Classify: {} → hard={}, general={}",
        record.champion,
        record.hard_counters.len(),
        record.general_counters.len()
    );
    record
}

/// Whole-document extraction. `None` when the page has no counters section.
pub fn extract_record(
    champion: &str,
    doc: &SourceDocument,
    options: &ClassifierOptions,
    progress: Option<&mut dyn Progress>,
) -> Option<ChampionRecord> {
    let Some(section) = doc.counters.as_ref() else {
        logf!("Extract: no counters section for {}", champion);
        return None;
    };
    let footnotes = resolve_footnotes(&doc.footnotes);
    let summarizer = summarizer_for(options);
    Some(classify_section(champion, section, &footnotes, options, summarizer.as_ref(), progress))
}
