// src/extract/mod.rs
//! Text → record extraction.
//!
//! - `tokenizer`: pasted `Name : Explanation` prose → (name, reason) pairs.
//! - `footnotes`: footnote list → id/text map.
//! - `classifier`: counters section + footnotes → one `ChampionRecord`.
//!
//! Nothing here touches the network or the store file.
pub mod classifier;
pub mod document;
pub mod footnotes;
pub mod tokenizer;

pub use classifier::{extract_record, HeadExcerpt, Summarizer, Verbatim};
pub use document::{CounterSection, Mention, SourceDocument};
pub use footnotes::{resolve_footnotes, FootnoteMap};
pub use tokenizer::{tokenize, NameCharset, SkippedEntry, Tokenized};
