// src/extract/document.rs
// Input document handed to the extractor by a page reader.

/// One name mention in the counters section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mention {
    pub name: String,
    /// Id of the footnote reference directly after the mention, if any.
    pub footnote: Option<String>,
}

impl Mention {
    pub fn new(name: &str, footnote: Option<&str>) -> Self {
        Self { name: s!(name), footnote: footnote.map(String::from) }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CounterSection {
    pub mentions: Vec<Mention>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceDocument {
    /// `None` when the page has no recognizable counters section.
    pub counters: Option<CounterSection>,
    /// Raw `(id, text)` pairs from the footnote list, in page order.
    pub footnotes: Vec<(String, String)>,
}
