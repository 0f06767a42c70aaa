// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::extract::tokenizer::NameCharset;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub store: StoreOptions,
    pub extract: ExtractOptions,
}

/// On-disk layout used when the store is rewritten.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StoreLayout {
    /// Indented array, one compact line per hard counter and per general list.
    #[default]
    Hybrid,
    /// One compact record per line.
    Lines,
}

impl StoreLayout {
    pub fn label(&self) -> &'static str {
        match self {
            StoreLayout::Hybrid => "hybrid",
            StoreLayout::Lines => "lines",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreOptions {
    path: PathBuf,
    pub layout: StoreLayout,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_STORE_FILE),
            layout: StoreLayout::Hybrid,
        }
    }
}

impl StoreOptions {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Accepts GUI/CLI text. Blank input falls back to the default file.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        self.path = if s.is_empty() {
            PathBuf::from(DEFAULT_STORE_FILE)
        } else {
            PathBuf::from(s)
        };
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ExtractOptions {
    pub charset: NameCharset,
    pub classifier: ClassifierOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifierOptions {
    pub keywords: Vec<String>,
    pub max_name_chars: usize,
    /// Compress long hard-counter reasons to a head excerpt.
    pub summarize: bool,
}

impl Default for ClassifierOptions {
    fn default() -> Self {
        Self {
            keywords: HARD_KEYWORDS.iter().map(|k| s!(*k)).collect(),
            max_name_chars: MAX_NAME_CHARS,
            summarize: false,
        }
    }
}
