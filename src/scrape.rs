// src/scrape.rs
use std::{fs, io, path::{Path, PathBuf}};

use thiserror::Error;

use crate::{
    config::options::{AppOptions, ClassifierOptions, StoreOptions},
    extract::extract_record,
    progress::Progress,
    record::{ChampionRecord, HardCounter},
    specs,
    store::{self, StoreError, Upsert},
};

#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("cannot read page {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// What a crawl did to the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrawlOutcome {
    /// The page had no counters section; the store was not touched.
    NothingExtracted,
    Replaced { index: usize },
    Appended { index: usize },
}

impl From<Upsert> for CrawlOutcome {
    fn from(u: Upsert) -> Self {
        match u {
            Upsert::Replaced(index) => CrawlOutcome::Replaced { index },
            Upsert::Appended(index) => CrawlOutcome::Appended { index },
        }
    }
}

/// Page HTML → one record (no IO).
pub fn crawl_page(
    html: &str,
    champion: &str,
    options: &ClassifierOptions,
    progress: Option<&mut dyn Progress>,
) -> Option<ChampionRecord> {
    let doc = specs::wiki::read_document(html);
    extract_record(champion.trim(), &doc, options, progress)
}

/// Read a saved page, extract, upsert and rewrite the store.
pub fn crawl_into_store(
    html_path: &Path,
    champion: &str,
    options: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<CrawlOutcome, CrawlError> {
    logf!("Crawl: Begin champion='{}' page={}", champion, html_path.display());
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Reading {}…", html_path.display()));
    }

    let html = fs::read_to_string(html_path)
        .map_err(|source| CrawlError::Io { path: html_path.to_path_buf(), source })?;

    let sink = progress.as_mut().map(|p| &mut **p as &mut dyn Progress);
    let Some(record) = crawl_page(&html, champion, &options.extract.classifier, sink) else {
        logf!("Crawl: nothing extracted for '{}', store untouched", champion);
        if let Some(p) = progress.as_deref_mut() {
            p.log("No counters section found");
        }
        return Ok(CrawlOutcome::NothingExtracted);
    };

    let outcome = write_record(&options.store, record)?;
    logf!("Crawl: OK champion='{}' → {:?}", champion, outcome);
    Ok(outcome)
}

/// Upsert tokenizer pairs as `champion`'s hard counters. General counters and
/// alias of an existing record are kept.
pub fn merge_pairs_into_store(
    store_opts: &StoreOptions,
    champion: &str,
    pairs: &[HardCounter],
) -> Result<CrawlOutcome, StoreError> {
    let champion = champion.trim();
    let mut records = store::load(store_opts.path())?;

    let mut record = records
        .iter()
        .find(|r| r.champion == champion)
        .cloned()
        .unwrap_or_else(|| ChampionRecord::new(champion));
    record.hard_counters = pairs.to_vec();

    let outcome = store::upsert(&mut records, record);
    store::save(store_opts.path(), &records, store_opts.layout)?;
    Ok(outcome.into())
}

fn write_record(store_opts: &StoreOptions, record: ChampionRecord) -> Result<CrawlOutcome, StoreError> {
    let mut records = store::load(store_opts.path())?;
    let outcome = store::upsert(&mut records, record);
    store::save(store_opts.path(), &records, store_opts.layout)?;
    Ok(outcome.into())
}
