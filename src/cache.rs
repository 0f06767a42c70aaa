// src/cache.rs
//! Read-through cache for interactive lookups.
//!
//! Owned by the query front end, keyed by store path + (mtime, length). The
//! index is rebuilt when the file stamp changes or after `invalidate()`.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
    time::SystemTime,
};

use thiserror::Error;

use crate::index::{CounterIndex, QueryError};
use crate::record::ChampionRecord;
use crate::store::{self, StoreError};

/// A lookup either hit a broken store or simply found nothing.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Query(#[from] QueryError),
}

type Stamp = Option<(SystemTime, u64)>;

fn stamp_of(path: &Path) -> Stamp {
    let meta = fs::metadata(path).ok()?;
    Some((meta.modified().ok()?, meta.len()))
}

pub struct LookupCache {
    path: PathBuf,
    loaded: Option<(Stamp, Arc<CounterIndex>)>,
}

impl LookupCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), loaded: None }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn invalidate(&mut self) {
        self.loaded = None;
    }

    /// Current index, reloading if the file changed since the last load.
    pub fn index(&mut self) -> Result<Arc<CounterIndex>, StoreError> {
        let stamp = stamp_of(&self.path);
        if let Some((cached, idx)) = &self.loaded {
            if *cached == stamp {
                return Ok(Arc::clone(idx));
            }
            logd!("Cache: {} changed, reloading", self.path.display());
        }
        let records = store::load(&self.path)?;
        let idx = Arc::new(CounterIndex::build(&records));
        self.loaded = Some((stamp, Arc::clone(&idx)));
        Ok(idx)
    }

    /// Look up one champion. Store errors and "not found" stay distinct.
    pub fn query(&mut self, name: &str) -> Result<Arc<ChampionRecord>, LookupError> {
        Ok(self.index()?.query(name)?)
    }
}
