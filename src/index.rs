// src/index.rs
//! Read-side lookup index with alias expansion.
//!
//! Records are indexed in load order. An alias record whose target is already
//! indexed shares the target's `Arc`, so both keys return identical counter
//! lists. An alias whose target shows up later keeps pointing at itself.

use std::{collections::HashMap, sync::Arc};

use thiserror::Error;

use crate::record::ChampionRecord;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("no data for '{0}'")]
    NotFound(String),
}

#[derive(Clone, Debug, Default)]
pub struct CounterIndex {
    by_key: HashMap<String, Arc<ChampionRecord>>,
    /// Keys in first-seen load order (for listing).
    order: Vec<String>,
}

impl CounterIndex {
    pub fn build(records: &[ChampionRecord]) -> Self {
        let mut idx = Self::default();
        for rec in records {
            idx.insert(rec.clone());
        }
        logd!("Index: {} key(s)", idx.by_key.len());
        idx
    }

    fn insert(&mut self, rec: ChampionRecord) {
        let key = rec.champion.clone();
        let shared = match rec.alias_of.as_deref().and_then(|t| self.by_key.get(t)) {
            Some(target) => Arc::clone(target),
            None => {
                if let Some(t) = &rec.alias_of {
                    logd!("Index: alias '{}' → '{}' not indexed yet, kept as-is", key, t);
                }
                Arc::new(rec)
            }
        };
        if self.by_key.insert(key.clone(), shared).is_none() {
            self.order.push(key);
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<ChampionRecord>> {
        self.by_key.get(name.trim()).cloned()
    }

    pub fn query(&self, name: &str) -> Result<Arc<ChampionRecord>, QueryError> {
        self.get(name).ok_or_else(|| QueryError::NotFound(s!(name.trim())))
    }

    /// All keys (aliases included) in load order.
    pub fn keys(&self) -> &[String] {
        &self.order
    }
}
