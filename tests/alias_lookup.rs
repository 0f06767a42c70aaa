// tests/alias_lookup.rs
use std::fs;
use std::sync::Arc;

use counter_scrape::cache::{LookupCache, LookupError};
use counter_scrape::config::options::StoreLayout;
use counter_scrape::index::QueryError;
use counter_scrape::record::ChampionRecord;
use counter_scrape::store;
use tempfile::TempDir;

fn garen() -> ChampionRecord {
    let mut r = ChampionRecord::new("가렌");
    r.push_hard("티모", "실명 때문에 극상성");
    r.push_general("다리우스");
    r
}

#[test]
fn alias_returns_target_counters() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("top.json");
    store::save(&path, &[garen(), ChampionRecord::alias("Garen", "가렌")], StoreLayout::Hybrid).unwrap();

    let mut cache = LookupCache::new(&path);
    let by_alias = cache.query("Garen").unwrap();
    let by_key = cache.query("가렌").unwrap();
    assert!(Arc::ptr_eq(&by_alias, &by_key));
    assert_eq!(by_alias.hard_counters, garen().hard_counters);
    assert_eq!(by_alias.general_counters, vec!["다리우스".to_string()]);
}

#[test]
fn not_found_is_distinct_from_store_errors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("top.json");
    store::save(&path, &[garen()], StoreLayout::Hybrid).unwrap();

    let mut cache = LookupCache::new(&path);
    match cache.query("럭스") {
        Err(LookupError::Query(QueryError::NotFound(name))) => assert_eq!(name, "럭스"),
        other => panic!("expected NotFound, got {other:?}"),
    }

    fs::write(&path, "not json at all").unwrap();
    cache.invalidate();
    assert!(matches!(cache.query("가렌"), Err(LookupError::Store(_))));
}

#[test]
fn cache_reloads_when_file_changes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("top.json");
    store::save(&path, &[garen()], StoreLayout::Hybrid).unwrap();

    let mut cache = LookupCache::new(&path);
    let first = cache.index().unwrap();
    let again = cache.index().unwrap();
    assert!(Arc::ptr_eq(&first, &again));
    assert!(cache.query("럭스").is_err());

    // different length → different stamp
    let mut lux = ChampionRecord::new("럭스");
    lux.push_general("제드");
    store::save(&path, &[garen(), lux], StoreLayout::Hybrid).unwrap();

    let reloaded = cache.index().unwrap();
    assert!(!Arc::ptr_eq(&first, &reloaded));
    assert_eq!(cache.query("럭스").unwrap().general_counters, vec!["제드".to_string()]);
}

#[test]
fn forward_alias_resolves_to_itself() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("top.json");
    store::save(&path, &[ChampionRecord::alias("Garen", "가렌"), garen()], StoreLayout::Lines).unwrap();

    let mut cache = LookupCache::new(&path);
    let rec = cache.query("Garen").unwrap();
    assert_eq!(rec.champion, "Garen");
    assert!(rec.hard_counters.is_empty());
    assert_eq!(rec.alias_of.as_deref(), Some("가렌"));
}
