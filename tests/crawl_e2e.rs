// tests/crawl_e2e.rs
use std::fs;
use std::path::PathBuf;

use counter_scrape::cli::{execute, parse_args};
use counter_scrape::config::options::AppOptions;
use counter_scrape::record::{ChampionRecord, HardCounter};
use counter_scrape::scrape::{crawl_into_store, crawl_page, merge_pairs_into_store, CrawlOutcome};
use counter_scrape::store;
use tempfile::TempDir;

const PAGE: &str = include_str!("fixtures/counters_page.html");

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/counters_page.html")
}

fn options_in(dir: &TempDir) -> AppOptions {
    let mut opts = AppOptions::default();
    opts.store.set_path(dir.path().join("top.json").to_str().unwrap());
    opts
}

fn hard(name: &str, reason: &str) -> HardCounter {
    HardCounter::new(name, reason).unwrap()
}

#[test]
fn page_is_classified_into_hard_and_general() {
    let opts = AppOptions::default();
    let rec = crawl_page(PAGE, "나르", &opts.extract.classifier, None).unwrap();

    assert_eq!(rec.champion, "나르");
    assert_eq!(
        rec.hard_counters,
        vec![
            hard("케인", "라인전에서 극상성이다. 초반 교전은 피하자."),
            hard("애니비아", "닷지를 권장한다 & 벤 추천"),
        ]
    );
    // footnote without a keyword, no footnote, over-long link text dropped
    assert_eq!(rec.general_counters, vec!["럼블".to_string(), "가렌".to_string()]);
}

#[test]
fn crawl_writes_then_replaces_in_place() {
    let dir = TempDir::new().unwrap();
    let opts = options_in(&dir);

    let mut seed = vec![ChampionRecord::new("아트록스"), ChampionRecord::new("나르")];
    seed[1].push_general("티모");
    store::save(opts.store.path(), &seed, opts.store.layout).unwrap();

    let outcome = crawl_into_store(&fixture_path(), "나르", &opts, None).unwrap();
    assert_eq!(outcome, CrawlOutcome::Replaced { index: 1 });

    let loaded = store::load(opts.store.path()).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].champion, "아트록스");
    assert_eq!(loaded[1].hard_counters.len(), 2);
    assert!(!loaded[1].general_counters.contains(&"티모".to_string()));

    let outcome = crawl_into_store(&fixture_path(), "케넨", &opts, None).unwrap();
    assert_eq!(outcome, CrawlOutcome::Appended { index: 2 });
}

#[test]
fn page_without_section_leaves_store_untouched() {
    let dir = TempDir::new().unwrap();
    let opts = options_in(&dir);
    let page = dir.path().join("empty.html");
    fs::write(&page, "<html><body><div>개요만 있는 문서</div></body></html>").unwrap();

    let before = "[{\"champion\":\"A\",\"hard_counters\":[],\"general_counters\":[\"B\"]}]";
    fs::write(opts.store.path(), before).unwrap();

    let outcome = crawl_into_store(&page, "A", &opts, None).unwrap();
    assert_eq!(outcome, CrawlOutcome::NothingExtracted);
    assert_eq!(fs::read_to_string(opts.store.path()).unwrap(), before);
}

#[test]
fn missing_page_is_an_error() {
    let dir = TempDir::new().unwrap();
    let opts = options_in(&dir);
    assert!(crawl_into_store(&dir.path().join("nope.html"), "A", &opts, None).is_err());
    assert!(!opts.store.path().exists());
}

#[test]
fn merged_pairs_keep_general_counters_and_alias() {
    let dir = TempDir::new().unwrap();
    let opts = options_in(&dir);

    let mut rec = ChampionRecord::new("A");
    rec.push_hard("Old", "gone");
    rec.push_general("B");
    store::save(opts.store.path(), &[rec], opts.store.layout).unwrap();

    let pairs = vec![hard("C", "r")];
    let outcome = merge_pairs_into_store(&opts.store, "A", &pairs).unwrap();
    assert_eq!(outcome, CrawlOutcome::Replaced { index: 0 });

    let loaded = store::load(opts.store.path()).unwrap();
    assert_eq!(loaded[0].hard_counters, pairs);
    assert_eq!(loaded[0].general_counters, vec!["B".to_string()]);
}

#[test]
fn cli_crawl_show_list_sort() {
    let dir = TempDir::new().unwrap();
    let store_path = dir.path().join("top.json");
    let store_arg = store_path.to_str().unwrap().to_string();
    let page_arg = fixture_path().to_str().unwrap().to_string();

    let run = |args: &[&str]| -> String {
        let inv = parse_args(args.iter().map(|a| a.to_string())).unwrap();
        let mut out = Vec::new();
        execute(&inv, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    };

    run(&["--store", &store_arg, "crawl", "--html", &page_arg, "--champion", "나르"]);
    run(&["--store", &store_arg, "crawl", "--html", &page_arg, "--champion", "갈리오"]);

    let shown = run(&["--store", &store_arg, "show", "나르"]);
    assert!(shown.starts_with("## 챔피언: 나르\n\n### 하드 카운터\n- **케인**: "));
    assert!(shown.ends_with("### 일반 카운터\n럼블, 가렌\n"));

    // no name → last record
    let last = run(&["--store", &store_arg, "show"]);
    assert!(last.starts_with("## 챔피언: 갈리오\n"));

    assert_eq!(run(&["--store", &store_arg, "list"]), "나르\n갈리오\n");
    run(&["--store", &store_arg, "sort"]);
    assert_eq!(run(&["--store", &store_arg, "list"]), "갈리오\n나르\n");
}

#[test]
fn show_without_name_uses_the_last_record_in_the_file() {
    let dir = TempDir::new().unwrap();
    let store_path = dir.path().join("top.json");
    let store_arg = store_path.to_str().unwrap().to_string();

    let run = |args: &[&str]| -> String {
        let inv = parse_args(args.iter().map(|a| a.to_string())).unwrap();
        let mut out = Vec::new();
        execute(&inv, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    };

    assert_eq!(run(&["--store", &store_arg, "show"]), "저장된 데이터가 없습니다.\n");

    // a repeated key: first-seen order would pick 럼블
    fs::write(
        &store_path,
        r#"[{"champion": "케인"}, {"champion": "럼블"}, {"champion": "케인", "general_counters": ["가렌"]}]"#,
    )
    .unwrap();
    assert!(run(&["--store", &store_arg, "show"]).starts_with("## 챔피언: 케인\n"));
}
