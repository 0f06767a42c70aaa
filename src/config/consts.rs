// src/config/consts.rs

// Store
pub const DEFAULT_STORE_FILE: &str = "top.json";

// Local log
pub const LOG_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Page reading
pub const COUNTER_SECTION_MARKERS: &[&str] = &["상대하기 힘든 챔피언", "카운터"];
pub const FOOTNOTE_LIST_CLASS: &str = "wiki-list-foot";
pub const FOOTNOTE_ID_PREFIX: &str = "fn-";

// Classification
pub const HARD_KEYWORDS: &[&str] = &["하드카운터", "극상성", "닷지", "최악의 상대", "매우 불리하다"];
pub const MAX_NAME_CHARS: usize = 10;

// Summary
pub const SUMMARY_THRESHOLD_CHARS: usize = 150;
pub const SUMMARY_HEAD_CHARS: usize = 120;
pub const SUMMARY_MARKER: &str = "(텍스트가 길어 요약됨)";

// Rendering
pub const NO_INFO: &str = "정보 없음";
