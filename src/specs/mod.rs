//! # Page-reading “specs” module
//!
//! Each spec knows *where the ground truth lives in a saved HTML page* and turns
//! it into the plain input structure the extractor consumes
//! (`extract::SourceDocument`).
//!
//! ## What lives here
//! - **Pure HTML scanning** using `core::html` helpers (case-insensitive tag
//!   blocks, attribute reads, nesting-aware block ends) and `core::vischars`
//!   for visible text.
//! - **Selector choice**: which list holds the footnotes, which block holds the
//!   counters, which anchors are names and which are footnote links.
//!
//! ## What does **not** live here
//! - **Fetching.** Pages arrive as strings (saved from a browser or another tool).
//! - **Classification / persistence.** `extract::classifier` decides hard vs.
//!   general; `store` owns the file.
//!
//! ## Typical call chain
//! ```text
//! scrape::crawl_into_store → specs::wiki::read_document(html)
//!                         ↘  extract::extract_record → store::upsert → store::save
//! ```
//!
//! ## Conventions
//! - Tolerant: a missing block yields "nothing found", never an error.
//! - Specs are testable **offline** against small HTML fixtures.
pub mod wiki;
