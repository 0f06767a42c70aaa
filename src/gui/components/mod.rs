// src/gui/components/mod.rs
pub mod champion_list;
pub mod counter_view;
pub mod crawl_bar;
pub mod search_bar;
