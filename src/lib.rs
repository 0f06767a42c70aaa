// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod extract;
pub mod progress;
pub mod specs;

pub mod cache;
pub mod gui;
pub mod index;
pub mod record;
pub mod render;
pub mod scrape;
pub mod store;
