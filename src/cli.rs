// src/cli.rs
use std::{
    env, fs,
    io::{self, Read, Write},
    path::PathBuf,
};

use thiserror::Error;

use crate::{
    cache::{LookupCache, LookupError},
    config::options::{AppOptions, StoreLayout},
    extract::{tokenize, tokenizer::render_compact, NameCharset},
    progress::Progress,
    render,
    scrape::{self, CrawlError, CrawlOutcome},
    store::{self, StoreError},
};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Crawl(#[from] CrawlError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

fn usage(msg: impl Into<String>) -> CliError {
    CliError::Usage(msg.into())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Crawl { html: PathBuf, champion: String },
    Parse { file: Option<PathBuf>, into: Option<String> },
    Show { name: Option<String> },
    List,
    Sort,
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub options: AppOptions,
    pub command: Command,
}

/// Parse `env::args()` and execute against stdout.
pub fn run() -> Result<(), CliError> {
    let inv = parse_args(env::args().skip(1))?;
    let stdout = io::stdout();
    execute(&inv, &mut stdout.lock())
}

/// Global flags may appear anywhere; the first bare word is the command.
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Invocation, CliError> {
    let mut options = AppOptions::default();
    let mut command: Option<String> = None;
    let mut words: Vec<String> = Vec::new();
    let mut html: Option<PathBuf> = None;
    let mut champion: Option<String> = None;
    let mut file: Option<PathBuf> = None;
    let mut into: Option<String> = None;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--store" => {
                let v = args.next().ok_or_else(|| usage("Missing value for --store"))?;
                options.store.set_path(&v);
            }
            "--lines" => options.store.layout = StoreLayout::Lines,
            "--charset" => {
                let v = args.next().ok_or_else(|| usage("Missing value for --charset"))?;
                options.extract.charset = NameCharset::from_name(&v)
                    .ok_or_else(|| usage(format!("Unknown charset: {}", v)))?;
            }
            "--summarize" => options.extract.classifier.summarize = true,
            "--html" => html = Some(PathBuf::from(args.next().ok_or_else(|| usage("Missing value for --html"))?)),
            "--champion" => champion = Some(args.next().ok_or_else(|| usage("Missing value for --champion"))?),
            "--file" => file = Some(PathBuf::from(args.next().ok_or_else(|| usage("Missing value for --file"))?)),
            "--into" => into = Some(args.next().ok_or_else(|| usage("Missing value for --into"))?),
            "-h" | "--help" => return Ok(Invocation { options, command: Command::Help }),
            flag if flag.starts_with("--") => return Err(usage(format!("Unknown arg: {}", flag))),
            _ if command.is_none() => command = Some(a.clone()),
            _ => words.push(a.clone()),
        }
    }

    let command = match command.as_deref() {
        None => Command::Help,
        Some("crawl") => {
            let html = html.ok_or_else(|| usage("crawl needs --html <file>"))?;
            let champion = champion
                .filter(|c| !c.trim().is_empty())
                .ok_or_else(|| usage("crawl needs --champion <name>"))?;
            Command::Crawl { html, champion }
        }
        Some("parse") => Command::Parse { file, into },
        Some("show") => {
            let joined = words.join(" ");
            let name = if joined.trim().is_empty() { None } else { Some(s!(joined.trim())) };
            return Ok(Invocation { options, command: Command::Show { name } });
        }
        Some("list") => Command::List,
        Some("sort") => Command::Sort,
        Some(other) => return Err(usage(format!("Unknown command: {}", other))),
    };

    if !words.is_empty() {
        return Err(usage(format!("Unexpected argument: {}", words[0])));
    }
    Ok(Invocation { options, command })
}

pub fn execute(inv: &Invocation, out: &mut dyn Write) -> Result<(), CliError> {
    let options = &inv.options;
    match &inv.command {
        Command::Help => {
            write!(out, "{}", include_str!("cli_help.txt"))?;
        }

        Command::Crawl { html, champion } => {
            let mut prog = CliProgress::default();
            let outcome = scrape::crawl_into_store(html, champion, options, Some(&mut prog))?;
            let store_path = options.store.path().display();
            match outcome {
                CrawlOutcome::NothingExtracted => {
                    writeln!(out, "{}: 추출된 데이터 없음 (store unchanged)", champion)?
                }
                CrawlOutcome::Replaced { index } => {
                    writeln!(out, "{}: 기존 데이터 업데이트 (#{}) → {}", champion, index, store_path)?
                }
                CrawlOutcome::Appended { index } => {
                    writeln!(out, "{}: 새 데이터 추가 (#{}) → {}", champion, index, store_path)?
                }
            }
        }

        Command::Parse { file, into } => {
            let raw = match file {
                Some(path) => fs::read_to_string(path)?,
                None => {
                    let mut buf = s!();
                    io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let result = tokenize(&raw, &options.extract.charset);
            for skip in &result.skipped {
                eprintln!("skipped line {}: {}…", skip.line, skip.excerpt);
            }
            writeln!(out, "{}", render_compact(&result.pairs))?;

            if let Some(champion) = into {
                let outcome = scrape::merge_pairs_into_store(&options.store, champion, &result.pairs)?;
                eprintln!("{} pair(s) → {} ({:?})", result.pairs.len(), champion, outcome);
            }
        }

        Command::Show { name } => {
            let mut cache = LookupCache::new(options.store.path());
            let key = match name {
                Some(n) => n.clone(),
                // the last record in the file, even when its key repeats an earlier one
                None => {
                    let records = store::load(options.store.path())?;
                    match records.last() {
                        Some(r) => r.champion.clone(),
                        None => {
                            writeln!(out, "저장된 데이터가 없습니다.")?;
                            return Ok(());
                        }
                    }
                }
            };
            let record = cache.query(&key)?;
            write!(out, "{}", render::record_md(&record))?;
        }

        Command::List => {
            let records = store::load(options.store.path())?;
            for r in &records {
                match &r.alias_of {
                    Some(target) => writeln!(out, "{} → {}", r.champion, target)?,
                    None => writeln!(out, "{}", r.champion)?,
                }
            }
        }

        Command::Sort => {
            let mut records = store::load(options.store.path())?;
            store::sort_by_key(&mut records);
            store::save(options.store.path(), &records, options.store.layout)?;
            writeln!(out, "sorted {} record(s)", records.len())?;
        }
    }
    Ok(())
}

/// Progress sink that writes to stderr.
#[derive(Default)]
pub struct CliProgress {
    done: usize,
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }
    fn item_done(&mut self, _name: &str) {
        self.done += 1;
    }
    fn item_skipped(&mut self, name: &str, why: &str) {
        eprintln!("skipped '{}': {}", name, why);
    }
    fn finish(&mut self) {
        eprintln!("classified {}/{} mention(s)", self.done, self.total);
    }
}
