// src/gui/app.rs
use std::{
    error::Error,
    path::PathBuf,
    sync::{mpsc, Arc, Mutex},
    thread,
};

use eframe::egui;

use crate::{
    cache::{LookupCache, LookupError},
    config::state::AppState,
    gui::progress::GuiProgress,
    record::ChampionRecord,
    scrape::{self, CrawlOutcome},
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Champion Counters",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

/// A finished crawl, with the champion it was started for.
struct CrawlDone {
    champion: String,
    result: Result<CrawlOutcome, String>,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    pub cache: LookupCache,

    /// Store keys in load order (left panel)
    pub keys: Vec<String>,

    /// Record in the central panel; `None` with `selected` set means not found
    pub shown: Option<Arc<ChampionRecord>>,

    // status/progress (the crawl worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    crawl_rx: Option<mpsc::Receiver<CrawlDone>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let cache = LookupCache::new(state.options.store.path());
        let mut app = Self {
            state,
            cache,
            keys: Vec::new(),
            shown: None,
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            crawl_rx: None,
        };
        app.reload();
        logf!("Init: store={}, keys={}", app.cache.path().display(), app.keys.len());
        app
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Re-read the store and refresh the list (and the shown record).
    pub fn reload(&mut self) {
        self.cache.invalidate();
        match self.cache.index() {
            Ok(idx) => {
                self.keys = idx.keys().to_vec();
                self.status(format!("Loaded {} champion(s)", self.keys.len()));
            }
            Err(e) => {
                loge!("Store: {}", e);
                self.keys.clear();
                self.status(format!("Error: {e}"));
            }
        }
        if let Some(sel) = self.state.gui.selected.clone() {
            self.lookup(&sel);
        }
    }

    /// Show `name` in the central panel.
    pub fn lookup(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        self.state.gui.selected = Some(s!(name));
        match self.cache.query(name) {
            Ok(rec) => {
                logd!("UI: lookup '{}' → '{}'", name, rec.champion);
                self.shown = Some(rec);
            }
            Err(LookupError::Query(e)) => {
                logd!("UI: lookup {}", e);
                self.shown = None;
                self.status(format!("'{}'에 대한 정보가 없습니다.", name));
            }
            Err(LookupError::Store(e)) => {
                loge!("Store: {}", e);
                self.shown = None;
                self.status(format!("Error: {e}"));
            }
        }
    }

    /// Run one crawl on a worker thread; the result is picked up in `poll_crawl`.
    pub fn start_crawl(&mut self, ctx: &egui::Context) {
        if self.running {
            return;
        }
        let html = PathBuf::from(self.state.gui.crawl_html_path.trim());
        let champion = s!(self.state.gui.crawl_champion.trim());
        if html.as_os_str().is_empty() || champion.is_empty() {
            self.status("HTML file and champion name are both required");
            return;
        }

        let options = self.state.options.clone();
        let status = Arc::clone(&self.status);
        let ctx = ctx.clone();
        let (tx, rx) = mpsc::channel::<CrawlDone>();

        logf!("Crawl: Begin (GUI) champion='{}' page={}", champion, html.display());
        self.running = true;
        self.crawl_rx = Some(rx);
        self.status(format!("Crawling {}…", champion));

        thread::spawn(move || {
            let mut prog = GuiProgress::new(status);
            let result = scrape::crawl_into_store(&html, &champion, &options, Some(&mut prog))
                .map_err(|e| e.to_string());
            let _ = tx.send(CrawlDone { champion, result });
            ctx.request_repaint();
        });
    }

    /// Collect a finished crawl, if any.
    pub fn poll_crawl(&mut self) {
        let Some(rx) = &self.crawl_rx else { return };
        let received = rx.try_recv();
        let CrawlDone { champion, result } = match received {
            Ok(done) => done,
            Err(mpsc::TryRecvError::Empty) => return,
            Err(mpsc::TryRecvError::Disconnected) => {
                self.crawl_rx = None;
                self.running = false;
                loge!("Crawl: worker stopped without a result");
                self.status("Error: crawl worker stopped");
                return;
            }
        };
        self.crawl_rx = None;
        self.running = false;

        // `champion` is the crawled name; the form may have changed since
        match result {
            Ok(CrawlOutcome::NothingExtracted) => {
                self.status(format!("{}: 추출된 데이터 없음", champion));
            }
            Ok(outcome) => {
                logf!("Crawl: OK (GUI) {:?}", outcome);
                self.state.gui.selected = Some(champion.clone());
                self.reload();
                self.status(format!("{}: saved ({:?})", champion, outcome));
            }
            Err(e) => {
                loge!("Crawl: Error: {}", e);
                self.status(format!("Error: {e}"));
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_crawl();

        egui::TopBottomPanel::top("search").show(ctx, |ui| {
            crate::gui::components::search_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("crawl").show(ctx, |ui| {
            crate::gui::components::crawl_bar::draw(ui, self);
        });

        egui::SidePanel::left("champions")
            .resizable(true)
            .default_width(160.0)
            .show(ctx, |ui| {
                crate::gui::components::champion_list::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::counter_view::draw(ui, self);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn finished_crawl_reports_the_champion_it_was_started_for() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut state = AppState::default();
        state.options.store.set_path(dir.path().join("top.json").to_str().unwrap());
        state.gui.crawl_html_path =
            s!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/counters_page.html"));
        state.gui.crawl_champion = s!("나르");

        let mut app = App::new(state);
        let ctx = egui::Context::default();
        app.start_crawl(&ctx);
        assert!(app.running);
        app.state.gui.crawl_champion = s!("갈리오");

        let deadline = Instant::now() + Duration::from_secs(10);
        while app.running && Instant::now() < deadline {
            app.poll_crawl();
            thread::sleep(Duration::from_millis(5));
        }
        assert!(!app.running);
        assert_eq!(app.state.gui.selected.as_deref(), Some("나르"));
        assert_eq!(app.shown.as_ref().map(|r| r.champion.as_str()), Some("나르"));
        assert!(app.status_text().starts_with("나르: saved"), "{}", app.status_text());
        assert_eq!(app.keys, vec![s!("나르")]);
    }
}
