// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Text in the lookup field
    pub query: String,

    /// Champion currently shown in the central panel
    pub selected: Option<String>,

    /// Filter for the left-hand champion list
    pub list_filter: String,

    /// Crawl bar inputs
    pub crawl_html_path: String,
    pub crawl_champion: String,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            query: s!(),
            selected: None,
            list_filter: s!(),
            crawl_html_path: s!(),
            crawl_champion: s!(),
            window_w: 960,
            window_h: 640,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
