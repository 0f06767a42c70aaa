// src/progress.rs
/// Lightweight progress reporting used by the crawl pipeline.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of mentions to classify.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one mention was classified (hard or general).
    fn item_done(&mut self, _name: &str) {}

    /// Called when a mention or entry was rejected.
    fn item_skipped(&mut self, _name: &str, _why: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
