// src/progress.rs

/// Status reporting for one submission (upload, classify, adapt).
/// The GUI writes into its status bar; the CLI prints to stderr.
pub trait Progress {
    /// One line of status, e.g. "Uploading batch.csv…".
    fn log(&mut self, _msg: &str) {}

    /// Called once the backend has answered, whatever the outcome.
    fn finish(&mut self) {}
}
