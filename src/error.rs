// src/error.rs
use thiserror::Error;

/// Everything that can go wrong between pressing "Analyze" and seeing results.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Nothing to submit (empty URL, no file chosen) or a request already running.
    #[error("{0}")]
    Input(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error! status: {status} ({url})")]
    Status { status: u16, url: String },

    /// The backend answered, but not in the shape we expect.
    #[error("unexpected response: {0}")]
    Parse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl AnalysisError {
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Network or status failure, as opposed to a bad body.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status { .. })
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(format!("invalid JSON body: {e}"))
    }
}
