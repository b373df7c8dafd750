// src/config/state.rs
use std::path::PathBuf;

use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Where the last file dialog was pointed
    pub last_browse_dir: Option<PathBuf>,

    /// Results page -> show the preview table or only the stat cards
    pub show_preview: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 700,
            last_browse_dir: None,
            show_preview: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn from_env() -> Self {
        Self { options: AppOptions::from_env(), gui: GuiState::default() }
    }
}
