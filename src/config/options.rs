// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub backend: BackendOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    /// Defaults, overridden by `PHISHLENS_BACKEND_URL` / `PHISHLENS_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        let mut opts = Self::default();
        opts.backend.apply_env(|k| std::env::var(k).ok());
        opts
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendOptions {
    base_url: String,
    /// None = wait for the backend as long as it takes.
    pub timeout: Option<Duration>,
}

impl Default for BackendOptions {
    fn default() -> Self {
        Self {
            base_url: s!(DEFAULT_BACKEND_URL),
            timeout: None,
        }
    }
}

impl BackendOptions {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Self {
        let mut o = Self { base_url: s!(), timeout };
        o.set_base_url(base_url);
        o
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Trailing slashes dropped so endpoint paths join cleanly.
    pub fn set_base_url(&mut self, url: &str) {
        let trimmed = url.trim().trim_end_matches('/');
        self.base_url = if trimmed.is_empty() { s!(DEFAULT_BACKEND_URL) } else { s!(trimmed) };
    }

    pub fn endpoint(&self, path: &str) -> String {
        join!(&self.base_url, path)
    }

    /// Environment lookup is injected so tests don't touch the process env.
    pub fn apply_env<F>(&mut self, get: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = get(ENV_BACKEND_URL) {
            self.set_base_url(&url);
        }
        if let Some(secs) = get(ENV_TIMEOUT_SECS) {
            match secs.trim().parse::<u64>() {
                Ok(0) => self.timeout = None,
                Ok(n) => self.timeout = Some(Duration::from_secs(n)),
                Err(_) => logw!("Config: ignoring {}={:?} (not a number)", ENV_TIMEOUT_SECS, secs),
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_path: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_path: PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_EXPORT_FILE),
        }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> &Path {
        &self.out_path
    }

    /// Accepts what the user typed. Empty keeps the default; a trailing
    /// separator means "directory" and gets the default file name.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out_path = Self::default().out_path;
            return;
        }
        self.out_path = crate::file::resolve_out_path(s, DEFAULT_EXPORT_FILE);
    }
}
