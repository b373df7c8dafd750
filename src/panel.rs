// src/panel.rs
//! Input side of an analysis: which mode is active, what the user entered, and
//! whether a request is already out.
//!
//! Validation happens before anything touches the network: an empty URL or a
//! missing file is reported as `AnalysisError::Input` and the backend is never
//! called. While a request is in flight a second submit is refused.

use std::path::PathBuf;

use crate::{
    adapter,
    core::Backend,
    data::{AnalysisRequest, AnalysisResult, CsvUpload},
    error::AnalysisError,
    export,
    progress::Progress,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InputMode {
    #[default]
    Url,
    Csv,
}

impl InputMode {
    pub fn title(self) -> &'static str {
        match self {
            InputMode::Url => "URL Input",
            InputMode::Csv => "CSV Upload",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct InputPanel {
    pub mode: InputMode,
    pub url_input: String,
    pub csv_path: Option<PathBuf>,
    in_flight: bool,
}

impl InputPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    /// Build the request for the active mode. Reads the CSV from disk.
    pub fn request(&self) -> Result<AnalysisRequest, AnalysisError> {
        match self.mode {
            InputMode::Url => {
                let url = self.url_input.trim();
                if url.is_empty() {
                    return Err(AnalysisError::input("Please enter a URL"));
                }
                Ok(AnalysisRequest::Url(s!(url)))
            }
            InputMode::Csv => {
                let path = self
                    .csv_path
                    .as_ref()
                    .ok_or_else(|| AnalysisError::input("Please select a CSV file"))?;
                Ok(AnalysisRequest::Csv(CsvUpload::from_path(path)?))
            }
        }
    }

    /// Validate and mark the panel busy. Pair with `finish`.
    pub fn begin(&mut self) -> Result<AnalysisRequest, AnalysisError> {
        if self.in_flight {
            return Err(AnalysisError::input("An analysis is already running"));
        }
        let req = self.request()?;
        self.in_flight = true;
        logf!("Submit: Begin mode={}", req.mode());
        Ok(req)
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    /// Synchronous submit: validate, call the backend once, adapt, go idle.
    pub fn submit<B: Backend + ?Sized>(
        &mut self,
        backend: &B,
        progress: Option<&mut dyn Progress>,
    ) -> Result<AnalysisResult, AnalysisError> {
        let req = self.begin()?;
        let res = analyze(backend, &req, progress);
        self.finish();
        res
    }

    /// "New analysis": clear inputs, keep the active tab.
    pub fn reset(&mut self) {
        self.url_input.clear();
        self.csv_path = None;
        self.in_flight = false;
    }
}

/// One request → one backend call → one result. No retries.
pub fn analyze<B: Backend + ?Sized>(
    backend: &B,
    req: &AnalysisRequest,
    mut progress: Option<&mut dyn Progress>,
) -> Result<AnalysisResult, AnalysisError> {
    let mut say = |msg: &str| {
        if let Some(p) = progress.as_deref_mut() {
            p.log(msg);
        }
    };

    let res = match req {
        AnalysisRequest::Url(url) => {
            say(&format!("Analyzing {url}…"));
            backend.predict_url(url).and_then(|body| adapter::parse_url_response(&body))
        }
        AnalysisRequest::Csv(upload) => {
            match export::inspect_upload(&upload.bytes) {
                Ok(shape) if !shape.has_expected_columns() => logw!(
                    "Submit: {} has {} column(s), backend expects {}",
                    upload.file_name,
                    shape.columns,
                    crate::config::consts::FEATURE_COUNT
                ),
                Ok(shape) => logd!("Submit: {} rows={}", upload.file_name, shape.rows),
                Err(e) => logw!("Submit: could not inspect {}: {}", upload.file_name, e),
            }
            say(&format!("Uploading {}…", upload.file_name));
            backend.predict_csv(upload).and_then(|body| adapter::parse_table_html(&body))
        }
    };

    match &res {
        Ok(r) => logf!("Submit: OK mode={} rows={}", req.mode(), r.row_count()),
        Err(e) => loge!("Submit: Error mode={}: {}", req.mode(), e),
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    res
}
