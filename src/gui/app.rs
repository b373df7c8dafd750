// src/gui/app.rs
use std::{
    error::Error,
    sync::{
        Arc, Mutex,
        mpsc::{self, Receiver, TryRecvError},
    },
    thread,
};

use eframe::egui;

use crate::{
    config::state::AppState,
    core::HttpBackend,
    data::AnalysisResult,
    error::AnalysisError,
    panel::{self, InputPanel},
    results::{Preview, Summary},
};

use super::progress::GuiProgress;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Phishing Detector",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::from_env())))),
    )?;
    Ok(())
}

/// A finished analysis plus what we derived from it for display.
pub struct Shown {
    pub result: AnalysisResult,
    pub summary: Summary,
    pub preview: Preview,
}

impl Shown {
    pub fn new(result: AnalysisResult) -> Self {
        let summary = Summary::of(&result);
        let preview = Preview::of(&result);
        Self { result, summary, preview }
    }
}

type Outcome = Result<AnalysisResult, AnalysisError>;

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub panel: InputPanel,

    // backend URL text field; applied on submit
    pub backend_text: String,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // current result; None = show the input panel
    pub shown: Option<Shown>,

    // blocking notification
    pub alert: Option<String>,

    // status/progress (worker writes here)
    pub status: Arc<Mutex<String>>,
    pending: Option<Receiver<Outcome>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let backend_text = s!(state.options.backend.base_url());
        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();

        logf!("Init: backend={} export={}", backend_text, out_path_text);

        Self {
            state,
            panel: InputPanel::new(),
            backend_text,
            out_path_text,
            out_path_dirty: false,
            shown: None,
            alert: None,
            status: Arc::new(Mutex::new(s!("Idle"))),
            pending: None,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    #[inline]
    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    #[inline]
    pub fn is_busy(&self) -> bool {
        self.panel.is_busy()
    }

    pub fn fail(&mut self, e: &AnalysisError) {
        let msg = match e {
            AnalysisError::Input(m) => m.clone(),
            other if other.is_transport() => format!(
                "Error analyzing {}: {}\n\nCheck that the backend at {} is running.",
                self.subject(),
                other,
                self.state.options.backend.base_url()
            ),
            other => format!("Error analyzing {}: {}", self.subject(), other),
        };
        self.status(format!("Error: {e}"));
        self.alert = Some(msg);
    }

    fn subject(&self) -> &'static str {
        match self.panel.mode {
            panel::InputMode::Url => "URL",
            panel::InputMode::Csv => "file",
        }
    }

    /// Kick off one analysis on a worker thread. Validation errors never
    /// leave the UI thread.
    pub fn submit(&mut self, ctx: &egui::Context) {
        self.state.options.backend.set_base_url(&self.backend_text);
        self.backend_text = s!(self.state.options.backend.base_url());

        let req = match self.panel.begin() {
            Ok(r) => r,
            Err(e) => {
                logd!("Submit: Rejected: {}", e);
                return self.fail(&e);
            }
        };

        let backend = match HttpBackend::new(&self.state.options.backend) {
            Ok(b) => b,
            Err(e) => {
                self.panel.finish();
                return self.fail(&e);
            }
        };

        let (tx, rx) = mpsc::channel();
        let status = self.status.clone();
        let ctx2 = ctx.clone();

        thread::spawn(move || {
            let mut prog = GuiProgress::new(status);
            let res = panel::analyze(&backend, &req, Some(&mut prog));
            // Receiver gone means the window closed; nothing left to tell.
            let _ = tx.send(res);
            ctx2.request_repaint();
        });

        self.pending = Some(rx);
    }

    /// Pick up the worker's answer, if it arrived.
    pub fn poll(&mut self) {
        let Some(rx) = &self.pending else { return };
        let outcome = match rx.try_recv() {
            Ok(o) => o,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                Err(AnalysisError::input("Analysis worker stopped unexpectedly"))
            }
        };

        self.pending = None;
        self.panel.finish();

        match outcome {
            Ok(result) => {
                let shown = Shown::new(result);
                self.status(format!(
                    "Ready: {} analyzed, {} phishing, {} legitimate",
                    shown.summary.total, shown.summary.phishing, shown.summary.legitimate
                ));
                self.shown = Some(shown);
            }
            Err(e) => self.fail(&e),
        }
    }

    /// Drop the current result and go back to the input panel.
    pub fn new_analysis(&mut self) {
        logf!("UI: New analysis");
        self.shown = None;
        self.panel.reset();
        self.status("Idle");
    }

    /// Mirror the output text field → ExportOptions.
    pub fn sync_out_path(&mut self) {
        if self.out_path_dirty {
            self.state.options.export.set_path(&self.out_path_text);
            self.out_path_text = self.state.options.export.out_path().to_string_lossy().into_owned();
            self.out_path_dirty = false;
            logf!("Export: Out path set → {}", self.out_path_text);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            super::components::header::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(format!("Status: {}", self.status_text()));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let enabled = self.alert.is_none();
            ui.add_enabled_ui(enabled, |ui| {
                if self.shown.is_none() {
                    super::components::input_panel::draw(ui, self);
                } else {
                    super::components::stats::draw(ui, self);
                    ui.separator();
                    super::components::export_bar::draw(ui, self);
                    ui.separator();
                    super::components::data_table::draw(ui, self);
                }
            });
        });

        super::components::alert::draw(ctx, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::InputMode;

    fn app() -> App {
        App::new(AppState::default())
    }

    #[test]
    fn submit_shows_the_normalized_backend_url() {
        let mut app = app();
        app.backend_text = s!("  http://ml.test:9000/// ");
        app.submit(&egui::Context::default());

        assert_eq!(app.backend_text, "http://ml.test:9000");
        assert_eq!(app.state.options.backend.base_url(), "http://ml.test:9000");
        // empty URL: rejected before any worker starts
        assert_eq!(app.alert.as_deref(), Some("Please enter a URL"));
        assert!(app.pending.is_none());
        assert!(!app.is_busy());
    }

    #[test]
    fn transport_failures_point_at_the_backend() {
        let mut app = app();
        app.panel.mode = InputMode::Csv;
        app.fail(&AnalysisError::Status { status: 502, url: s!("http://localhost:8000/predict") });
        let msg = app.alert.take().unwrap();
        assert!(msg.starts_with("Error analyzing file: HTTP error! status: 502"));
        assert!(msg.contains("backend at http://localhost:8000 is running"));

        app.fail(&AnalysisError::parse("No table found in response"));
        let msg = app.alert.take().unwrap();
        assert_eq!(msg, "Error analyzing file: unexpected response: No table found in response");
    }
}
