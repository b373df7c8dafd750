// tests/submit_flow.rs
//
// Drives InputPanel against a fake backend: validation, one call per
// submit, errors returning the panel to idle.
mod common;

use std::cell::{Cell, RefCell};
use std::fs;

use phish_lens::core::Backend;
use phish_lens::data::{AnalysisRequest, AnalysisResult, CsvUpload, Prediction};
use phish_lens::panel::{analyze, InputMode, InputPanel};
use phish_lens::progress::Progress;
use phish_lens::AnalysisError;

#[derive(Default)]
struct FakeBackend {
    calls: Cell<usize>,
    last_upload: RefCell<Option<CsvUpload>>,
    url_body: String,
    csv_body: String,
    fail_status: Option<u16>,
}

impl FakeBackend {
    fn answer(&self, body: &str) -> Result<String, AnalysisError> {
        self.calls.set(self.calls.get() + 1);
        match self.fail_status {
            Some(status) => Err(AnalysisError::Status { status, url: "http://fake/".into() }),
            None => Ok(body.to_string()),
        }
    }
}

impl Backend for FakeBackend {
    fn predict_url(&self, _url: &str) -> Result<String, AnalysisError> {
        self.answer(&self.url_body)
    }
    fn predict_csv(&self, upload: &CsvUpload) -> Result<String, AnalysisError> {
        *self.last_upload.borrow_mut() = Some(upload.clone());
        self.answer(&self.csv_body)
    }
    fn train(&self) -> Result<String, AnalysisError> {
        self.answer("Training is successful")
    }
}

#[derive(Default)]
struct Recorder {
    lines: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn log(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}

#[test]
fn empty_url_never_calls_backend() {
    let backend = FakeBackend::default();
    let mut panel = InputPanel::new();
    panel.url_input = "   ".into();

    let err = panel.submit(&backend, None).unwrap_err();
    assert!(matches!(err, AnalysisError::Input(ref m) if m == "Please enter a URL"));
    assert_eq!(backend.calls.get(), 0);
    assert!(!panel.is_busy());
}

#[test]
fn missing_file_never_calls_backend() {
    let backend = FakeBackend::default();
    let mut panel = InputPanel::new();
    panel.mode = InputMode::Csv;

    let err = panel.submit(&backend, None).unwrap_err();
    assert!(matches!(err, AnalysisError::Input(ref m) if m == "Please select a CSV file"));
    assert_eq!(backend.calls.get(), 0);
}

#[test]
fn unreadable_file_never_calls_backend() {
    let tmp = tempfile::tempdir().unwrap();
    let backend = FakeBackend::default();
    let mut panel = InputPanel::new();
    panel.mode = InputMode::Csv;
    panel.csv_path = Some(tmp.path().join("missing.csv"));

    let err = panel.submit(&backend, None).unwrap_err();
    assert!(matches!(err, AnalysisError::Io(_)));
    assert_eq!(backend.calls.get(), 0);
    assert!(!panel.is_busy());
}

#[test]
fn url_submit_makes_one_call_and_adapts_json() {
    let backend = FakeBackend {
        url_body: common::url_json("https://example.com", 1),
        ..FakeBackend::default()
    };
    let mut panel = InputPanel::new();
    panel.url_input = "  https://example.com ".into();

    let mut rec = Recorder::default();
    let res = panel.submit(&backend, Some(&mut rec)).unwrap();

    assert_eq!(backend.calls.get(), 1);
    assert!(!panel.is_busy());
    assert!(rec.finished);
    assert!(rec.lines.iter().any(|l| l.contains("https://example.com")));
    let AnalysisResult::Single(u) = res else { panic!("expected single") };
    assert_eq!(u.prediction(), Prediction::Legitimate);
}

#[test]
fn csv_submit_uploads_file_bytes_and_name() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("batch.csv");
    let mut csv = common::FEATURES.join(",");
    csv.push('\n');
    csv.push_str(&vec!["1"; 30].join(","));
    csv.push('\n');
    fs::write(&path, &csv).unwrap();

    let backend = FakeBackend {
        csv_body: common::pandas_table(&["-1"]),
        ..FakeBackend::default()
    };
    let mut panel = InputPanel::new();
    panel.mode = InputMode::Csv;
    panel.csv_path = Some(path);

    let res = panel.submit(&backend, None).unwrap();
    assert_eq!(backend.calls.get(), 1);

    let sent = backend.last_upload.borrow().clone().unwrap();
    assert_eq!(sent.file_name, "batch.csv");
    assert_eq!(sent.bytes, csv.into_bytes());

    let AnalysisResult::Batch(b) = res else { panic!("expected batch") };
    assert_eq!(b.rows.len(), 1);
}

#[test]
fn transport_error_returns_to_idle_without_retry() {
    let backend = FakeBackend { fail_status: Some(500), ..FakeBackend::default() };
    let mut panel = InputPanel::new();
    panel.url_input = "https://example.com".into();

    let err = panel.submit(&backend, None).unwrap_err();
    assert!(err.is_transport());
    assert_eq!(err.to_string(), "HTTP error! status: 500 (http://fake/)");
    assert_eq!(backend.calls.get(), 1);
    assert!(!panel.is_busy());

    // Inputs survive a failure so the user can try again.
    assert_eq!(panel.url_input, "https://example.com");
}

#[test]
fn html_without_table_is_a_parse_error() {
    let backend = FakeBackend {
        csv_body: "<html><body>Internal error</body></html>".into(),
        ..FakeBackend::default()
    };
    let req = AnalysisRequest::Csv(CsvUpload { file_name: "x.csv".into(), bytes: b"a\n1\n".to_vec() });
    let err = analyze(&backend, &req, None).unwrap_err();
    assert!(matches!(err, AnalysisError::Parse(_)));
    assert_eq!(backend.calls.get(), 1);
}

#[test]
fn second_submit_while_busy_is_refused() {
    let backend = FakeBackend::default();
    let mut panel = InputPanel::new();
    panel.url_input = "https://example.com".into();

    let req = panel.begin().unwrap();
    assert_eq!(req, AnalysisRequest::Url("https://example.com".into()));
    assert!(panel.is_busy());

    let err = panel.submit(&backend, None).unwrap_err();
    assert!(matches!(err, AnalysisError::Input(_)));
    assert_eq!(backend.calls.get(), 0);

    panel.finish();
    assert!(!panel.is_busy());
}

#[test]
fn reset_clears_inputs_but_keeps_mode() {
    let mut panel = InputPanel::new();
    panel.mode = InputMode::Csv;
    panel.url_input = "x".into();
    panel.csv_path = Some("a.csv".into());
    panel.reset();
    assert_eq!(panel.mode, InputMode::Csv);
    assert!(panel.url_input.is_empty());
    assert!(panel.csv_path.is_none());
}
