// src/data.rs
//! Shared shapes: what goes to the backend and what comes back.
//!
//! Both backend answers (JSON for a single URL, an HTML table for a CSV batch)
//! end up as `FeatureRecord`s, so the results view and the exporter only deal
//! with one row type.

use std::fmt;
use std::path::Path;

use crate::config::consts::{PREDICTION_COLUMNS, SENTINEL_LEGITIMATE, SENTINEL_PHISHING};

/* ---------------- Requests ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnalysisRequest {
    Url(String),
    Csv(CsvUpload),
}

impl AnalysisRequest {
    pub fn mode(&self) -> &'static str {
        match self {
            AnalysisRequest::Url(_) => "url",
            AnalysisRequest::Csv(_) => "csv",
        }
    }
}

/// A CSV file already read into memory, ready for the multipart body.
#[derive(Clone, PartialEq, Eq)]
pub struct CsvUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl CsvUpload {
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| s!("upload.csv"));
        Ok(Self { file_name, bytes })
    }
}

impl fmt::Debug for CsvUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CsvUpload")
            .field("file_name", &self.file_name)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/* ---------------- Values & records ---------------- */

/// A single cell. JSON numbers are kept as sent (`1` stays `1`, not `1.0`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeatureValue {
    Number(serde_json::Number),
    Text(String),
}

impl FeatureValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FeatureValue::Number(n) => n.as_f64(),
            FeatureValue::Text(t) => t.trim().parse().ok(),
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Number(n) => write!(f, "{n}"),
            FeatureValue::Text(t) => f.write_str(t),
        }
    }
}

impl From<&str> for FeatureValue {
    fn from(s: &str) -> Self {
        FeatureValue::Text(s!(s))
    }
}

impl From<String> for FeatureValue {
    fn from(s: String) -> Self {
        FeatureValue::Text(s)
    }
}

impl From<serde_json::Value> for FeatureValue {
    fn from(v: serde_json::Value) -> Self {
        use serde_json::Value;
        match v {
            Value::Number(n) => FeatureValue::Number(n),
            Value::String(s) => FeatureValue::Text(s),
            Value::Null => FeatureValue::Text(s!()),
            other => FeatureValue::Text(other.to_string()),
        }
    }
}

/// One row: feature name -> value, in the order the backend gave them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeatureRecord {
    fields: Vec<(String, FeatureValue)>,
}

impl FeatureRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces in place if the key exists, otherwise appends.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FeatureValue>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FeatureValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Cell as export text; missing keys export empty.
    pub fn cell(&self, key: &str) -> String {
        self.get(key).map(|v| v.to_string()).unwrap_or_default()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The label column, whichever name the backend used.
    pub fn prediction_field(&self) -> Option<&FeatureValue> {
        PREDICTION_COLUMNS.iter().find_map(|name| self.get(name))
    }

    pub fn prediction(&self) -> Option<Prediction> {
        self.prediction_field().and_then(Prediction::from_sentinel)
    }
}

impl<K, V> FromIterator<(K, V)> for FeatureRecord
where
    K: Into<String>,
    V: Into<FeatureValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut rec = FeatureRecord::new();
        for (k, v) in iter {
            rec.insert(k, v);
        }
        rec
    }
}

/* ---------------- Predictions ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Prediction {
    Phishing,
    Legitimate,
}

impl Prediction {
    /// Batch rows: exactly -1 or 1, anything else is not ours to guess.
    pub fn from_sentinel(v: &FeatureValue) -> Option<Self> {
        let n = v.as_f64()?;
        if n == SENTINEL_PHISHING as f64 {
            Some(Prediction::Phishing)
        } else if n == SENTINEL_LEGITIMATE as f64 {
            Some(Prediction::Legitimate)
        } else {
            None
        }
    }

    /// Single URL: exactly 1 is legitimate, everything else (0, -1, 0.5) is phishing.
    pub fn from_url_value(v: f64) -> Self {
        if v == SENTINEL_LEGITIMATE as f64 { Prediction::Legitimate } else { Prediction::Phishing }
    }

    pub fn label(self) -> &'static str {
        match self {
            Prediction::Phishing => "Phishing",
            Prediction::Legitimate => "Legitimate",
        }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The backend sends "High"/"Medium"; a numeric score is accepted as well.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(untagged)]
pub enum Confidence {
    Score(f64),
    Label(String),
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::Score(x) => write!(f, "{x}"),
            Confidence::Label(l) => f.write_str(l),
        }
    }
}

/* ---------------- Results ---------------- */

#[derive(Clone, Debug, PartialEq)]
pub struct UrlAnalysis {
    pub url: String,
    /// Raw value as sent; never rounded
    pub prediction_value: f64,
    /// Label as sent by the backend, if any
    pub prediction_label: Option<String>,
    pub confidence: Confidence,
    pub features: FeatureRecord,
}

impl UrlAnalysis {
    pub fn prediction(&self) -> Prediction {
        Prediction::from_url_value(self.prediction_value)
    }

    /// What goes in the export's Prediction column.
    pub fn export_label(&self) -> String {
        self.prediction_label
            .clone()
            .unwrap_or_else(|| s!(self.prediction().label()))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchAnalysis {
    pub headers: Vec<String>,
    pub rows: Vec<FeatureRecord>,
}

impl BatchAnalysis {
    /// First header that names a prediction column.
    pub fn prediction_header(&self) -> Option<&str> {
        self.headers
            .iter()
            .map(String::as_str)
            .find(|h| PREDICTION_COLUMNS.contains(h))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AnalysisResult {
    Single(UrlAnalysis),
    Batch(BatchAnalysis),
}

impl AnalysisResult {
    pub fn row_count(&self) -> usize {
        match self {
            AnalysisResult::Single(_) => 1,
            AnalysisResult::Batch(b) => b.rows.len(),
        }
    }
}
