// src/results.rs
//! Stat summary and the bounded preview shown after an analysis.
//!
//! The preview caps how many columns/features get rendered; it never touches
//! the records themselves, so export still sees everything.

use crate::{
    config::consts::{PREVIEW_BATCH_COLUMNS, PREVIEW_SINGLE_FEATURES},
    data::{AnalysisResult, BatchAnalysis, Prediction, UrlAnalysis},
};

pub const ELLIPSIS: &str = "...";
pub const PREDICTION_HEADER: &str = "Prediction";
pub const UNKNOWN_LABEL: &str = "Unknown";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub phishing: usize,
    pub legitimate: usize,
}

impl Summary {
    pub fn of(result: &AnalysisResult) -> Self {
        match result {
            AnalysisResult::Single(u) => Self::of_single(u),
            AnalysisResult::Batch(b) => Self::of_batch(b),
        }
    }

    pub fn of_single(u: &UrlAnalysis) -> Self {
        let p = u.prediction();
        Self {
            total: 1,
            phishing: usize::from(p == Prediction::Phishing),
            legitimate: usize::from(p == Prediction::Legitimate),
        }
    }

    /// Rows without a recognized sentinel count toward `total` only.
    pub fn of_batch(b: &BatchAnalysis) -> Self {
        let mut s = Self { total: b.rows.len(), ..Self::default() };
        for row in &b.rows {
            match row.prediction() {
                Some(Prediction::Phishing) => s.phishing += 1,
                Some(Prediction::Legitimate) => s.legitimate += 1,
                None => {}
            }
        }
        s
    }

    pub fn unrecognized(&self) -> usize {
        self.total - self.phishing - self.legitimate
    }

    pub fn phishing_pct(&self) -> f64 {
        pct(self.phishing, self.total)
    }

    pub fn legitimate_pct(&self) -> f64 {
        pct(self.legitimate, self.total)
    }
}

fn pct(n: usize, total: usize) -> f64 {
    if total == 0 { 0.0 } else { n as f64 * 100.0 / total as f64 }
}

/// One displayed line. `prediction` drives the badge color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewRow {
    pub cells: Vec<String>,
    pub prediction: Option<Prediction>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preview {
    pub headers: Vec<String>,
    pub rows: Vec<PreviewRow>,
    /// Single mode: features left out of the table
    pub more_features: usize,
    /// Batch mode: feature columns left out of the table
    pub hidden_columns: usize,
}

impl Preview {
    pub fn of(result: &AnalysisResult) -> Self {
        match result {
            AnalysisResult::Single(u) => Self::of_single(u),
            AnalysisResult::Batch(b) => Self::of_batch(b),
        }
    }

    /// Feature / Value table: first few features, then the final prediction.
    pub fn of_single(u: &UrlAnalysis) -> Self {
        let mut rows: Vec<PreviewRow> = u
            .features
            .iter()
            .take(PREVIEW_SINGLE_FEATURES)
            .map(|(k, v)| PreviewRow { cells: vec![s!(k), v.to_string()], prediction: None })
            .collect();

        let shown = rows.len();
        let p = u.prediction();
        rows.push(PreviewRow {
            cells: vec![s!("Final Prediction"), s!(p.label())],
            prediction: Some(p),
        });

        Self {
            headers: vec![s!("Feature"), s!("Value")],
            rows,
            more_features: u.features.len() - shown,
            hidden_columns: 0,
        }
    }

    /// First few feature columns, "..." if more exist, then the prediction badge.
    pub fn of_batch(b: &BatchAnalysis) -> Self {
        let pred_col = b.prediction_header();
        let features: Vec<&String> = b
            .headers
            .iter()
            .filter(|h| Some(h.as_str()) != pred_col)
            .collect();

        let shown: Vec<&String> = features.iter().copied().take(PREVIEW_BATCH_COLUMNS).collect();
        let hidden = features.len() - shown.len();

        let mut headers: Vec<String> = shown.iter().map(|h| (*h).clone()).collect();
        if hidden > 0 {
            headers.push(s!(ELLIPSIS));
        }
        headers.push(s!(PREDICTION_HEADER));

        let rows = b
            .rows
            .iter()
            .map(|rec| {
                let mut cells: Vec<String> = shown.iter().map(|h| rec.cell(h)).collect();
                if hidden > 0 {
                    cells.push(s!(ELLIPSIS));
                }
                let prediction = rec.prediction();
                cells.push(s!(prediction.map(Prediction::label).unwrap_or(UNKNOWN_LABEL)));
                PreviewRow { cells, prediction }
            })
            .collect();

        Self { headers, rows, more_features: 0, hidden_columns: hidden }
    }
}
