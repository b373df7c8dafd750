// src/adapter.rs
//! Turns raw backend bodies into `AnalysisResult`s.
//!
//! - URL mode: a JSON object `{url, prediction, prediction_value, confidence, features}`.
//! - Batch mode: an HTML page holding one results table. The first row's `<th>`
//!   cells name the columns; every later row's `<td>` cells map to those names
//!   by position.

use scraper::{ElementRef, Html, Selector};
use serde::Deserialize;

use crate::{
    core::sanitize::{is_blank_header, normalize_ws},
    data::{AnalysisResult, BatchAnalysis, Confidence, FeatureRecord, FeatureValue, UrlAnalysis},
    error::AnalysisError,
};

#[derive(Deserialize)]
struct UrlBody {
    url: String,
    #[serde(default)]
    prediction: Option<String>,
    prediction_value: f64,
    confidence: Confidence,
    features: serde_json::Map<String, serde_json::Value>,
}

/// Parse the `/predict-url` JSON answer.
pub fn parse_url_response(body: &str) -> Result<AnalysisResult, AnalysisError> {
    let raw: UrlBody = serde_json::from_str(body)?;

    let features: FeatureRecord = raw
        .features
        .into_iter()
        .map(|(k, v)| (k, FeatureValue::from(v)))
        .collect();

    if features.is_empty() {
        logw!("Adapter: url={} came back without features", raw.url);
    }
    logd!("Adapter: url={} value={} features={}", raw.url, raw.prediction_value, features.len());

    Ok(AnalysisResult::Single(UrlAnalysis {
        url: raw.url,
        prediction_value: raw.prediction_value,
        prediction_label: raw.prediction,
        confidence: raw.confidence,
        features,
    }))
}

fn selector(css: &'static str) -> Result<Selector, AnalysisError> {
    Selector::parse(css).map_err(|e| AnalysisError::parse(format!("bad selector {css:?}: {e:?}")))
}

fn cell_text(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Parse the `/predict` HTML answer (first `<table>` in the document).
pub fn parse_table_html(html: &str) -> Result<AnalysisResult, AnalysisError> {
    let doc = Html::parse_document(html);
    let (table_sel, tr_sel, th_sel, td_sel) =
        (selector("table")?, selector("tr")?, selector("th")?, selector("td")?);

    let table = doc
        .select(&table_sel)
        .next()
        .ok_or_else(|| AnalysisError::parse("No table found in response"))?;

    let mut trs = table.select(&tr_sel);
    let header_row = trs
        .next()
        .ok_or_else(|| AnalysisError::parse("Results table has no rows"))?;

    let mut headers: Vec<String> = header_row.select(&th_sel).map(cell_text).collect();
    if headers.is_empty() {
        return Err(AnalysisError::parse("Results table has no header cells"));
    }

    let body: Vec<Vec<String>> = trs
        .map(|tr| tr.select(&td_sel).map(cell_text).collect::<Vec<_>>())
        .filter(|cells| !cells.is_empty())
        .collect();

    // pandas' to_html: blank <th> over the index column, and the index itself
    // is a <th> per row, so data rows carry one cell fewer than the header.
    let index_col = headers.first().is_some_and(|h| is_blank_header(h))
        && body.iter().all(|cells| cells.len() + 1 == headers.len());
    if index_col {
        logd!("Adapter: dropping blank index header");
        headers.remove(0);
    }

    let rows: Vec<FeatureRecord> = body
        .into_iter()
        .map(|cells| headers.iter().cloned().zip(cells).collect())
        .collect();

    logd!("Adapter: table headers={} rows={}", headers.len(), rows.len());

    Ok(AnalysisResult::Batch(BatchAnalysis { headers, rows }))
}
