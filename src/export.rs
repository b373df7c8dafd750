// src/export.rs
use csv::ReaderBuilder;

use crate::{
    config::consts::{EXPORT_PREDICTION_HEADER, EXPORT_URL_HEADER, FEATURE_COUNT},
    data::{AnalysisResult, BatchAnalysis, FeatureRecord},
    error::AnalysisError,
};

/* ---------------- Flattening ---------------- */

/// Full table for export: every column, every row.
/// Single URL results become one row `URL, Prediction, <features…>`.
pub fn export_table(result: &AnalysisResult) -> (Vec<String>, Vec<Vec<String>>) {
    match result {
        AnalysisResult::Batch(b) => {
            let rows = b
                .rows
                .iter()
                .map(|rec| b.headers.iter().map(|h| rec.cell(h)).collect())
                .collect();
            (b.headers.clone(), rows)
        }
        AnalysisResult::Single(u) => {
            let mut headers = vec![s!(EXPORT_URL_HEADER), s!(EXPORT_PREDICTION_HEADER)];
            let mut row = vec![u.url.clone(), u.export_label()];
            for (k, v) in u.features.iter() {
                headers.push(s!(k));
                row.push(v.to_string());
            }
            (headers, vec![row])
        }
    }
}

/* ---------------- Writing ---------------- */

/// Header line then one line per row, values written verbatim (no quoting),
/// so a value holding a comma will shift columns on re-read.
pub fn to_export_string(result: &AnalysisResult) -> String {
    let (headers, rows) = export_table(result);

    let mut out = join!(&headers.join(","), "\n");
    for r in &rows {
        out.push_str(&r.join(","));
        out.push('\n');
    }
    out
}

/* ---------------- Parsing ---------------- */

/// Read an export back: first line is the header, every later line is one row
/// mapped by position. A blank line is a row of empty cells, not a separator.
pub fn parse_export(text: &str) -> Result<BatchAnalysis, AnalysisError> {
    let mut lines = text.lines();
    let header_line = lines
        .next()
        .ok_or_else(|| AnalysisError::parse("Export has no header line"))?;
    let headers: Vec<String> = header_line.split(',').map(|h| s!(h)).collect();

    let rows = lines
        .map(|line| headers.iter().cloned().zip(line.split(',').map(|c| s!(c))).collect())
        .collect();
    Ok(BatchAnalysis { headers, rows })
}

/// Shape of a CSV about to be uploaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadSummary {
    pub columns: usize,
    pub rows: usize,
}

impl UploadSummary {
    /// The backend wants exactly the feature columns; anything else is worth a warning.
    pub fn has_expected_columns(&self) -> bool {
        self.columns == FEATURE_COUNT
    }
}

/// Count header columns and data rows of an upload.
pub fn inspect_upload(bytes: &[u8]) -> Result<UploadSummary, AnalysisError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let columns = rdr.headers()?.len();
    let mut rows = 0usize;
    for rec in rdr.records() {
        rec?;
        rows += 1;
    }
    Ok(UploadSummary { columns, rows })
}
