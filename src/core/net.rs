// src/core/net.rs

// Blocking HTTP client for the classification backend. Callers run it off the
// UI thread; one request per submit, no retries.

use reqwest::blocking::{Client, Response, multipart::{Form, Part}};

use crate::{
    config::{consts::*, options::BackendOptions},
    data::CsvUpload,
    error::AnalysisError,
};

/// The three backend calls. Bodies come back raw; `adapter` gives them shape.
pub trait Backend {
    /// `POST /predict-url?url=…` → JSON text
    fn predict_url(&self, url: &str) -> Result<String, AnalysisError>;

    /// `POST /predict` (multipart, field `file`) → HTML text
    fn predict_csv(&self, upload: &CsvUpload) -> Result<String, AnalysisError>;

    /// `GET /train` → plain text
    fn train(&self) -> Result<String, AnalysisError>;
}

#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    opts: BackendOptions,
}

impl HttpBackend {
    pub fn new(opts: &BackendOptions) -> Result<Self, AnalysisError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(opts.timeout)
            .build()?;
        Ok(Self { client, opts: opts.clone() })
    }

    pub fn base_url(&self) -> &str {
        self.opts.base_url()
    }
}

impl Backend for HttpBackend {
    fn predict_url(&self, url: &str) -> Result<String, AnalysisError> {
        let endpoint = self.opts.endpoint(PREDICT_URL_PATH);
        logd!("Net: POST {} url={}", endpoint, url);
        let resp = self.client.post(&endpoint).query(&[("url", url)]).send()?;
        body_text(resp)
    }

    fn predict_csv(&self, upload: &CsvUpload) -> Result<String, AnalysisError> {
        let endpoint = self.opts.endpoint(PREDICT_CSV_PATH);
        logd!("Net: POST {} file={} bytes={}", endpoint, upload.file_name, upload.bytes.len());

        let part = Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone())
            .mime_str("text/csv")?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let resp = self.client.post(&endpoint).multipart(form).send()?;
        body_text(resp)
    }

    fn train(&self) -> Result<String, AnalysisError> {
        let endpoint = self.opts.endpoint(TRAIN_PATH);
        logd!("Net: GET {}", endpoint);
        let resp = self.client.get(&endpoint).send()?;
        body_text(resp)
    }
}

fn body_text(resp: Response) -> Result<String, AnalysisError> {
    let status = resp.status();
    if !status.is_success() {
        let url = resp.url().to_string();
        loge!("Net: {} from {}", status, url);
        return Err(AnalysisError::Status { status: status.as_u16(), url });
    }
    let text = resp.text()?;
    logd!("Net: {} ({} bytes)", status, text.len());
    Ok(text)
}
