// src/config/consts.rs

// Net config
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const PREDICT_URL_PATH: &str = "/predict-url";
pub const PREDICT_CSV_PATH: &str = "/predict";
pub const TRAIN_PATH: &str = "/train";
pub const UPLOAD_FIELD: &str = "file";
pub const USER_AGENT: &str = concat!("phish_lens/", env!("CARGO_PKG_VERSION"));

pub const ENV_BACKEND_URL: &str = "PHISHLENS_BACKEND_URL";
pub const ENV_TIMEOUT_SECS: &str = "PHISHLENS_TIMEOUT_SECS";

// Model shape
pub const FEATURE_COUNT: usize = 30;
pub const PREDICTION_COLUMNS: &[&str] = &["predicted_column", "prediction_value"];
pub const SENTINEL_PHISHING: i64 = -1;
pub const SENTINEL_LEGITIMATE: i64 = 1;

// Results view
pub const PREVIEW_BATCH_COLUMNS: usize = 5;
pub const PREVIEW_SINGLE_FEATURES: usize = 10;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_EXPORT_FILE: &str = "phishing_detection_results.csv";
pub const EXPORT_URL_HEADER: &str = "URL";
pub const EXPORT_PREDICTION_HEADER: &str = "Prediction";

// Local store
pub const LOG_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
