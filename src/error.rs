// src/error.rs
use thiserror::Error;

/// Extraction is per file and tolerant by design: a field whose selector
/// chain comes up empty is resolved to a default, never an error. The only
/// thing that fails a file outright is input that isn't a document at all.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{source_name}: input is empty, nothing to parse")]
    ParseFailure { source_name: String },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("store blob is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("API_KEY is not set")]
    MissingApiKey,
    #[error("report request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("model returned no usable text")]
    EmptyResponse,
}
