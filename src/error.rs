use std::path::PathBuf;
use thiserror::Error;

/// The main error type for yolopost operations.
#[derive(Debug, Error)]
pub enum DetectError {
    /// An image or tensor has zero or inconsistent dimensions, or output
    /// rows are too short for the expected layout.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A detector parameter is out of range.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Failed to read class table from {path}: {source}")]
    ClassTableRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read raw outputs from {path}: {source}")]
    RawOutputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write raw outputs to {path}: {source}")]
    RawOutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse raw outputs from {path}: {source}")]
    RawOutputParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize JSON: {0}")]
    ReportWrite(#[source] serde_json::Error),

    #[error("Inference failed: {0}")]
    Inference(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

impl DetectError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        DetectError::InvalidInput(message.into())
    }

    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        DetectError::Configuration(message.into())
    }
}
