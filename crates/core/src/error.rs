//! Typed error taxonomy for the analysis pipeline
//!
//! Collaborators return these errors; the session controller is the
//! single place that logs them and decides on fallback substitution.

use thiserror::Error;

/// Dataset retrieval and parsing failures
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The sample dataset could not be fetched (network failure or
    /// non-success status)
    #[error("dataset fetch failed: {0}")]
    Retrieval(String),

    /// The fetched content is not well-formed delimited text
    #[error("malformed dataset at line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

/// Remote inference failures
#[derive(Debug, Error)]
pub enum InferenceError {
    /// The request could not complete (connection refused, timeout)
    #[error("inference request failed: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status
    #[error("inference endpoint returned status {0}")]
    Status(reqwest::StatusCode),

    /// The response body did not match the expected prediction shape
    #[error("inference response could not be decoded: {0}")]
    Decode(String),
}

/// Any failure in the loader -> inference -> classifier pipeline
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Inference(#[from] InferenceError),
}

impl AnalysisError {
    /// Pipeline stage at which the failure occurred, for structured logs
    pub fn stage(&self) -> &'static str {
        match self {
            AnalysisError::Dataset(DatasetError::Retrieval(_)) => "retrieval",
            AnalysisError::Dataset(DatasetError::Parse { .. }) => "parse",
            AnalysisError::Inference(_) => "inference",
        }
    }
}
