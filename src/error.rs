//! Error types for claimdesk
//!
//! The state containers never fail; these cover the I/O edge only
//! (dataset loading, log file setup).

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("I/O {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ClaimdeskError {
    #[error("dataset: {0}")]
    Data(String),
    #[error("logging: {0}")]
    Logging(String),
}

impl From<DataError> for ClaimdeskError {
    fn from(e: DataError) -> Self {
        ClaimdeskError::Data(e.to_string())
    }
}
