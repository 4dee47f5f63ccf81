use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExperimentError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("config serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv failure: {0}")]
    Csv(#[from] csv::Error),
    #[error("python call failed: {0}")]
    Python(String),
    #[error("logger setup failed: {0}")]
    Logging(String),
    #[error("result columns have different lengths: {column} has {len}, expected {expected}")]
    RaggedColumns {
        column: &'static str,
        len: usize,
        expected: usize,
    },
    #[error("column {column} missing from {}", .path.display())]
    MissingColumn { column: String, path: PathBuf },
    #[error("column {column} appears more than once in {}", .path.display())]
    DuplicateColumn { column: String, path: PathBuf },
}

pub type Result<T> = std::result::Result<T, ExperimentError>;
