use arrow::datatypes::DataType;
use arrow::error::ArrowError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("console I/O failed: {0}")]
    Console(#[from] std::io::Error),

    #[error(transparent)]
    Arrow(#[from] ArrowError),

    #[error("column '{0}' not found in dataset")]
    MissingColumn(String),

    #[error("column '{column}' has type {actual:?}, expected {expected}")]
    ColumnType {
        column: String,
        expected: &'static str,
        actual: DataType,
    },

    #[error("input closed before a valid answer was given")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, ExplorerError>;
