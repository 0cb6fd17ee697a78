use thiserror::Error;

/// Errors raised while reading an operation batch from a file or stream.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a JSON array of operations, got {0}")]
    NotAnArray(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Workbook error: {0}")]
    Excel(#[from] calamine::Error),

    #[error("Worksheet not found: {0}")]
    SheetNotFound(String),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),
}
