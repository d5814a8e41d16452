// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScanError>;

/// Fatal error kinds for the scan pipeline. A missing or unreadable source
/// file is not represented here: the scanner recovers from it locally by
/// writing the record id to the not-found log and moving on.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Journal operation failed for {path}: {source}")]
    Journal {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Report write failed: {0}")]
    Report(#[from] rust_xlsxwriter::XlsxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
