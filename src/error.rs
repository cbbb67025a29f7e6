//! Error handling for period integration runs.
//!
//! Every variant is fatal to a run: folder enumeration, CSV parsing and
//! output failures all propagate to the caller unchanged.

use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntegrationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    #[error("Folder not found at path: {path}")]
    FolderNotFound { path: PathBuf },

    #[error("Failed to read folder: {path} - {source}")]
    FolderUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse CSV file: {path} - {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    #[error("No month token in file name (expected '<prefix>_<month>.csv'): {file}")]
    MissingMonthToken { file: String },

    #[error("Failed to write output file: {path} - {reason}")]
    OutputWrite { path: PathBuf, reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

pub type Result<T> = std::result::Result<T, IntegrationError>;
