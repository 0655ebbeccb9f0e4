//! Error types for dataset loading.
//!
//! Every variant is fatal to the session: the dataset is either loaded and
//! structurally valid once, or the dashboard does not start.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while fetching or decoding a dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Transport Errors ===
    /// HTTP client could not be built or the request failed.
    #[error("failed to fetch {url}: {message}")]
    Http { url: String, message: String },

    /// Server answered with a non-success status.
    #[error("failed to fetch {url}: HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// Local dataset file not found.
    #[error("dataset file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read a local dataset file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Dataset larger than the configured limit.
    #[error("dataset {origin} is too large ({size} bytes, limit {max_size})")]
    TooLarge {
        origin: String,
        size: u64,
        max_size: u64,
    },

    // === CSV Parsing Errors ===
    /// Polars could not parse the CSV payload.
    #[error("failed to parse CSV {origin}: {message}")]
    CsvParse { origin: String, message: String },

    // === Schema Errors ===
    /// A required column is absent from the header row.
    #[error("required column '{column}' not found in {origin}")]
    MissingColumn { column: String, origin: String },

    /// A required cell is blank.
    #[error("missing {column} on row {row} of {origin}")]
    MissingValue {
        column: String,
        row: usize,
        origin: String,
    },

    /// A cell could not be converted to the expected type.
    #[error("invalid {column} value '{value}' on row {row} of {origin}")]
    InvalidValue {
        column: String,
        value: String,
        row: usize,
        origin: String,
    },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::MissingColumn {
            column: "latitude".to_string(),
            origin: "businesses.csv".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "required column 'latitude' not found in businesses.csv"
        );
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("stars".into());
        let ingest_err: IngestError = polars_err.into();
        assert!(matches!(ingest_err, IngestError::DataFrame { .. }));
    }
}
