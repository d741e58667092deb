//! Dataset error types
//!
//! Defines all errors that can occur while loading the launch dataset.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the launch dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The dataset file could not be opened or read
    #[error("Failed to read dataset {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    /// A row could not be decoded into a launch record
    #[error("Malformed row at line {line}: {error}")]
    MalformedRow { line: u64, error: String },

    /// The `class` column held something other than 0 or 1
    #[error("Invalid outcome at line {line}: expected 0 or 1, got {value:?}")]
    InvalidOutcome { line: u64, value: String },

    /// Payload mass was negative or not a finite number
    #[error("Invalid payload mass at line {line}: {value}")]
    InvalidPayload { line: u64, value: f64 },

    /// CSV reader error not tied to a specific row
    #[error("CSV error: {0}")]
    Csv(String),
}

impl From<csv::Error> for DatasetError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line());
        match line {
            Some(line) => DatasetError::MalformedRow {
                line,
                error: err.to_string(),
            },
            None => DatasetError::Csv(err.to_string()),
        }
    }
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DatasetError::InvalidOutcome {
            line: 4,
            value: "2".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid outcome at line 4: expected 0 or 1, got \"2\""
        );

        let err = DatasetError::Io {
            path: PathBuf::from("missing.csv"),
            error: "not found".to_string(),
        };
        assert!(err.to_string().contains("missing.csv"));
    }
}
