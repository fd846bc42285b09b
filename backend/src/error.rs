//! Error types for the review analysis pipeline.
//!
//! - [`CsvError`] - CSV reading and parsing errors
//! - [`AnalysisError`] - Aggregation preconditions
//! - [`PipelineError`] - Top-level orchestration errors
//!
//! Malformed field values are not errors: they become
//! [`crate::models::Loose::Invalid`]. Rows with empty required fields are
//! dropped by the cleaner and reported in its [`crate::transform::CleanReport`].
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// CSV Parsing Errors
// =============================================================================

/// Errors during CSV reading and parsing.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Content could not be decoded with the requested encoding.
    #[error("Failed to decode content as {encoding}")]
    Encoding { encoding: String },

    /// Malformed CSV record.
    #[error("Line {line}: {message}")]
    Parse { line: u64, message: String },

    /// Empty file.
    #[error("CSV file is empty")]
    EmptyFile,

    /// No headers found.
    #[error("No headers found in CSV")]
    NoHeaders,
}

impl From<csv::Error> for CsvError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io) => CsvError::Io(io),
            _ => CsvError::Parse { line, message },
        }
    }
}

// =============================================================================
// Analysis Errors
// =============================================================================

/// Errors from the aggregation and summary stage.
#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    /// Summary statistics need at least one cleaned review.
    #[error("No reviews to summarize")]
    NoData,
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline orchestration errors.
///
/// This is the error type returned by [`crate::transform::pipeline::analyze_file`]
/// and its siblings.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// CSV parsing error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// Analysis error.
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    /// No data rows below the header.
    #[error("No records to analyze")]
    EmptyInput,

    /// Every row had an empty required field.
    #[error("All {0} rows were dropped during cleaning")]
    AllRowsDropped(usize),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        // CsvError -> PipelineError
        let csv_err = CsvError::EmptyFile;
        let pipeline_err: PipelineError = csv_err.into();
        assert!(pipeline_err.to_string().contains("empty"));

        // AnalysisError -> PipelineError
        let pipeline_err: PipelineError = AnalysisError::NoData.into();
        assert!(matches!(pipeline_err, PipelineError::Analysis(AnalysisError::NoData)));
        assert!(pipeline_err.to_string().contains("No reviews"));
    }

    #[test]
    fn test_parse_error_format() {
        let err = CsvError::Parse {
            line: 7,
            message: "found record with 3 fields".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Line 7"));
        assert!(msg.contains("3 fields"));
    }

    #[test]
    fn test_all_rows_dropped_format() {
        let err = PipelineError::AllRowsDropped(42);
        assert_eq!(err.to_string(), "All 42 rows were dropped during cleaning");
    }
}
