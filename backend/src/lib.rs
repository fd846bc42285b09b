//! # App Reviews - sentiment and summary statistics for app review datasets
//!
//! Reads a CSV of mobile app reviews, cleans it into typed records and
//! computes per-app and per-language sentiment tallies plus statistics about
//! the most-reviewed app.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌──────────────────┐
//! │   CSV File  │────▶│   Parser    │────▶│   Cleaner   │────▶│ Sentiment tallies│
//! │  (any enc.) │     │  (auto-enc) │     │  (typed)    │     │  + summary       │
//! └─────────────┘     └─────────────┘     └─────────────┘     └──────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use appreviews::{analyze_file, AnalysisOptions};
//!
//! fn main() {
//!     let report = analyze_file("reviews.csv", &AnalysisOptions::default()).unwrap();
//!     println!("{} apps", report.app_sentiments.len());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Domain models (Review, Loose, SentimentCounts, SummaryResult)
//! - [`parser`] - CSV parsing with auto-detection
//! - [`transform`] - Cleaning, tallies, summary and pipeline
//! - [`validation`] - Header check
//! - [`logs`] - Pipeline log entries

// Core modules
pub mod error;
pub mod models;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Validation
pub mod validation;

// Logging
pub mod logs;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{AnalysisError, CsvError, PipelineError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    AppSentiment,
    LangSentiment,
    Loose,
    RawRow,
    Review,
    Sentiment,
    SentimentCounts,
    SentimentTally,
    SummaryResult,
    User,
};

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{
    csv_to_rows,
    parse_bytes,
    parse_file,
    detect_encoding,
    detect_delimiter,
    decode_content,
    ParseOptions,
    ParseResult,
};

// =============================================================================
// Re-exports - Cleaning and aggregation
// =============================================================================

pub use transform::{
    aggregate,
    aggregate_by,
    clean,
    clean_with_report,
    label_sentiment,
    sentiment_by_app,
    sentiment_by_language,
    summarize,
    CleanReport,
    DroppedRow,
    GroupBy,
};

// =============================================================================
// Re-exports - Validation
// =============================================================================

pub use validation::{check_headers, HeaderCheck};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use transform::pipeline::{
    analyze,
    analyze_bytes,
    analyze_file,
    analyze_rows,
    load_bytes,
    load_file,
    read_bytes,
    read_file,
    AnalysisOptions,
    AnalysisReport,
    CsvInfo,
    LoadedReviews,
};
