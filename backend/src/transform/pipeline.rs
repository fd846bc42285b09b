//! High-level pipeline API for review analysis.
//!
//! Combines every step: parsing, header check, cleaning, sentiment tallies
//! and summary statistics.
//!
//! # Example
//!
//! ```rust,ignore
//! use appreviews::transform::pipeline::{analyze_file, AnalysisOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let report = analyze_file("reviews.csv", &AnalysisOptions::default())?;
//!     println!("Most reviewed: {}", report.summary.most_reviewed_app);
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use super::cleaner::{clean_with_report, CleanReport};
use super::grouper::{sentiment_by_app, sentiment_by_language};
use super::summary::summarize;
use crate::error::{PipelineError, PipelineResult};
use crate::logs::{
    log_error, log_info, log_info_indent, log_success, log_warning, log_warning_indent,
};
use crate::models::{AppSentiment, LangSentiment, RawRow, Review, SummaryResult};
use crate::parser::{format_delimiter, parse_bytes, parse_file, ParseOptions, ParseResult};
use crate::validation::check_headers;

/// Options for the analysis pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Field delimiter; auto-detected when `None`
    pub delimiter: Option<u8>,

    /// Encoding label; auto-detected when `None`
    pub encoding: Option<String>,

    /// Trim whitespace around headers and values
    pub trim: bool,

    /// How many dropped-row reasons to list in the log
    pub dropped_sample: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            delimiter: None,
            encoding: None,
            trim: false,
            dropped_sample: 5,
        }
    }
}

impl AnalysisOptions {
    /// The parser-level subset of these options
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            delimiter: self.delimiter,
            encoding: self.encoding.clone(),
            trim: self.trim,
        }
    }
}

/// CSV file information
#[derive(Debug, Clone, Serialize)]
pub struct CsvInfo {
    pub encoding: String,
    pub delimiter: String,
    pub headers: Vec<String>,
    pub row_count: usize,
    pub missing_columns: Vec<String>,
    pub unexpected_columns: Vec<String>,
}

/// Parsed and cleaned reviews, ready for analysis
#[derive(Debug, Clone, Serialize)]
pub struct LoadedReviews {
    pub csv_info: CsvInfo,
    pub clean: CleanReport,
}

impl LoadedReviews {
    pub fn reviews(&self) -> &[Review] {
        &self.clean.reviews
    }
}

/// Result of a complete analysis
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub csv_info: CsvInfo,
    pub total_rows: usize,
    pub cleaned_rows: usize,
    pub dropped_rows: usize,
    pub app_sentiments: Vec<AppSentiment>,
    pub lang_sentiments: Vec<LangSentiment>,
    pub summary: SummaryResult,
}

/// Parse and clean a CSV file. Fails unless at least one review survives.
pub fn load_file<P: AsRef<Path>>(path: P, options: &AnalysisOptions) -> PipelineResult<LoadedReviews> {
    require_reviews(read_file(path, options)?)
}

/// Parse and clean CSV bytes. Fails unless at least one review survives.
pub fn load_bytes(bytes: &[u8], options: &AnalysisOptions) -> PipelineResult<LoadedReviews> {
    require_reviews(read_bytes(bytes, options)?)
}

/// Parse and clean a CSV file, accepting an empty result.
///
/// Tallies over zero reviews are simply empty, so callers that only need
/// tallies use this instead of [`load_file`].
pub fn read_file<P: AsRef<Path>>(path: P, options: &AnalysisOptions) -> PipelineResult<LoadedReviews> {
    log_info(format!("📖 Reading {}...", path.as_ref().display()));
    let parse_result = parse_file(path, &options.parse_options())?;
    Ok(clean_parsed(parse_result, options))
}

/// Same as [`read_file`] but accepts raw bytes.
pub fn read_bytes(bytes: &[u8], options: &AnalysisOptions) -> PipelineResult<LoadedReviews> {
    log_info(format!("📖 Reading {} bytes...", bytes.len()));
    let parse_result = parse_bytes(bytes, &options.parse_options())?;
    Ok(clean_parsed(parse_result, options))
}

/// Analyze a CSV file end to end.
///
/// 1. Parses the CSV with encoding/delimiter auto-detection
/// 2. Checks the header row
/// 3. Cleans rows into reviews
/// 4. Tallies sentiment per app and per language
/// 5. Computes the most-reviewed app summary
pub fn analyze_file<P: AsRef<Path>>(path: P, options: &AnalysisOptions) -> PipelineResult<AnalysisReport> {
    analyze(load_file(path, options)?)
}

/// Same as [`analyze_file`] but accepts raw bytes.
pub fn analyze_bytes(bytes: &[u8], options: &AnalysisOptions) -> PipelineResult<AnalysisReport> {
    analyze(load_bytes(bytes, options)?)
}

/// Analyze rows that were already parsed elsewhere.
pub fn analyze_rows(rows: Vec<RawRow>, headers: Vec<String>) -> PipelineResult<AnalysisReport> {
    let parse_result = ParseResult {
        rows,
        headers,
        encoding: "utf-8".to_string(),
        delimiter: b',',
    };
    analyze(require_reviews(clean_parsed(parse_result, &AnalysisOptions::default()))?)
}

/// Tally and summarize already loaded reviews.
pub fn analyze(loaded: LoadedReviews) -> PipelineResult<AnalysisReport> {
    let reviews = loaded.reviews();

    log_info("📊 Tallying sentiment...");
    let app_sentiments = sentiment_by_app(reviews);
    log_success(format!("{} apps", app_sentiments.len()));
    let lang_sentiments = sentiment_by_language(reviews);
    log_success(format!("{} languages", lang_sentiments.len()));

    log_info("🧮 Computing summary statistics...");
    let summary = summarize(reviews)?;
    log_success(format!(
        "Most reviewed: {} ({} reviews), mostly on {} ({}), average rating {:.2}",
        summary.most_reviewed_app,
        summary.most_reviews,
        summary.most_used_device,
        summary.most_devices,
        summary.avg_rating
    ));
    if summary.avg_rating.is_nan() {
        log_warning("Average rating is NaN: some ratings for this app could not be parsed");
    }

    Ok(AnalysisReport {
        total_rows: loaded.clean.total_rows,
        cleaned_rows: loaded.clean.reviews.len(),
        dropped_rows: loaded.clean.dropped.len(),
        csv_info: loaded.csv_info,
        app_sentiments,
        lang_sentiments,
        summary,
    })
}

/// Internal: header check and cleaning over parsed rows
fn clean_parsed(parse_result: ParseResult, options: &AnalysisOptions) -> LoadedReviews {
    log_success(format!("Encoding: {}", parse_result.encoding));
    log_success(format!("Delimiter: '{}'", format_delimiter(parse_result.delimiter)));
    log_success(format!("Read {} rows", parse_result.rows.len()));

    let check = check_headers(&parse_result.headers);
    if !check.is_complete() {
        log_warning(format!("Missing columns: {}", check.missing.join(", ")));
        if check.rejects_all_rows() {
            log_error("Every row will be dropped: a required column is absent");
        }
    }
    if !check.unexpected.is_empty() {
        log_info(format!("Extra columns: {}", check.unexpected.join(", ")));
    }

    let csv_info = CsvInfo {
        encoding: parse_result.encoding,
        delimiter: format_delimiter(parse_result.delimiter),
        headers: parse_result.headers,
        row_count: parse_result.rows.len(),
        missing_columns: check.missing,
        unexpected_columns: check.unexpected,
    };

    log_info("🧹 Cleaning rows...");
    let clean = clean_with_report(&parse_result.rows);
    print_clean_report(&clean, options.dropped_sample);

    LoadedReviews { csv_info, clean }
}

/// Internal: reject inputs that leave nothing to summarize
fn require_reviews(loaded: LoadedReviews) -> PipelineResult<LoadedReviews> {
    if loaded.clean.total_rows == 0 {
        return Err(PipelineError::EmptyInput);
    }
    if loaded.clean.reviews.is_empty() {
        return Err(PipelineError::AllRowsDropped(loaded.clean.total_rows));
    }
    Ok(loaded)
}

/// Log kept/dropped counts with dropped rows grouped by reason
fn print_clean_report(report: &CleanReport, sample: usize) {
    log_success(report.summary());
    if report.dropped.is_empty() {
        return;
    }

    // Group by reason, keep first-seen order
    let mut order: Vec<String> = Vec::new();
    let mut reasons: HashMap<String, Vec<usize>> = HashMap::new();
    for dropped in &report.dropped {
        let key = format!("Empty: {}", dropped.empty_fields.join(", "));
        if !reasons.contains_key(&key) {
            order.push(key.clone());
        }
        reasons.entry(key).or_default().push(dropped.row);
    }

    log_warning(format!("{} rows dropped (empty required fields)", report.dropped.len()));
    for reason in order.iter().take(sample) {
        let rows = &reasons[reason];
        let row_sample: Vec<String> = rows.iter().take(5).map(|r| r.to_string()).collect();
        let more = if rows.len() > 5 { format!(" ... +{}", rows.len() - 5) } else { String::new() };
        log_warning_indent(format!("• {} (rows: {}{})", reason, row_sample.join(", "), more), 1);
    }
    if order.len() > sample {
        log_info_indent(format!("... {} more reasons", order.len() - sample), 1);
    }
}
