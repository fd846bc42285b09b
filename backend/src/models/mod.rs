//! Domain models for the review analysis pipeline.
//!
//! This module contains the core data structures used throughout the pipeline:
//!
//! - [`RawRow`] - One CSV row as column name → raw string
//! - [`Loose`] - Result of a lenient parse (valid value or invalid marker)
//! - [`Review`] / [`User`] - A cleaned, typed review
//! - [`Sentiment`] / [`SentimentCounts`] - Sentiment labels and counters
//! - [`AppSentiment`] / [`LangSentiment`] - Per-group tallies
//! - [`SummaryResult`] - Statistics about the most-reviewed app

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Columns
// =============================================================================

/// Column names of the review CSV.
pub mod columns {
    pub const REVIEW_ID: &str = "review_id";
    pub const APP_NAME: &str = "app_name";
    pub const REVIEW_LANGUAGE: &str = "review_language";
    pub const RATING: &str = "rating";
    pub const REVIEW_DATE: &str = "review_date";
    pub const VERIFIED_PURCHASE: &str = "verified_purchase";
    pub const DEVICE_TYPE: &str = "device_type";
    pub const NUM_HELPFUL_VOTES: &str = "num_helpful_votes";
    pub const USER_ID: &str = "user_id";
    pub const USER_AGE: &str = "user_age";
    pub const USER_COUNTRY: &str = "user_country";
    /// The only column allowed to be empty.
    pub const USER_GENDER: &str = "user_gender";

    /// Every expected column, in file order.
    pub const ALL: [&str; 12] = [
        REVIEW_ID,
        APP_NAME,
        REVIEW_LANGUAGE,
        RATING,
        REVIEW_DATE,
        VERIFIED_PURCHASE,
        DEVICE_TYPE,
        NUM_HELPFUL_VOTES,
        USER_ID,
        USER_AGE,
        USER_COUNTRY,
        USER_GENDER,
    ];
}

/// A parsed CSV row before cleaning. Keys keep header order.
pub type RawRow = IndexMap<String, String>;

// =============================================================================
// Loose values
// =============================================================================

/// Outcome of a lenient parse.
///
/// Cleaning never fails on a malformed number or date; the field is kept as
/// `Invalid` instead. Serializes as the inner value, or `null` when invalid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Loose<T> {
    Valid(T),
    Invalid,
}

impl<T> Loose<T> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Loose::Valid(_))
    }

    /// Convert into an `Option`, dropping the invalid marker.
    pub fn valid(self) -> Option<T> {
        match self {
            Loose::Valid(v) => Some(v),
            Loose::Invalid => None,
        }
    }
}

impl Loose<f64> {
    /// Numeric view used by arithmetic: invalid becomes NaN and poisons
    /// any sum it takes part in.
    pub fn or_nan(self) -> f64 {
        match self {
            Loose::Valid(v) => v,
            Loose::Invalid => f64::NAN,
        }
    }
}

impl<T> From<Option<T>> for Loose<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Loose::Valid(v),
            None => Loose::Invalid,
        }
    }
}

// =============================================================================
// Review
// =============================================================================

/// Reviewer attributes, grouped out of the flat CSV row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: Loose<i64>,
    pub user_age: Loose<i64>,
    pub user_country: String,
    /// May be empty.
    pub user_gender: String,
}

/// A cleaned app review.
///
/// Only built by [`crate::transform::cleaner`], from rows where every column
/// except `user_gender` is non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub review_id: Loose<i64>,
    pub app_name: String,
    pub review_language: String,
    pub rating: Loose<f64>,
    pub review_date: Loose<NaiveDateTime>,
    pub verified_purchase: bool,
    pub device_type: String,
    pub num_helpful_votes: Loose<i64>,
    pub user: User,
}

// =============================================================================
// Sentiment
// =============================================================================

/// Sentiment derived from a star rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-sentiment counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentCounts {
    /// Increment the bucket for `sentiment`.
    pub fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Neutral => self.neutral += 1,
            Sentiment::Negative => self.negative += 1,
        }
    }

    pub fn get(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }
}

/// Sentiment counters for one group key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentimentTally {
    pub key: String,
    pub counts: SentimentCounts,
}

/// Tally keyed by app, serialized as `{app_name, positive, neutral, negative}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSentiment {
    pub app_name: String,
    #[serde(flatten)]
    pub counts: SentimentCounts,
}

impl From<SentimentTally> for AppSentiment {
    fn from(tally: SentimentTally) -> Self {
        Self {
            app_name: tally.key,
            counts: tally.counts,
        }
    }
}

/// Tally keyed by language, serialized as `{lang_name, positive, neutral, negative}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LangSentiment {
    pub lang_name: String,
    #[serde(flatten)]
    pub counts: SentimentCounts,
}

impl From<SentimentTally> for LangSentiment {
    fn from(tally: SentimentTally) -> Self {
        Self {
            lang_name: tally.key,
            counts: tally.counts,
        }
    }
}

// =============================================================================
// Summary
// =============================================================================

/// Statistics about the most-reviewed app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    pub most_reviewed_app: String,
    pub most_reviews: usize,
    pub most_used_device: String,
    pub most_devices: usize,
    /// NaN if any of the app's ratings was invalid.
    pub avg_rating: f64,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_loose_serializes_invalid_as_null() {
        let valid: Loose<i64> = Loose::Valid(12);
        let invalid: Loose<i64> = Loose::Invalid;
        assert_eq!(serde_json::to_value(valid).unwrap(), json!(12));
        assert_eq!(serde_json::to_value(invalid).unwrap(), json!(null));
    }

    #[test]
    fn test_loose_or_nan() {
        assert_eq!(Loose::Valid(4.5).or_nan(), 4.5);
        assert!(Loose::<f64>::Invalid.or_nan().is_nan());
        assert_eq!(Loose::from(Some(3)), Loose::Valid(3));
        assert_eq!(Loose::<i64>::from(None), Loose::Invalid);
    }

    #[test]
    fn test_sentiment_counts_total() {
        let mut counts = SentimentCounts::default();
        counts.record(Sentiment::Positive);
        counts.record(Sentiment::Negative);
        counts.record(Sentiment::Negative);
        assert_eq!(counts.get(Sentiment::Negative), 2);
        assert_eq!(counts.get(Sentiment::Neutral), 0);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_tally_output_shapes() {
        let tally = SentimentTally {
            key: "Duolingo".into(),
            counts: SentimentCounts { positive: 2, neutral: 1, negative: 0 },
        };
        let app = serde_json::to_value(AppSentiment::from(tally.clone())).unwrap();
        assert_eq!(
            app,
            json!({"app_name": "Duolingo", "positive": 2, "neutral": 1, "negative": 0})
        );

        let lang = serde_json::to_value(LangSentiment::from(tally)).unwrap();
        assert_eq!(lang["lang_name"], "Duolingo");
        assert!(lang.get("app_name").is_none());
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let summary = SummaryResult {
            most_reviewed_app: "A".into(),
            most_reviews: 3,
            most_used_device: "phone".into(),
            most_devices: 3,
            avg_rating: 3.0,
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["mostReviewedApp"], "A");
        assert_eq!(value["mostReviews"], 3);
        assert_eq!(value["mostUsedDevice"], "phone");
        assert_eq!(value["mostDevices"], 3);
        assert_eq!(value["avgRating"], 3.0);
    }

    #[test]
    fn test_sentiment_display() {
        assert_eq!(Sentiment::Neutral.to_string(), "neutral");
        assert_eq!(serde_json::to_value(Sentiment::Positive).unwrap(), json!("positive"));
    }
}
