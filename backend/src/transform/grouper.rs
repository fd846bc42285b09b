//! Group cleaned reviews and tally sentiment per group.
//!
//! # Architecture
//!
//! ```text
//! Reviews                               Tallies (first-seen key order)
//! ┌──────────────────────────┐         ┌──────────────────────────────┐
//! │ app: A, rating: 5        │         │ A: positive 1, neutral 1,    │
//! │ app: B, rating: 5        │   →     │    negative 1                │
//! │ app: A, rating: 3        │         ├──────────────────────────────┤
//! │ app: A, rating: 1        │         │ B: positive 1                │
//! └──────────────────────────┘         └──────────────────────────────┘
//! ```
//!
//! Keys are kept in an insertion-ordered map, so the output order (and every
//! tie-break built on it) is the order in which keys first appear.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::sentiment::review_sentiment;
use crate::models::{AppSentiment, LangSentiment, Review, SentimentCounts, SentimentTally};

/// Which review attribute to group by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    /// `app_name`
    App,
    /// `review_language`
    Language,
}

impl GroupBy {
    pub fn key<'a>(&self, review: &'a Review) -> &'a str {
        match self {
            GroupBy::App => &review.app_name,
            GroupBy::Language => &review.review_language,
        }
    }
}

/// Tally sentiment per key.
pub fn aggregate<F>(reviews: &[Review], key_fn: F) -> Vec<SentimentTally>
where
    F: Fn(&Review) -> &str,
{
    let mut groups: IndexMap<&str, SentimentCounts> = IndexMap::new();

    for review in reviews {
        groups
            .entry(key_fn(review))
            .or_default()
            .record(review_sentiment(review));
    }

    groups
        .into_iter()
        .map(|(key, counts)| SentimentTally {
            key: key.to_string(),
            counts,
        })
        .collect()
}

/// Tally sentiment per [`GroupBy`] selection.
pub fn aggregate_by(reviews: &[Review], group_by: GroupBy) -> Vec<SentimentTally> {
    aggregate(reviews, |r| group_by.key(r))
}

/// Sentiment per app, as `{app_name, positive, neutral, negative}`.
pub fn sentiment_by_app(reviews: &[Review]) -> Vec<AppSentiment> {
    aggregate_by(reviews, GroupBy::App)
        .into_iter()
        .map(AppSentiment::from)
        .collect()
}

/// Sentiment per language, as `{lang_name, positive, neutral, negative}`.
pub fn sentiment_by_language(reviews: &[Review]) -> Vec<LangSentiment> {
    aggregate_by(reviews, GroupBy::Language)
        .into_iter()
        .map(LangSentiment::from)
        .collect()
}
