//! Transformation module.
//!
//! This module turns parsed CSV rows into statistics:
//! - Coerce: lenient number/date/bool parsing
//! - Cleaner: raw rows to typed reviews
//! - Sentiment: rating to sentiment label
//! - Grouper: sentiment tallies per app or language
//! - Summary: most-reviewed app statistics
//! - Pipeline: end-to-end orchestration

pub mod cleaner;
pub mod coerce;
pub mod grouper;
pub mod pipeline;
pub mod sentiment;
pub mod summary;

pub use cleaner::{clean, clean_with_report, CleanReport, DroppedRow};
pub use grouper::{aggregate, aggregate_by, sentiment_by_app, sentiment_by_language, GroupBy};
pub use pipeline::*;
pub use sentiment::{label_sentiment, review_sentiment};
pub use summary::summarize;

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::models::{columns, Loose, RawRow, Review, User};

    pub const HEADER: &str = "review_id,app_name,review_language,rating,review_date,verified_purchase,device_type,num_helpful_votes,user_id,user_age,user_country,user_gender";

    /// A complete, valid raw row with `overrides` applied in place.
    pub fn raw_row(overrides: &[(&str, &str)]) -> RawRow {
        let defaults = [
            (columns::REVIEW_ID, "1"),
            (columns::APP_NAME, "Spotify"),
            (columns::REVIEW_LANGUAGE, "en"),
            (columns::RATING, "4.0"),
            (columns::REVIEW_DATE, "2024-01-15"),
            (columns::VERIFIED_PURCHASE, "false"),
            (columns::DEVICE_TYPE, "Android"),
            (columns::NUM_HELPFUL_VOTES, "0"),
            (columns::USER_ID, "100"),
            (columns::USER_AGE, "25"),
            (columns::USER_COUNTRY, "USA"),
            (columns::USER_GENDER, "Male"),
        ];
        let mut row: RawRow = defaults
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        for (k, v) in overrides {
            row.insert(k.to_string(), v.to_string());
        }
        row
    }

    /// A cleaned review with the fields the aggregations look at.
    pub fn review(app: &str, lang: &str, rating: f64, device: &str) -> Review {
        Review {
            review_id: Loose::Valid(1),
            app_name: app.to_string(),
            review_language: lang.to_string(),
            rating: Loose::Valid(rating),
            review_date: Loose::Invalid,
            verified_purchase: false,
            device_type: device.to_string(),
            num_helpful_votes: Loose::Valid(0),
            user: User {
                user_id: Loose::Valid(1),
                user_age: Loose::Valid(30),
                user_country: "USA".to_string(),
                user_gender: String::new(),
            },
        }
    }
}
