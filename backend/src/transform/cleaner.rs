//! Raw CSV rows → typed [`Review`] records.
//!
//! A row survives only if none of its values is empty, `user_gender` aside.
//! Survivors are coerced field by field (see [`super::coerce`]) and never
//! rejected for a malformed value. Output order follows input order.

use serde::Serialize;

use super::coerce::{loose_date, loose_float, loose_int, strict_bool};
use crate::models::{columns, RawRow, Review, User};

/// A row rejected by the emptiness filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DroppedRow {
    /// Index into the input rows
    pub row: usize,
    /// Empty (or absent) columns, header order first
    pub empty_fields: Vec<String>,
}

/// Cleaned reviews plus what was left behind.
#[derive(Debug, Clone, Serialize)]
pub struct CleanReport {
    pub reviews: Vec<Review>,
    pub total_rows: usize,
    pub dropped: Vec<DroppedRow>,
}

impl CleanReport {
    pub fn summary(&self) -> String {
        format!(
            "Cleaned: {} of {} rows kept, {} dropped",
            self.reviews.len(),
            self.total_rows,
            self.dropped.len()
        )
    }
}

/// Clean `rows` into reviews, discarding rows with empty required fields.
pub fn clean(rows: &[RawRow]) -> Vec<Review> {
    clean_with_report(rows).reviews
}

/// Same as [`clean`] but also reports every dropped row and why.
pub fn clean_with_report(rows: &[RawRow]) -> CleanReport {
    let mut reviews = Vec::with_capacity(rows.len());
    let mut dropped = Vec::new();

    for (idx, row) in rows.iter().enumerate() {
        let empty = empty_fields(row);
        if empty.is_empty() {
            reviews.push(build_review(row));
        } else {
            dropped.push(DroppedRow {
                row: idx,
                empty_fields: empty,
            });
        }
    }

    CleanReport {
        reviews,
        total_rows: rows.len(),
        dropped,
    }
}

/// Columns that disqualify `row`.
///
/// Every column present in the row is checked, including ones outside the
/// review schema. A required column missing from the row counts as empty.
pub fn empty_fields(row: &RawRow) -> Vec<String> {
    let mut empty: Vec<String> = row
        .iter()
        .filter(|(name, value)| name.as_str() != columns::USER_GENDER && value.is_empty())
        .map(|(name, _)| name.clone())
        .collect();

    empty.extend(
        columns::ALL
            .iter()
            .filter(|&&name| name != columns::USER_GENDER && !row.contains_key(name))
            .map(|name| name.to_string()),
    );

    empty
}

fn build_review(row: &RawRow) -> Review {
    let field = |name: &str| row.get(name).map(String::as_str).unwrap_or("");

    Review {
        review_id: loose_int(field(columns::REVIEW_ID)),
        app_name: field(columns::APP_NAME).to_string(),
        review_language: field(columns::REVIEW_LANGUAGE).to_string(),
        rating: loose_float(field(columns::RATING)),
        review_date: loose_date(field(columns::REVIEW_DATE)),
        verified_purchase: strict_bool(field(columns::VERIFIED_PURCHASE)),
        device_type: field(columns::DEVICE_TYPE).to_string(),
        num_helpful_votes: loose_int(field(columns::NUM_HELPFUL_VOTES)),
        user: User {
            user_id: loose_int(field(columns::USER_ID)),
            user_age: loose_int(field(columns::USER_AGE)),
            user_country: field(columns::USER_COUNTRY).to_string(),
            user_gender: field(columns::USER_GENDER).to_string(),
        },
    }
}
