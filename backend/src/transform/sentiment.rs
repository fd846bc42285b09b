//! Rating → sentiment labeling.

use crate::models::{Review, Sentiment};

/// Label a star rating.
///
/// | rating           | sentiment  |
/// |------------------|------------|
/// | `> 4.0`          | positive   |
/// | `2.0 ..= 4.0`    | neutral    |
/// | `< 2.0` or NaN   | negative   |
///
/// NaN fails both comparisons and lands in the last branch.
pub fn label_sentiment(rating: f64) -> Sentiment {
    if rating > 4.0 {
        Sentiment::Positive
    } else if rating >= 2.0 {
        Sentiment::Neutral
    } else {
        Sentiment::Negative
    }
}

/// Label a review by its rating; an invalid rating counts as negative.
pub fn review_sentiment(review: &Review) -> Sentiment {
    label_sentiment(review.rating.or_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(label_sentiment(4.1), Sentiment::Positive);
        assert_eq!(label_sentiment(4.0), Sentiment::Neutral);
        assert_eq!(label_sentiment(2.0), Sentiment::Neutral);
        assert_eq!(label_sentiment(1.9), Sentiment::Negative);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(label_sentiment(5.0), Sentiment::Positive);
        assert_eq!(label_sentiment(f64::INFINITY), Sentiment::Positive);
        assert_eq!(label_sentiment(1.0), Sentiment::Negative);
        assert_eq!(label_sentiment(-3.0), Sentiment::Negative);
    }

    #[test]
    fn test_nan_is_negative() {
        assert_eq!(label_sentiment(f64::NAN), Sentiment::Negative);
    }
}
