//! Statistics about the most-reviewed app.

use indexmap::IndexMap;

use super::grouper::{aggregate_by, GroupBy};
use crate::error::{AnalysisError, AnalysisResult};
use crate::models::{Review, SummaryResult};

/// Most-reviewed app, its most common device and its average rating.
///
/// Ties on review count or device count go to whichever key was seen first.
/// The average divides by the app's tally total. An invalid rating makes it NaN.
///
/// # Errors
///
/// [`AnalysisError::NoData`] if `reviews` is empty.
pub fn summarize(reviews: &[Review]) -> AnalysisResult<SummaryResult> {
    let tallies = aggregate_by(reviews, GroupBy::App);
    let (app, most_reviews) =
        leftmost_max(tallies.iter().map(|t| (t.key.as_str(), t.counts.total())))
            .ok_or(AnalysisError::NoData)?;

    let mut rating_sum = 0.0;
    let mut devices: IndexMap<&str, usize> = IndexMap::new();
    for review in reviews.iter().filter(|r| r.app_name == app) {
        rating_sum += review.rating.or_nan();
        *devices.entry(review.device_type.as_str()).or_insert(0) += 1;
    }

    let (device, most_devices) = leftmost_max(devices).ok_or(AnalysisError::NoData)?;

    Ok(SummaryResult {
        most_reviewed_app: app.to_string(),
        most_reviews,
        most_used_device: device.to_string(),
        most_devices,
        avg_rating: rating_sum / most_reviews as f64,
    })
}

/// Entry with the largest count; an equal count never displaces the leader.
fn leftmost_max<K, I>(entries: I) -> Option<(K, usize)>
where
    I: IntoIterator<Item = (K, usize)>,
{
    entries.into_iter().fold(None, |best, (key, count)| match best {
        Some((_, max)) if max >= count => best,
        _ => Some((key, count)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Loose;
    use crate::transform::fixtures::review;

    #[test]
    fn test_end_to_end_example() {
        let reviews = vec![
            review("A", "en", 5.0, "phone"),
            review("A", "en", 3.0, "phone"),
            review("A", "en", 1.0, "phone"),
            review("B", "en", 5.0, "tablet"),
        ];

        let summary = summarize(&reviews).unwrap();
        assert_eq!(summary.most_reviewed_app, "A");
        assert_eq!(summary.most_reviews, 3);
        assert_eq!(summary.most_used_device, "phone");
        assert_eq!(summary.most_devices, 3);
        assert_eq!(summary.avg_rating, 3.0);
    }

    #[test]
    fn test_app_tie_goes_to_first_seen() {
        let reviews = vec![
            review("B", "en", 4.0, "phone"),
            review("A", "en", 2.0, "tablet"),
            review("A", "en", 2.0, "tablet"),
            review("B", "en", 4.0, "phone"),
        ];

        for _ in 0..3 {
            let summary = summarize(&reviews).unwrap();
            assert_eq!(summary.most_reviewed_app, "B");
            assert_eq!(summary.most_reviews, 2);
            assert_eq!(summary.avg_rating, 4.0);
        }
    }

    #[test]
    fn test_later_strictly_larger_app_wins() {
        let reviews = vec![
            review("A", "en", 5.0, "phone"),
            review("B", "en", 1.0, "web"),
            review("B", "en", 2.0, "web"),
        ];
        let summary = summarize(&reviews).unwrap();
        assert_eq!(summary.most_reviewed_app, "B");
        assert_eq!(summary.avg_rating, 1.5);
    }

    #[test]
    fn test_device_tie_goes_to_first_seen() {
        let reviews = vec![
            review("A", "en", 5.0, "tablet"),
            review("A", "en", 5.0, "phone"),
            review("A", "en", 5.0, "phone"),
            review("A", "en", 5.0, "tablet"),
        ];
        let summary = summarize(&reviews).unwrap();
        assert_eq!(summary.most_used_device, "tablet");
        assert_eq!(summary.most_devices, 2);
    }

    #[test]
    fn test_devices_only_counted_for_leader() {
        let reviews = vec![
            review("A", "en", 5.0, "phone"),
            review("A", "en", 5.0, "tablet"),
            review("A", "en", 5.0, "tablet"),
            review("B", "en", 5.0, "phone"),
            review("B", "en", 5.0, "phone"),
        ];
        let summary = summarize(&reviews).unwrap();
        assert_eq!(summary.most_reviewed_app, "A");
        assert_eq!(summary.most_used_device, "tablet");
        assert_eq!(summary.most_devices, 2);
    }

    #[test]
    fn test_invalid_rating_poisons_average() {
        let mut bad = review("A", "en", 0.0, "phone");
        bad.rating = Loose::Invalid;
        let reviews = vec![review("A", "en", 5.0, "phone"), bad];

        let summary = summarize(&reviews).unwrap();
        assert_eq!(summary.most_reviews, 2);
        assert!(summary.avg_rating.is_nan());
    }

    #[test]
    fn test_empty_is_no_data() {
        assert_eq!(summarize(&[]), Err(AnalysisError::NoData));
    }

    #[test]
    fn test_leftmost_max() {
        assert_eq!(leftmost_max(vec![("a", 1), ("b", 3), ("c", 3)]), Some(("b", 3)));
        assert_eq!(leftmost_max(Vec::<(&str, usize)>::new()), None);
    }
}
