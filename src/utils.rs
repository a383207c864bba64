//! Utility functions for the rating engines

use crate::types::Score;

/// Calculate the absolute difference between two ratings
pub fn rating_difference(rating1: f64, rating2: f64) -> f64 {
    (rating1 - rating2).abs()
}

/// Check if two ratings are within the given tolerance
pub fn ratings_within_tolerance(rating1: f64, rating2: f64, tolerance: f64) -> bool {
    rating_difference(rating1, rating2) <= tolerance
}

/// Check that a score lies within the supported `0.0..=1.0` range
pub fn is_valid_score(score: Score) -> bool {
    (0.0..=1.0).contains(&score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_difference() {
        assert_eq!(rating_difference(1500.0, 1400.0), 100.0);
        assert_eq!(rating_difference(1400.0, 1500.0), 100.0);
        assert_eq!(rating_difference(1500.0, 1500.0), 0.0);
    }

    #[test]
    fn test_ratings_within_tolerance() {
        assert!(ratings_within_tolerance(1500.0, 1450.0, 100.0));
        assert!(!ratings_within_tolerance(1500.0, 1350.0, 100.0));
        assert!(ratings_within_tolerance(1500.0, 1500.0, 0.0));
    }

    #[test]
    fn test_is_valid_score() {
        assert!(is_valid_score(0.0));
        assert!(is_valid_score(0.5));
        assert!(is_valid_score(1.0));
        assert!(is_valid_score(0.25));
        assert!(!is_valid_score(-0.1));
        assert!(!is_valid_score(1.1));
        assert!(!is_valid_score(f64::NAN));
    }
}
