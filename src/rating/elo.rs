//! Logistic Elo rating engine
//!
//! Maintains a single scalar skill estimate per player and computes win
//! expectations against explicitly supplied opponent ratings.

use crate::config::EloConfig;
use crate::error::{RatingError, Result};
use crate::types::Score;
use crate::utils::is_valid_score;
use serde::{Deserialize, Serialize};

/// Scalar Elo rating for one player.
///
/// The rating is only meaningful relative to opponent ratings passed in at
/// call time; no opponent state is held. Concurrent updates to the same
/// player are not supported and must be serialized by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EloRating {
    rating: f64,
    scale: f64,
}

impl Default for EloRating {
    fn default() -> Self {
        let config = EloConfig::default();
        Self {
            rating: config.initial_rating,
            scale: config.scale,
        }
    }
}

impl EloRating {
    /// Create a new player from a validated configuration
    pub fn new(config: &EloConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            rating: config.initial_rating,
            scale: config.scale,
        })
    }

    /// Create a player with an explicit rating and logistic scale
    pub fn with_rating(rating: f64, scale: f64) -> Result<Self> {
        Self::new(&EloConfig {
            initial_rating: rating,
            scale,
            ..EloConfig::default()
        })
    }

    /// Current rating
    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// Probability that this player beats an opponent with the given rating.
    ///
    /// Equal ratings yield exactly 0.5.
    pub fn expected_score(&self, opponent_rating: f64) -> f64 {
        1.0 / (1.0 + 10.0_f64.powf((opponent_rating - self.rating) / self.scale))
    }

    /// Apply a single game result against one opponent
    pub fn update(&mut self, outcome: Score, opponent_rating: f64, k: f64) -> Result<()> {
        if !is_valid_score(outcome) {
            return Err(RatingError::InvalidOutcome { value: outcome }.into());
        }

        self.rating += k * (outcome - self.expected_score(opponent_rating));
        Ok(())
    }

    /// Apply game results one at a time, in input order.
    ///
    /// Each step sees the rating produced by the previous one, so the result
    /// depends on ordering. All inputs are validated before the first
    /// mutation.
    pub fn online_update(
        &mut self,
        outcomes: &[Score],
        opponent_ratings: &[f64],
        k: f64,
    ) -> Result<()> {
        self.check_period(outcomes, opponent_ratings)?;

        for (&outcome, &opponent_rating) in outcomes.iter().zip(opponent_ratings) {
            self.rating += k * (outcome - self.expected_score(opponent_rating));
        }
        Ok(())
    }

    /// Apply a set of simultaneous results as one compound adjustment.
    ///
    /// Every expected score is computed from the pre-update rating, then a
    /// single `k * (sum of outcomes - sum of expected scores)` step is
    /// applied. For periods with more than one game this gives a different
    /// result than `online_update`, and the adjustment is not bounded by
    /// `k`.
    pub fn batch_update(
        &mut self,
        outcomes: &[Score],
        opponent_ratings: &[f64],
        k: f64,
    ) -> Result<()> {
        self.check_period(outcomes, opponent_ratings)?;

        let total_outcome: f64 = outcomes.iter().sum();
        let total_expected: f64 = opponent_ratings
            .iter()
            .map(|&rating| self.expected_score(rating))
            .sum();

        self.rating += k * (total_outcome - total_expected);
        Ok(())
    }

    /// Expected score against each opponent, without updating state
    pub fn win_probability(&self, opponent_ratings: &[f64]) -> Vec<f64> {
        opponent_ratings
            .iter()
            .map(|&rating| self.expected_score(rating))
            .collect()
    }

    fn check_period(&self, outcomes: &[Score], opponent_ratings: &[f64]) -> Result<()> {
        if outcomes.len() != opponent_ratings.len() {
            return Err(RatingError::LengthMismatch {
                expected: outcomes.len(),
                actual: opponent_ratings.len(),
            }
            .into());
        }

        if outcomes.is_empty() {
            return Err(RatingError::EmptyPeriod.into());
        }

        if let Some(&bad) = outcomes.iter().find(|outcome| !is_valid_score(**outcome)) {
            return Err(RatingError::InvalidOutcome { value: bad }.into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DRAW, LOSS, WIN};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_equal_ratings_expect_half() {
        let player = EloRating::default();
        assert_eq!(player.expected_score(1500.0), 0.5);
    }

    #[test]
    fn test_expected_scores_are_complementary() {
        let player = EloRating::with_rating(1650.0, 400.0).unwrap();
        let opponent = EloRating::with_rating(1480.0, 400.0).unwrap();

        let forward = player.expected_score(1480.0);
        let backward = opponent.expected_score(1650.0);

        assert!(forward > 0.5);
        assert!(backward < 0.5);
        assert_abs_diff_eq!(forward + backward, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_win_against_equal_opponent() {
        let mut player = EloRating::default();
        player.update(WIN, 1500.0, 32.0).unwrap();
        assert_eq!(player.rating(), 1516.0);
    }

    #[test]
    fn test_update_direction() {
        let mut winner = EloRating::default();
        winner.update(WIN, 1400.0, 32.0).unwrap();
        assert!(winner.rating() >= 1500.0);

        let mut loser = EloRating::default();
        loser.update(LOSS, 1400.0, 32.0).unwrap();
        assert!(loser.rating() <= 1500.0);

        let mut drawn = EloRating::default();
        drawn.update(DRAW, 1500.0, 32.0).unwrap();
        assert_eq!(drawn.rating(), 1500.0);
    }

    #[test]
    fn test_online_update_is_order_sensitive() {
        let outcomes = [WIN, LOSS, WIN];
        let opponents = [1400.0, 1550.0, 1700.0];

        let mut forward = EloRating::default();
        forward.online_update(&outcomes, &opponents, 32.0).unwrap();

        let mut reversed = EloRating::default();
        let rev_outcomes: Vec<f64> = outcomes.iter().rev().copied().collect();
        let rev_opponents: Vec<f64> = opponents.iter().rev().copied().collect();
        reversed
            .online_update(&rev_outcomes, &rev_opponents, 32.0)
            .unwrap();

        assert!((forward.rating() - reversed.rating()).abs() > 1e-9);
    }

    #[test]
    fn test_online_and_batch_agree_for_single_game() {
        let mut online = EloRating::default();
        online.online_update(&[WIN], &[1621.0], 32.0).unwrap();

        let mut batch = EloRating::default();
        batch.batch_update(&[WIN], &[1621.0], 32.0).unwrap();

        assert_abs_diff_eq!(online.rating(), batch.rating(), epsilon = 1e-12);
    }

    #[test]
    fn test_online_and_batch_differ_for_multiple_games() {
        let outcomes = [WIN, WIN, LOSS];
        let opponents = [1450.0, 1520.0, 1580.0];

        let mut online = EloRating::default();
        online.online_update(&outcomes, &opponents, 32.0).unwrap();

        let mut batch = EloRating::default();
        batch.batch_update(&outcomes, &opponents, 32.0).unwrap();

        assert!((online.rating() - batch.rating()).abs() > 1e-9);
    }

    #[test]
    fn test_win_probability_does_not_mutate() {
        let player = EloRating::default();
        let probabilities = player.win_probability(&[1400.0, 1500.0, 1600.0]);

        assert_eq!(probabilities.len(), 3);
        assert!(probabilities[0] > 0.5);
        assert_eq!(probabilities[1], 0.5);
        assert!(probabilities[2] < 0.5);
        assert_eq!(player.rating(), 1500.0);
    }

    #[test]
    fn test_invalid_outcome_is_rejected() {
        let mut player = EloRating::default();
        assert!(player.update(1.5, 1500.0, 32.0).is_err());
        assert!(player.update(-0.25, 1500.0, 32.0).is_err());
        assert_eq!(player.rating(), 1500.0);
    }

    #[test]
    fn test_mismatched_inputs_are_rejected() {
        let mut player = EloRating::default();
        assert!(player
            .online_update(&[WIN, LOSS], &[1500.0], 32.0)
            .is_err());
        assert!(player.batch_update(&[], &[], 32.0).is_err());
        assert_eq!(player.rating(), 1500.0);
    }

    #[test]
    fn test_bad_outcome_in_list_leaves_rating_untouched() {
        let mut player = EloRating::default();
        let result = player.online_update(&[WIN, 3.0], &[1400.0, 1600.0], 32.0);
        assert!(result.is_err());
        assert_eq!(player.rating(), 1500.0);
    }

    #[test]
    fn test_zero_scale_is_a_configuration_error() {
        assert!(EloRating::with_rating(1500.0, 0.0).is_err());
    }
}
