//! Glicko-2 rating engine
//!
//! Implements the full rating-period update: variance and improvement
//! estimates from the period's games, the iterative volatility solve, and
//! the deviation/rating update, plus match-quality and expected-score
//! utilities. All update formulas run on the internal scale; callers only
//! exchange display-scale values.

use crate::config::Glicko2Config;
use crate::error::{RatingError, Result};
use crate::rating::scale;
use crate::types::{PlayerRating, Score};
use crate::utils::is_valid_score;
use std::f64::consts::PI;
use tracing::warn;

/// Weight of an opponent's games in proportion to their rating deviation:
/// 1.0 at zero deviation, approaching 0.0 as the uncertainty grows.
pub fn reduce_impact(deviation: f64) -> f64 {
    1.0 / (1.0 + 3.0 * deviation.powi(2) / PI.powi(2)).sqrt()
}

/// Logistic expected score with the impact factor supplied directly
pub fn expect_score(rating: f64, other_rating: f64, impact: f64) -> f64 {
    1.0 / (1.0 + (-impact * (rating - other_rating)).exp())
}

/// Glicko-2 rating state for one player.
///
/// Rating and deviation are stored on the internal scale; accessors and
/// update inputs use the display scale centered at 1500. Concurrent updates
/// to the same player are not supported and must be serialized by the
/// caller.
#[derive(Debug, Clone)]
pub struct GlickoRating {
    rating: f64,
    deviation: f64,
    volatility: f64,
    config: Glicko2Config,
}

impl Default for GlickoRating {
    fn default() -> Self {
        let config = Glicko2Config::default();
        Self {
            rating: scale::rating_to_internal(config.initial_rating),
            deviation: scale::deviation_to_internal(config.initial_deviation),
            volatility: config.initial_volatility,
            config,
        }
    }
}

impl GlickoRating {
    /// Create a new player from a validated configuration
    pub fn new(config: Glicko2Config) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            rating: scale::rating_to_internal(config.initial_rating),
            deviation: scale::deviation_to_internal(config.initial_deviation),
            volatility: config.initial_volatility,
            config,
        })
    }

    /// Restore a player from a display-scale snapshot
    pub fn from_snapshot(snapshot: &PlayerRating, config: Glicko2Config) -> Result<Self> {
        config.validate()?;

        if snapshot.deviation <= 0.0 || snapshot.volatility <= 0.0 {
            return Err(RatingError::ConfigurationError {
                message: "Snapshot deviation and volatility must be positive".to_string(),
            }
            .into());
        }

        Ok(Self {
            rating: scale::rating_to_internal(snapshot.rating),
            deviation: scale::deviation_to_internal(snapshot.deviation),
            volatility: snapshot.volatility,
            config,
        })
    }

    /// Display-scale rating
    pub fn rating(&self) -> f64 {
        scale::rating_to_display(self.rating)
    }

    /// Display-scale rating deviation
    pub fn deviation(&self) -> f64 {
        scale::deviation_to_display(self.deviation)
    }

    /// Current volatility
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Configuration this player was created with
    pub fn config(&self) -> &Glicko2Config {
        &self.config
    }

    /// Display-scale snapshot of the current state
    pub fn snapshot(&self) -> PlayerRating {
        PlayerRating {
            rating: self.rating(),
            deviation: self.deviation(),
            volatility: self.volatility,
        }
    }

    /// Approximate 95% confidence interval around the rating
    pub fn rating_interval(&self) -> (f64, f64) {
        let rating = self.rating();
        let margin = 1.96 * self.deviation();
        (rating - margin, rating + margin)
    }

    /// Apply one rating period of results.
    ///
    /// `opponent_ratings` and `opponent_deviations` are display-scale
    /// values; `outcomes` are scores in `0.0..=1.0` from this player's
    /// perspective. Either the whole update (rating, deviation and
    /// volatility together) commits, or on any input or numeric error none
    /// of it does.
    pub fn update_player(
        &mut self,
        opponent_ratings: &[f64],
        opponent_deviations: &[f64],
        outcomes: &[Score],
    ) -> Result<()> {
        self.check_period(opponent_ratings, opponent_deviations, outcomes)?;

        let ratings: Vec<f64> = opponent_ratings
            .iter()
            .copied()
            .map(scale::rating_to_internal)
            .collect();
        let deviations: Vec<f64> = opponent_deviations
            .iter()
            .copied()
            .map(scale::deviation_to_internal)
            .collect();

        let variance = self.variance(&ratings, &deviations)?;
        let improvement = self.improvement_sum(&ratings, &deviations, outcomes);
        let delta = variance * improvement;

        let volatility = self.solve_volatility(delta, variance)?;

        // Inflate the deviation by the new volatility, then shrink it by
        // this period's information.
        let inflated_sq = self.deviation.powi(2) + volatility.powi(2);
        let deviation = 1.0 / (1.0 / inflated_sq + 1.0 / variance).sqrt();
        let rating = self.rating + deviation.powi(2) * improvement;

        self.volatility = volatility;
        self.deviation = deviation;
        self.rating = rating;
        Ok(())
    }

    /// Rating-period update for a player with no games: the deviation grows
    /// by the current volatility; rating and volatility stay unchanged.
    pub fn did_not_compete(&mut self) {
        self.deviation = (self.deviation.powi(2) + self.volatility.powi(2)).sqrt();
    }

    /// Symmetric match quality against one opponent: 1.0 for a perfectly
    /// even pairing, 0.0 for a foregone conclusion.
    ///
    /// Averages the two directional expected scores, each weighted by its
    /// own side's deviation, and scores closeness to a 50/50 outcome.
    pub fn quality_1vs1(&self, opponent_rating: f64, opponent_deviation: f64) -> f64 {
        let own_view = expect_score(
            self.rating(),
            opponent_rating,
            reduce_impact(self.deviation()),
        );
        let their_view = expect_score(
            opponent_rating,
            self.rating(),
            reduce_impact(opponent_deviation),
        );
        let expected = (own_view + their_view) / 2.0;

        2.0 * (0.5 - (0.5 - expected).abs())
    }

    /// Match quality against each opponent in turn, in input order
    pub fn quality_vs_each(
        &self,
        opponent_ratings: &[f64],
        opponent_deviations: &[f64],
    ) -> Result<Vec<f64>> {
        if opponent_ratings.len() != opponent_deviations.len() {
            return Err(RatingError::LengthMismatch {
                expected: opponent_ratings.len(),
                actual: opponent_deviations.len(),
            }
            .into());
        }

        Ok(opponent_ratings
            .iter()
            .zip(opponent_deviations)
            .map(|(&rating, &deviation)| self.quality_1vs1(rating, deviation))
            .collect())
    }

    fn check_period(
        &self,
        opponent_ratings: &[f64],
        opponent_deviations: &[f64],
        outcomes: &[Score],
    ) -> Result<()> {
        if opponent_deviations.len() != opponent_ratings.len() {
            return Err(RatingError::LengthMismatch {
                expected: opponent_ratings.len(),
                actual: opponent_deviations.len(),
            }
            .into());
        }

        if outcomes.len() != opponent_ratings.len() {
            return Err(RatingError::LengthMismatch {
                expected: opponent_ratings.len(),
                actual: outcomes.len(),
            }
            .into());
        }

        if opponent_ratings.is_empty() {
            return Err(RatingError::EmptyPeriod.into());
        }

        if let Some(&bad) = outcomes.iter().find(|outcome| !is_valid_score(**outcome)) {
            return Err(RatingError::InvalidOutcome { value: bad }.into());
        }

        Ok(())
    }

    /// Estimated variance of the rating based on the period's games
    /// (internal scale).
    fn variance(&self, ratings: &[f64], deviations: &[f64]) -> Result<f64> {
        let mut sum = 0.0;
        for (&opponent_rating, &opponent_deviation) in ratings.iter().zip(deviations) {
            let impact = reduce_impact(opponent_deviation);
            let expected = expect_score(self.rating, opponent_rating, impact);
            sum += impact.powi(2) * expected * (1.0 - expected);
        }

        if !sum.is_finite() || sum <= 0.0 {
            return Err(RatingError::DegenerateVariance.into());
        }

        Ok(1.0 / sum)
    }

    /// Outcome-weighted sum `Σ g(φ_j) * (s_j - E_j)` over the period's
    /// games (internal scale). Multiplied by the variance this is the delta
    /// of the volatility solve; multiplied by the new deviation squared it
    /// is the rating change.
    fn improvement_sum(&self, ratings: &[f64], deviations: &[f64], outcomes: &[Score]) -> f64 {
        let mut sum = 0.0;
        for ((&opponent_rating, &opponent_deviation), &outcome) in
            ratings.iter().zip(deviations).zip(outcomes)
        {
            let impact = reduce_impact(opponent_deviation);
            sum += impact * (outcome - expect_score(self.rating, opponent_rating, impact));
        }
        sum
    }

    /// Newton iteration for the new volatility.
    ///
    /// Starts from `x0 = ln(σ²)` and stops once the step falls below the
    /// configured tolerance. The iteration count is bounded; exceeding the
    /// bound is a fatal numeric error, never a silent unconverged estimate.
    fn solve_volatility(&self, delta: f64, variance: f64) -> Result<f64> {
        let a = self.volatility.powi(2).ln();
        let tau_sq = self.config.tau.powi(2);
        let rating_sq = self.rating.powi(2);
        let delta_sq = delta.powi(2);

        let mut x = a;
        for _ in 0..self.config.max_volatility_iterations {
            let ex = x.exp();
            let d = rating_sq + variance + ex;
            let h1 = -(x - a) / tau_sq - 0.5 * ex / d + 0.5 * ex * (delta / d).powi(2);
            let h2 = -1.0 / tau_sq - 0.5 * ex * (rating_sq + variance) / d.powi(2)
                + 0.5 * delta_sq * ex * (rating_sq + variance - ex) / d.powi(3);
            let next = x - h1 / h2;

            if (next - x).abs() < self.config.convergence_tolerance {
                return Ok((next / 2.0).exp());
            }
            x = next;
        }

        warn!(
            "volatility solve did not converge within {} iterations",
            self.config.max_volatility_iterations
        );
        Err(RatingError::NonConvergence {
            iterations: self.config.max_volatility_iterations,
        }
        .into())
    }
}
