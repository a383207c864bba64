//! Rating engine configuration

use crate::error::{RatingError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the logistic Elo engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EloConfig {
    /// Rating assigned to a new player
    pub initial_rating: f64,
    /// Logistic scale constant controlling expected-score sensitivity
    pub scale: f64,
    /// Default k-factor applied to updates
    pub k_factor: f64,
}

impl Default for EloConfig {
    fn default() -> Self {
        Self {
            initial_rating: 1500.0,
            scale: 400.0,
            k_factor: 32.0,
        }
    }
}

impl EloConfig {
    /// Create conservative configuration (slower rating changes)
    pub fn conservative() -> Self {
        Self {
            k_factor: 16.0,
            ..Self::default()
        }
    }

    /// Create aggressive configuration (faster rating changes)
    pub fn aggressive() -> Self {
        Self {
            k_factor: 64.0,
            ..Self::default()
        }
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !self.initial_rating.is_finite() {
            return Err(RatingError::ConfigurationError {
                message: "Initial rating must be finite".to_string(),
            }
            .into());
        }

        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(RatingError::ConfigurationError {
                message: "Scale must be positive".to_string(),
            }
            .into());
        }

        if !self.k_factor.is_finite() || self.k_factor <= 0.0 {
            return Err(RatingError::ConfigurationError {
                message: "K-factor must be positive".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// Configuration for the Glicko-2 engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Glicko2Config {
    /// Rating assigned to a new player
    pub initial_rating: f64,
    /// Rating deviation assigned to a new player
    pub initial_deviation: f64,
    /// Volatility assigned to a new player
    pub initial_volatility: f64,
    /// System constant bounding the change in volatility over time
    pub tau: f64,
    /// Iteration bound for the volatility solve
    pub max_volatility_iterations: usize,
    /// Newton step size below which the volatility solve is converged
    pub convergence_tolerance: f64,
}

impl Default for Glicko2Config {
    fn default() -> Self {
        Self {
            initial_rating: 1500.0,
            initial_deviation: 350.0,
            initial_volatility: 0.06,
            tau: 0.5,
            max_volatility_iterations: 100,
            convergence_tolerance: 1e-12,
        }
    }
}

impl Glicko2Config {
    /// Create conservative configuration (volatility reacts slowly to
    /// surprising results)
    pub fn conservative() -> Self {
        Self {
            tau: 0.3,
            ..Self::default()
        }
    }

    /// Create aggressive configuration (volatility reacts quickly to
    /// surprising results)
    pub fn aggressive() -> Self {
        Self {
            tau: 1.0,
            ..Self::default()
        }
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !self.initial_rating.is_finite() {
            return Err(RatingError::ConfigurationError {
                message: "Initial rating must be finite".to_string(),
            }
            .into());
        }

        if !self.initial_deviation.is_finite() || self.initial_deviation <= 0.0 {
            return Err(RatingError::ConfigurationError {
                message: "Initial deviation must be positive".to_string(),
            }
            .into());
        }

        if !self.initial_volatility.is_finite() || self.initial_volatility <= 0.0 {
            return Err(RatingError::ConfigurationError {
                message: "Initial volatility must be positive".to_string(),
            }
            .into());
        }

        if !self.tau.is_finite() || self.tau <= 0.0 {
            return Err(RatingError::ConfigurationError {
                message: "Tau must be positive".to_string(),
            }
            .into());
        }

        if self.max_volatility_iterations == 0 {
            return Err(RatingError::ConfigurationError {
                message: "Volatility iteration bound must be at least 1".to_string(),
            }
            .into());
        }

        if !self.convergence_tolerance.is_finite() || self.convergence_tolerance <= 0.0 {
            return Err(RatingError::ConfigurationError {
                message: "Convergence tolerance must be positive".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
