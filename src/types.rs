//! Common types shared by the rating engines

use serde::{Deserialize, Serialize};

/// Score of a game from the rated player's perspective, in `0.0..=1.0`.
/// Fractional values are allowed for aggregated results.
pub type Score = f64;

/// Score of a won game
pub const WIN: Score = 1.0;

/// Score of a drawn game
pub const DRAW: Score = 0.5;

/// Score of a lost game
pub const LOSS: Score = 0.0;

/// Display-scale rating state for a player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRating {
    pub rating: f64,
    pub deviation: f64,
    pub volatility: f64,
}

impl Default for PlayerRating {
    fn default() -> Self {
        Self {
            rating: 1500.0,
            deviation: 350.0,
            volatility: 0.06,
        }
    }
}
