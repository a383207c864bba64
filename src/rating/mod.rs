//! Rating engines
//!
//! This module provides the two rating systems: a logistic Elo model and
//! the Glicko-2 model with rating deviation and volatility tracking. The
//! engines are independent; each rated entity owns its state as a plain
//! value.

pub mod elo;
pub mod glicko2;

pub(crate) mod scale;

// Re-export commonly used types
pub use elo::EloRating;
pub use glicko2::{expect_score, reduce_impact, GlickoRating};
