//! Skill Ladder - Elo and Glicko-2 rating engines
//!
//! This crate provides pure-computation rating engines for competitive
//! ladders: a logistic Elo model and the full Glicko-2 model with rating
//! deviation and volatility tracking. Each rated entity owns its state as
//! a plain value; the crate performs no I/O and holds no registries.

pub mod config;
pub mod error;
pub mod rating;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{RatingError, Result};
pub use types::*;

// Re-export key components
pub use config::{EloConfig, Glicko2Config};
pub use rating::{expect_score, reduce_impact, EloRating, GlickoRating};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
