//! Configuration for the rating engines
//!
//! This module holds the tunable parameters of both engines, their default
//! values, and validation.

pub mod rating;

// Re-export commonly used types
pub use rating::{EloConfig, Glicko2Config};
