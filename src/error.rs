//! Error types for the rating engines
//!
//! This module defines all error types using anyhow for the crate-wide
//! result type, with thiserror for the specific failure cases.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific rating-calculation failures
#[derive(Debug, thiserror::Error)]
pub enum RatingError {
    #[error("invalid outcome {value}: scores must lie within 0.0..=1.0")]
    InvalidOutcome { value: f64 },

    #[error("input length mismatch: expected {expected} paired entries, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("empty rating period: at least one game result is required")]
    EmptyPeriod,

    #[error("configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("degenerate variance: total game weight is zero")]
    DegenerateVariance,

    #[error("volatility update did not converge within {iterations} iterations")]
    NonConvergence { iterations: usize },
}
