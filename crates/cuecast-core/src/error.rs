//! Error types for the core domain
use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Normalized level outside 0.0-1.0 (or NaN)
    #[error("Level out of range: {0} (must be 0.0-1.0)")]
    InvalidRange(f32),

    /// Cue number that is not a positive integer
    #[error("Invalid cue number: {0:?}")]
    InvalidCue(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
