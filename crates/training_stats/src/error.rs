//! Error types for building and reporting workouts.

use thiserror::Error;

/// Errors raised while turning a sensor package into a workout report.
#[derive(Debug, Error)]
pub enum TrainingError {
    #[error("unknown activity code: {0}")]
    UnknownActivityCode(String),

    #[error("{code}: expected {expected} arguments, got {got}")]
    ArgumentCount {
        code: String,
        expected: usize,
        got: usize,
    },

    #[error("{code}: argument {position} must be an integer, got {value}")]
    ArgumentType {
        code: String,
        position: usize,
        value: f64,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for training operations.
pub type TrainingResult<T> = Result<T, TrainingError>;
