//! Error types for the control system
use cuecast_core::CoreError;
use thiserror::Error;

/// Control system errors
#[derive(Error, Debug)]
pub enum ControlError {
    /// Domain error (level out of range, bad cue number)
    #[error(transparent)]
    Core(#[from] CoreError),

    /// OSC decode error
    #[error("OSC error: {0}")]
    OscError(String),

    /// Invalid message format
    #[error("Invalid message: {0}")]
    InvalidMessage(String),

    /// Endpoint string that cannot name a receiver
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

impl ControlError {
    /// True when a builder rejected its input level
    pub fn is_invalid_range(&self) -> bool {
        matches!(self, ControlError::Core(CoreError::InvalidRange(_)))
    }
}

/// Result type for control operations
pub type Result<T> = std::result::Result<T, ControlError>;
