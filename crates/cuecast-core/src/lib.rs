//! Cuecast Core - cue command model
//!
//! This crate holds the domain types shared by the cuecast control stack:
//! - **Commands**: [`ControlCommand`], [`CueId`] and [`TriggerKind`]
//! - **Level mapping**: normalized fader input to the receiver's slider range
//! - **Logging**: [`LogConfig`] consumed by the application's subscriber setup
//!
//! ```rust
//! use cuecast_core::{ControlCommand, CueId, TriggerKind};
//!
//! let cue: CueId = "7".parse().unwrap();
//! let command = ControlCommand::trigger(cue, TriggerKind::Start);
//! assert_eq!(command.cue().get(), 7);
//! ```

#![warn(missing_docs)]

/// Cue identifiers and control commands
pub mod command;
/// Error types
pub mod error;
/// Logging configuration
pub mod logging;

pub use command::{
    encode_level, decode_level, ControlCommand, CueId, TriggerKind, LEVEL_FLOOR, PALETTE_SIZE,
};
pub use error::{CoreError, Result};
pub use logging::LogConfig;
