//! Cue commands
//!
//! A [`ControlCommand`] is the immutable value handed over by whatever
//! produces user intent (a button grid, a CLI, a fader). It carries no
//! addressing or wire concerns; those belong to the message builder.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use crate::{CoreError, Result};

/// Number of cues offered by the quick-select palette
pub const PALETTE_SIZE: u32 = 12;

/// Slider value sent for a fully closed fader
pub const LEVEL_FLOOR: f32 = -64.0;

/// Span of the receiver's slider range above [`LEVEL_FLOOR`]
const LEVEL_SPAN: f32 = 64.0;

/// Positive cue number identifying a cue on the receiver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CueId(NonZeroU32);

impl CueId {
    /// Create a cue id, rejecting zero
    pub fn new(number: u32) -> Result<Self> {
        NonZeroU32::new(number)
            .map(Self)
            .ok_or_else(|| CoreError::InvalidCue(number.to_string()))
    }

    /// The cue number
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Cues offered by the quick-select palette (1 through [`PALETTE_SIZE`])
    pub fn palette() -> impl Iterator<Item = CueId> {
        (1..=PALETTE_SIZE).filter_map(NonZeroU32::new).map(CueId)
    }
}

impl From<NonZeroU32> for CueId {
    fn from(value: NonZeroU32) -> Self {
        Self(value)
    }
}

impl TryFrom<u32> for CueId {
    type Error = CoreError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<CueId> for u32 {
    fn from(cue: CueId) -> Self {
        cue.get()
    }
}

impl FromStr for CueId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<NonZeroU32>()
            .map(Self)
            .map_err(|_| CoreError::InvalidCue(s.to_string()))
    }
}

impl fmt::Display for CueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Start or stop, the two trigger actions a cue understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerKind {
    /// Start (GO) the cue
    Start,
    /// Stop the cue
    Stop,
}

impl TriggerKind {
    /// Path segment used in the cue address
    pub fn as_str(self) -> &'static str {
        match self {
            TriggerKind::Start => "start",
            TriggerKind::Stop => "stop",
        }
    }
}

impl fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A logical command against a single cue
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ControlCommand {
    /// Start the cue
    Start {
        /// Target cue
        cue: CueId,
    },
    /// Stop the cue
    Stop {
        /// Target cue
        cue: CueId,
    },
    /// Move the cue's main slider
    SetLevel {
        /// Target cue
        cue: CueId,
        /// Normalized fader position (0.0-1.0)
        value: f32,
    },
}

impl ControlCommand {
    /// Build a start/stop command
    pub fn trigger(cue: CueId, kind: TriggerKind) -> Self {
        match kind {
            TriggerKind::Start => ControlCommand::Start { cue },
            TriggerKind::Stop => ControlCommand::Stop { cue },
        }
    }

    /// Build a level command
    pub fn level(cue: CueId, value: f32) -> Self {
        ControlCommand::SetLevel { cue, value }
    }

    /// The cue this command addresses
    pub fn cue(&self) -> CueId {
        match self {
            ControlCommand::Start { cue }
            | ControlCommand::Stop { cue }
            | ControlCommand::SetLevel { cue, .. } => *cue,
        }
    }

    /// Trigger kind for start/stop commands
    pub fn trigger_kind(&self) -> Option<TriggerKind> {
        match self {
            ControlCommand::Start { .. } => Some(TriggerKind::Start),
            ControlCommand::Stop { .. } => Some(TriggerKind::Stop),
            ControlCommand::SetLevel { .. } => None,
        }
    }
}

/// Map a normalized fader position (0.0-1.0) onto the slider range (-64.0-0.0)
///
/// Values outside the unit range are rejected rather than clamped, so the
/// mapping stays exactly `raw * 64 - 64`.
pub fn encode_level(raw: f32) -> Result<f32> {
    if !(0.0..=1.0).contains(&raw) {
        return Err(CoreError::InvalidRange(raw));
    }
    Ok(raw * LEVEL_SPAN - LEVEL_SPAN)
}

/// Inverse of [`encode_level`]
pub fn decode_level(slider: f32) -> Result<f32> {
    if !(LEVEL_FLOOR..=0.0).contains(&slider) {
        return Err(CoreError::InvalidRange(slider));
    }
    Ok((slider + LEVEL_SPAN) / LEVEL_SPAN)
}
