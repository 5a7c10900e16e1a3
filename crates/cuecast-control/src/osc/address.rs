//! Cue address space
//!
//! Builds and parses addresses like `/cue/3/start` and `/cue/3/sliderLevel/0`.

use cuecast_core::{decode_level, ControlCommand, CueId, TriggerKind};

use super::message::Message;
use crate::{error::ControlError, Result};

/// First path segment of every cue address
pub const CUE_ROOT: &str = "cue";
/// Path segment selecting a cue's slider
pub const SLIDER_LEVEL: &str = "sliderLevel";
/// Slider row addressed by level commands (the cue's main level)
pub const MAIN_SLIDER: u32 = 0;

/// Address for a start/stop trigger
pub fn trigger_address(cue: CueId, kind: TriggerKind) -> String {
    format!("/{}/{}/{}", CUE_ROOT, cue, kind.as_str())
}

/// Address for the cue's main slider level
pub fn level_address(cue: CueId) -> String {
    format!("/{}/{}/{}/{}", CUE_ROOT, cue, SLIDER_LEVEL, MAIN_SLIDER)
}

/// Parse a cue message back into the command that produced it
///
/// Supported address patterns:
/// - `/cue/{n}/start` - no arguments
/// - `/cue/{n}/stop` - no arguments
/// - `/cue/{n}/sliderLevel/0` - one float in -64.0..=0.0
pub fn parse_cue_address(message: &Message) -> Result<ControlCommand> {
    let address = message.address();
    let parts: Vec<&str> = address.trim_start_matches('/').split('/').collect();

    if parts.len() < 3 || parts[0] != CUE_ROOT {
        return Err(ControlError::InvalidMessage(format!(
            "Not a cue address: {}",
            address
        )));
    }

    let cue: CueId = parts[1]
        .parse()
        .map_err(|_| ControlError::InvalidMessage(format!("Invalid cue number: {}", parts[1])))?;

    match &parts[2..] {
        ["start"] => parse_trigger(message, cue, TriggerKind::Start),
        ["stop"] => parse_trigger(message, cue, TriggerKind::Stop),
        [SLIDER_LEVEL, row] if *row == MAIN_SLIDER.to_string() => parse_level(message, cue),
        _ => Err(ControlError::InvalidMessage(format!(
            "Unknown cue action: {}",
            address
        ))),
    }
}

fn parse_trigger(message: &Message, cue: CueId, kind: TriggerKind) -> Result<ControlCommand> {
    if !message.arguments().is_empty() {
        return Err(ControlError::InvalidMessage(format!(
            "Trigger {} takes no arguments",
            message.address()
        )));
    }
    Ok(ControlCommand::trigger(cue, kind))
}

fn parse_level(message: &Message, cue: CueId) -> Result<ControlCommand> {
    let slider = match message.arguments() {
        [argument] => argument.as_float().ok_or_else(|| {
            ControlError::InvalidMessage(format!("Level argument must be a float: {}", argument))
        })?,
        _ => {
            return Err(ControlError::InvalidMessage(
                "Level message needs exactly one argument".to_string(),
            ))
        }
    };
    Ok(ControlCommand::level(cue, decode_level(slider)?))
}
