//! Message builders
//!
//! Pure functions from cue commands to OSC messages. Level scaling happens
//! here, so a built message already carries the receiver's slider value.

use cuecast_core::{encode_level, ControlCommand, CueId, TriggerKind};

use super::address::{level_address, trigger_address};
use super::message::{Argument, Message};
use crate::Result;

/// Build a start/stop message: `/cue/{cue}/{start|stop}` with no arguments
pub fn build_trigger(cue: CueId, kind: TriggerKind) -> Message {
    Message::from_parts(trigger_address(cue, kind), Vec::new())
}

/// Build a level message: `/cue/{cue}/sliderLevel/0` with `raw_level * 64 - 64`
///
/// Fails with `InvalidRange` when `raw_level` is outside 0.0-1.0.
pub fn build_level(cue: CueId, raw_level: f32) -> Result<Message> {
    let slider = encode_level(raw_level)?;
    Ok(Message::from_parts(
        level_address(cue),
        vec![Argument::Float(slider)],
    ))
}

/// Build the message for any command
pub fn build_command(command: &ControlCommand) -> Result<Message> {
    match *command {
        ControlCommand::Start { cue } => Ok(build_trigger(cue, TriggerKind::Start)),
        ControlCommand::Stop { cue } => Ok(build_trigger(cue, TriggerKind::Stop)),
        ControlCommand::SetLevel { cue, value } => build_level(cue, value),
    }
}
