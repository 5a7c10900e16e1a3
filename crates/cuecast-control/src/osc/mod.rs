//! OSC message layer
//!
//! Receivers expect OSC 1.0 messages over UDP. Cues are addressed as
//! `/cue/{number}/{action}`:
//!
//! | Command   | Address                   | Arguments        |
//! |-----------|---------------------------|------------------|
//! | Start     | `/cue/{n}/start`          | none             |
//! | Stop      | `/cue/{n}/stop`           | none             |
//! | Set level | `/cue/{n}/sliderLevel/0`  | `f` -64.0..=0.0  |
//!
//! ```rust
//! use cuecast_control::osc::{build_trigger, Message};
//! use cuecast_core::{CueId, TriggerKind};
//!
//! let message = build_trigger(CueId::new(5).unwrap(), TriggerKind::Stop);
//! let bytes = message.serialize();
//! assert_eq!(Message::deserialize(&bytes).unwrap().address(), "/cue/5/stop");
//! ```

pub mod address;
pub mod builder;
pub mod message;

pub use address::parse_cue_address;
pub use builder::{build_command, build_level, build_trigger};
pub use message::{Argument, Message};
